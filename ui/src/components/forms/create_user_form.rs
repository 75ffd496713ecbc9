//! Create-user form: username, password, and submission to the signup endpoint

use dioxus::prelude::*;

use crate::components::{
    input::{ApiErrorFeedback, InputType, PasswordRuleFeedback, ValidatedInput},
    styles,
};
use crate::features::signup::{can_submit, execute_signup, SignupAction, SignupState};
use crate::services::client::SignupBackend;
use crate::{console_info, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct CreateUserFormProps {
    pub state: Signal<SignupState>,
    pub dispatch: EventHandler<SignupAction>,
    pub backend: SignupBackend,
    /// Called with `true` once the endpoint has created the user
    pub on_user_created: EventHandler<bool>,
}

#[component]
pub fn CreateUserForm(props: CreateUserFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_user_created = props.on_user_created;
    let backend = props.backend.clone();

    let button_style = if state().is_submitting() {
        format!("{} {}", styles::FORM_BUTTON, styles::FORM_BUTTON_BUSY)
    } else {
        styles::FORM_BUTTON.to_string()
    };

    rsx! {
        div {
            class: "create-user-form",
            style: styles::FORM_WRAPPER,

            form {
                style: styles::FORM,
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();

                    let snapshot = state();
                    if snapshot.is_submitting() {
                        console_warn!("[Signup] Submit ignored - request already in flight");
                        return;
                    }
                    console_info!("[Signup] Submitting form");

                    let backend = backend.clone();
                    spawn(async move {
                        execute_signup(
                            &backend,
                            snapshot,
                            move |action| dispatch.call(action),
                            move |created| on_user_created.call(created),
                        )
                        .await;
                    });
                },

                ValidatedInput {
                    id: "username".to_string(),
                    label: "Username".to_string(),
                    value: state().username,
                    input_type: InputType::Text,
                    input_style: styles::FORM_INPUT.to_string(),
                    on_change: move |data: String| {
                        dispatch.call(SignupAction::SetUsername(data));
                    }
                }

                ValidatedInput {
                    id: "password".to_string(),
                    label: "Password".to_string(),
                    value: state().password,
                    input_type: InputType::Password,
                    input_style: styles::FORM_INPUT.to_string(),
                    invalid: state().has_validation_errors(),
                    on_change: move |data: String| {
                        dispatch.call(SignupAction::SetPassword(data));
                    }
                }

                PasswordRuleFeedback {
                    errors: state().validation_errors
                }

                ApiErrorFeedback {
                    message: state().api_error_message()
                }

                button {
                    r#type: "submit",
                    style: "{button_style}",
                    disabled: !can_submit(&state()),
                    if state().is_submitting() {
                        "Creating..."
                    } else {
                        "Create User"
                    }
                }
            }
        }
    }
}
