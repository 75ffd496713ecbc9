use crate::console_error;
use dioxus::prelude::*;

use crate::components::forms::CreateUserForm;
use crate::features::signup::{SignupAction, SignupState};
use crate::services::client::SignupBackend;
use crate::services::config::SignupConfig;

#[derive(Props, PartialEq, Clone)]
pub struct SignupServiceProps {
    /// Endpoint and token for the signup call
    pub config: SignupConfig,
    pub on_user_created: EventHandler<bool>,
}

/// Owns the form state for one mounted create-user form
#[component]
pub fn SignupService(props: SignupServiceProps) -> Element {
    let mut state = use_signal(SignupState::default);

    let config = props.config.clone();
    let backend = use_hook(move || {
        let backend = SignupBackend::from_config(config);
        if let SignupBackend::Unavailable(reason) = &backend {
            console_error!("[Signup Service] Signup disabled: {}", reason);
        }
        backend
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: SignupAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        div {
            class: "signup-service-container",
            CreateUserForm {
                state: state,
                dispatch: dispatch,
                backend: backend,
                on_user_created: props.on_user_created
            }
        }
    }
}
