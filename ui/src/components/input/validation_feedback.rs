use crate::components::styles;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct PasswordRuleFeedbackProps {
    pub errors: Vec<String>,
}

/// Lists every password rule the current value breaks; renders nothing when it passes
#[component]
pub fn PasswordRuleFeedback(props: PasswordRuleFeedbackProps) -> Element {
    if props.errors.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul {
            class: "validation-feedback password-rules",
            style: styles::VALIDATION_LIST,
            for (i, error) in props.errors.iter().enumerate() {
                li { key: "{i}", "{error}" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ApiErrorFeedbackProps {
    pub message: Option<String>,
}

#[component]
pub fn ApiErrorFeedback(props: ApiErrorFeedbackProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                class: "validation-feedback api-error",
                style: styles::API_ERROR,
                "{message}"
            }
        },
        None => rsx! {},
    }
}
