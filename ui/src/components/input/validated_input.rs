use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub input_type: InputType,
    pub input_style: String,
    /// Rendered as `aria-invalid`
    #[props(default)]
    pub invalid: bool,
    pub on_change: EventHandler<String>,
}

/// A labelled input that reports every edit through `on_change`
#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        label {
            r#for: "{props.id}",
            style: crate::components::styles::FORM_LABEL,
            "{props.label}"
        }
        input {
            id: "{props.id}",
            aria_label: "{props.label}",
            aria_invalid: props.invalid,
            style: "{props.input_style}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
