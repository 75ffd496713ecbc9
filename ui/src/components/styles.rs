//! Inline styles for the create-user form.
//! Written once, never mutated.

pub const FORM_WRAPPER: &str =
    "max-width: 500px; width: 80%; background-color: #efeef5; padding: 24px; border-radius: 8px;";

pub const FORM: &str = "display: flex; flex-direction: column; gap: 8px;";

pub const FORM_LABEL: &str = "font-weight: 700;";

pub const FORM_INPUT: &str = "outline: none; padding: 8px 16px; height: 40px; font-size: 14px; \
     background-color: #f8f7fa; border: 1px solid rgba(0, 0, 0, 0.12); border-radius: 4px;";

pub const FORM_BUTTON: &str = "outline: none; border-radius: 4px; border: 1px solid rgba(0, 0, 0, 0.12); \
     background-color: #7135d2; color: white; font-size: 16px; font-weight: 500; height: 40px; \
     padding: 0 8px; display: flex; align-items: center; justify-content: center; \
     margin-top: 8px; align-self: flex-end; cursor: pointer;";

pub const FORM_BUTTON_BUSY: &str = "opacity: 0.6; cursor: progress;";

pub const VALIDATION_LIST: &str = "margin-top: 8px; color: red; padding-left: 16px;";

pub const API_ERROR: &str = "color: red; margin-top: 8px;";
