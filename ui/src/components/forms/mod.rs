pub mod create_user_form;

pub use create_user_form::*;
