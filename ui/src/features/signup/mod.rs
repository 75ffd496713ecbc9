pub mod form_validation;
pub mod orchestrator;
pub mod password_rules;
pub mod types;

pub use form_validation::*;
pub use orchestrator::{execute_signup, send_signup};
pub use password_rules::*;
pub use types::*;
