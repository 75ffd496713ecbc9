//! User Interface Components
//!
//! - **forms**: the create-user form
//! - **input**: text/password inputs and validation feedback
//! - **styles**: inline style constants shared by the form

pub mod forms;
pub mod input;
pub mod styles;
