//! Feature modules
//!
//! - **signup**: create-user form state, password rules, and submission flow

pub mod signup;
