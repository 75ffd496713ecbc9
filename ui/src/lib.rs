//! This crate contains the create-user signup form and the services behind it.

pub mod app;
pub use app::SignupService;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;

pub use services::config::{SignupConfig, DEFAULT_SIGNUP_ENDPOINT};
