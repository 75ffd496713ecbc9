mod signup_config;

pub use signup_config::*;
