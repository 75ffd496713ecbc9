use serde::{Deserialize, Serialize};

/// JSON body posted to the signup endpoint
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClientSignupRequest {
    pub username: String,
    pub password: String,
}

impl ClientSignupRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

/// What the endpoint answered; only the status is inspected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSignupResponse {
    pub status: u16,
}

impl ClientSignupResponse {
    /// Same range the fetch API treats as `ok`
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
