//! Configuration for the signup client
//!
//! The endpoint and bearer token are supplied by whoever mounts the form,
//! never compiled into the component itself.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SIGNUP_ENDPOINT: &str =
    "https://api.challenge.hennge.com/password-validation-challenge-api/001/challenge-signup";

pub const DEFAULT_USER_AGENT: &str = "signup-form/0.1";

/// Invalid signup configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("endpoint must be an http(s) URL, got '{0}'")]
    InvalidEndpoint(String),

    #[error("no API token configured")]
    MissingToken,

    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

/// Where and how the create-user form submits credentials
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupConfig {
    /// Full URL of the signup endpoint
    pub endpoint: String,

    /// Bearer token sent in the Authorization header
    pub token: String,

    /// User agent for non-browser targets (browsers ignore it)
    pub user_agent: String,
}

// The token never shows up in debug output
impl fmt::Debug for SignupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("SignupConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &token)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SIGNUP_ENDPOINT.to_string(),
            token: String::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SignupConfig {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            ..Self::default()
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Parse a JSON configuration; missing fields fall back to defaults
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.endpoint.trim();
        let has_scheme = endpoint.starts_with("https://") || endpoint.starts_with("http://");
        let has_host = endpoint
            .split_once("://")
            .map(|(_, rest)| !rest.is_empty() && !rest.starts_with('/'))
            .unwrap_or(false);
        if !has_scheme || !has_host {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }

        if self.token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }

        Ok(())
    }
}
