use thiserror::Error;

use crate::services::config::ConfigError;

/// Failures talking to the signup endpoint
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response
    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// The HTTP client or request could not be built
    #[error("Request error: {message}")]
    RequestBuildFailed { message: String },

    /// Client configuration was rejected before sending
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ClientError::RequestBuildFailed {
                message: err.to_string(),
            }
        } else {
            ClientError::NetworkError {
                message: err.to_string(),
            }
        }
    }
}

/// User-facing errors reported by the signup endpoint.
/// The display text is exactly what the form shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Sorry, the entered password is not allowed, please try a different one.")]
    PasswordNotAllowed,

    #[error("Not authenticated to access this resource.")]
    NotAuthenticated,

    #[error("Something went wrong, please try again.")]
    SomethingWentWrong,
}

impl ApiError {
    /// Maps a non-success HTTP status to the message shown to the user
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ApiError::PasswordNotAllowed,
            401 | 403 => ApiError::NotAuthenticated,
            _ => ApiError::SomethingWentWrong,
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(_: ClientError) -> Self {
        ApiError::SomethingWentWrong
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
