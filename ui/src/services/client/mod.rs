// Client-side signup functionality
//
// This module provides:
// - The `SignupApi` seam the create-user form submits through
// - A reqwest-backed implementation that posts to the configured endpoint
// - Request/response types and the user-facing error mapping

pub mod types;
pub mod errors;
pub mod signup_client;

// Re-export core types for easy access
pub use types::{ClientSignupRequest, ClientSignupResponse};

// Re-export error types
pub use errors::{ApiError, ClientError, ClientResult};

// Re-export main client classes
pub use signup_client::{SignupApi, SignupBackend, SignupClient};
