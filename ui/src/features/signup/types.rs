// Core types for the create-user form - no dioxus imports needed here
use crate::services::client::{ApiError, ClientSignupRequest};

use super::password_rules::validate_password;

/// Lifecycle of a single submission
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// How a submission that reached the endpoint ended
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SignupOutcome {
    Created,
    Rejected(ApiError),
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum SignupAction {
    SetUsername(String),
    SetPassword(String),
    ClearApiError,
    Revalidate,
    SetSubmitStatus(SubmitStatus),
    SubmitFinished(SignupOutcome),
}

/// Everything the create-user form shows
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupState {
    pub username: String,
    pub password: String,
    /// Messages for the rules the current password breaks, in rule order
    pub validation_errors: Vec<String>,
    pub api_error: Option<ApiError>,
    pub submit_status: SubmitStatus,
}

impl SignupState {
    pub fn is_submitting(&self) -> bool {
        self.submit_status == SubmitStatus::Submitting
    }

    pub fn has_validation_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }

    pub fn api_error_message(&self) -> Option<String> {
        self.api_error.map(|e| e.to_string())
    }

    /// Request body for the current fields
    pub fn signup_request(&self) -> ClientSignupRequest {
        ClientSignupRequest::new(&self.username, &self.password)
    }

    pub fn reduce_in_place(&mut self, action: SignupAction) {
        match action {
            // A server error is stale once the user edits either field
            SignupAction::SetUsername(username) => {
                self.username = username;
                self.api_error = None;
            }
            SignupAction::SetPassword(password) => {
                self.validation_errors = validate_password(&password);
                self.password = password;
                self.api_error = None;
            }
            SignupAction::ClearApiError => {
                self.api_error = None;
            }
            SignupAction::Revalidate => {
                self.validation_errors = validate_password(&self.password);
            }
            SignupAction::SetSubmitStatus(status) => {
                self.submit_status = status;
            }
            SignupAction::SubmitFinished(SignupOutcome::Created) => {
                self.submit_status = SubmitStatus::Succeeded;
            }
            SignupAction::SubmitFinished(SignupOutcome::Rejected(error)) => {
                self.api_error = Some(error);
                self.submit_status = SubmitStatus::Failed;
            }
        }
    }
}
