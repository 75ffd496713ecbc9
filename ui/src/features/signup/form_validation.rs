use std::fmt;

use crate::features::signup::{password_rules::validate_password, types::SignupState};

/// Why a submission cannot be sent
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitBlocker {
    MissingUsername,
    InvalidPassword { violations: usize },
}

impl fmt::Display for SubmitBlocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitBlocker::MissingUsername => write!(f, "username is empty"),
            SubmitBlocker::InvalidPassword { violations } => {
                write!(f, "password breaks {} rule(s)", violations)
            }
        }
    }
}

/// Checks the form against fresh password validation; any recorded
/// errors on the state are ignored.
pub fn submit_blocker(state: &SignupState) -> Option<SubmitBlocker> {
    if state.username.is_empty() {
        return Some(SubmitBlocker::MissingUsername);
    }

    let violations = validate_password(&state.password).len();
    if violations > 0 {
        return Some(SubmitBlocker::InvalidPassword { violations });
    }

    None
}

/// Whether the submit button should accept clicks
pub fn can_submit(state: &SignupState) -> bool {
    !state.is_submitting()
}
