//! Signup orchestrator - runs one form submission from validation to outcome

use tracing::{info, warn};

use crate::features::signup::{form_validation::submit_blocker, types::*};
use crate::services::client::{ApiError, ClientSignupRequest, SignupApi};

/// Sends one signup request and maps the reply to an outcome.
/// Transport failures and unexpected statuses collapse into the generic error.
pub async fn send_signup<A>(api: &A, request: &ClientSignupRequest) -> SignupOutcome
where
    A: SignupApi + ?Sized,
{
    match api.create_user(request).await {
        Ok(response) if response.is_ok() => SignupOutcome::Created,
        Ok(response) => {
            warn!("[Signup] Endpoint rejected signup with status {}", response.status);
            SignupOutcome::Rejected(ApiError::from_status(response.status))
        }
        Err(e) => {
            warn!("[Signup] Request failed: {}", e);
            SignupOutcome::Rejected(ApiError::from(e))
        }
    }
}

/// Handles a form submission.
///
/// `state` is the form as it was when the user submitted; every change goes
/// through `dispatch`. `on_created` is called with `true` only when the
/// endpoint accepted the new user.
pub async fn execute_signup<A, D, C>(api: &A, state: SignupState, dispatch: D, on_created: C)
where
    A: SignupApi + ?Sized,
    D: Fn(SignupAction),
    C: FnOnce(bool),
{
    if state.is_submitting() {
        info!("[Signup] Submission already in flight - ignoring");
        return;
    }

    dispatch(SignupAction::ClearApiError);
    dispatch(SignupAction::Revalidate);

    if let Some(reason) = submit_blocker(&state) {
        info!("[Signup] Submission aborted: {}", reason);
        dispatch(SignupAction::SetSubmitStatus(SubmitStatus::Idle));
        return;
    }

    dispatch(SignupAction::SetSubmitStatus(SubmitStatus::Submitting));
    let outcome = send_signup(api, &state.signup_request()).await;
    dispatch(SignupAction::SubmitFinished(outcome));

    if outcome == SignupOutcome::Created {
        info!("[Signup] User created");
        on_created(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client::{ClientError, ClientResult, ClientSignupResponse};
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Endpoint stand-in that records every request it receives
    struct MockSignupApi {
        reply: Result<u16, ClientError>,
        requests: RefCell<Vec<ClientSignupRequest>>,
    }

    impl MockSignupApi {
        fn with_status(status: u16) -> Self {
            Self {
                reply: Ok(status),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(ClientError::NetworkError {
                    message: "connection reset".to_string(),
                }),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl SignupApi for MockSignupApi {
        async fn create_user(&self, request: &ClientSignupRequest) -> ClientResult<ClientSignupResponse> {
            self.requests.borrow_mut().push(request.clone());
            self.reply
                .clone()
                .map(|status| ClientSignupResponse { status })
        }
    }

    fn filled_state(username: &str, password: &str) -> SignupState {
        let mut state = SignupState::default();
        state.reduce_in_place(SignupAction::SetUsername(username.to_string()));
        state.reduce_in_place(SignupAction::SetPassword(password.to_string()));
        state
    }

    /// Runs a submission against a local copy of the state and reports
    /// the final state plus every value passed to the callback
    async fn submit(api: &MockSignupApi, state: SignupState) -> (SignupState, Vec<bool>) {
        let store = RefCell::new(state.clone());
        let created = RefCell::new(Vec::new());

        execute_signup(
            api,
            state,
            |action| store.borrow_mut().reduce_in_place(action),
            |flag| created.borrow_mut().push(flag),
        )
        .await;

        (store.into_inner(), created.into_inner())
    }

    #[tokio::test]
    async fn test_empty_username_makes_no_request() {
        let api = MockSignupApi::with_status(200);
        let (state, created) = submit(&api, filled_state("", "Abcdefghij1")).await;

        assert_eq!(api.calls(), 0);
        assert!(created.is_empty());
        assert_eq!(state.submit_status, SubmitStatus::Idle);
        assert_eq!(state.api_error, None);
    }

    #[tokio::test]
    async fn test_invalid_password_makes_no_request() {
        let api = MockSignupApi::with_status(200);
        let (state, created) = submit(&api, filled_state("alice", "short1A")).await;

        assert_eq!(api.calls(), 0);
        assert!(created.is_empty());
        assert_eq!(
            state.validation_errors,
            vec!["Password must be at least 10 characters long".to_string()]
        );
    }

    #[tokio::test]
    async fn test_stale_validation_is_recomputed_on_submit() {
        // password set without going through SetPassword, so no errors recorded yet
        let state = SignupState {
            username: "alice".to_string(),
            password: "nodigits".to_string(),
            ..SignupState::default()
        };
        let api = MockSignupApi::with_status(200);
        let (state, _) = submit(&api, state).await;

        assert_eq!(api.calls(), 0);
        assert_eq!(state.validation_errors.len(), 3);
    }

    #[tokio::test]
    async fn test_rejected_password_sets_api_error() {
        let api = MockSignupApi::with_status(400);
        let (state, created) = submit(&api, filled_state("alice", "Abcdefghij1")).await;

        assert_eq!(api.calls(), 1);
        assert!(created.is_empty());
        assert_eq!(
            state.api_error_message().as_deref(),
            Some("Sorry, the entered password is not allowed, please try a different one.")
        );
        assert_eq!(state.submit_status, SubmitStatus::Failed);
    }

    #[tokio::test]
    async fn test_success_invokes_callback() {
        let api = MockSignupApi::with_status(200);
        let (state, created) = submit(&api, filled_state("alice", "Abcdefghij1")).await;

        assert_eq!(created, vec![true]);
        assert_eq!(state.api_error, None);
        assert_eq!(state.submit_status, SubmitStatus::Succeeded);
        assert_eq!(
            api.requests.borrow()[0],
            ClientSignupRequest::new("alice", "Abcdefghij1")
        );
    }

    #[tokio::test]
    async fn test_auth_and_server_errors() {
        for (status, message) in [
            (401, "Not authenticated to access this resource."),
            (403, "Not authenticated to access this resource."),
            (500, "Something went wrong, please try again."),
            (418, "Something went wrong, please try again."),
        ] {
            let api = MockSignupApi::with_status(status);
            let (state, created) = submit(&api, filled_state("alice", "Abcdefghij1")).await;
            assert!(created.is_empty());
            assert_eq!(state.api_error_message().as_deref(), Some(message));
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_generic_error() {
        let api = MockSignupApi::failing();
        let (state, created) = submit(&api, filled_state("alice", "Abcdefghij1")).await;

        assert_eq!(api.calls(), 1);
        assert!(created.is_empty());
        assert_eq!(state.api_error, Some(ApiError::SomethingWentWrong));
    }

    #[tokio::test]
    async fn test_submit_clears_previous_api_error() {
        let mut state = filled_state("", "Abcdefghij1");
        state.api_error = Some(ApiError::NotAuthenticated);

        let api = MockSignupApi::with_status(200);
        let (state, _) = submit(&api, state).await;
        assert_eq!(state.api_error, None);
    }

    /// Log sink shared with the fmt subscriber
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_logs_do_not_include_username() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let api = MockSignupApi::with_status(200);
        let (_, created) = submit(&api, filled_state("distinctive-user", "Abcdefghij1")).await;
        assert_eq!(created, vec![true]);

        let api = MockSignupApi::with_status(400);
        submit(&api, filled_state("distinctive-user", "Abcdefghij1")).await;

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("User created"));
        assert!(!output.contains("distinctive-user"));
        assert!(!output.contains("Abcdefghij1"));
    }

    #[tokio::test]
    async fn test_submission_in_flight_is_ignored() {
        let mut state = filled_state("alice", "Abcdefghij1");
        state.submit_status = SubmitStatus::Submitting;

        let api = MockSignupApi::with_status(200);
        let dispatched = Cell::new(0);
        execute_signup(&api, state, |_| dispatched.set(dispatched.get() + 1), |_| {}).await;

        assert_eq!(api.calls(), 0);
        assert_eq!(dispatched.get(), 0);
    }
}
