use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info, instrument};

use super::errors::{ClientError, ClientResult};
use super::types::*;
use crate::services::config::SignupConfig;

/// Anything that can submit a signup request and report the HTTP status
#[async_trait(?Send)]
pub trait SignupApi {
    async fn create_user(&self, request: &ClientSignupRequest) -> ClientResult<ClientSignupResponse>;
}

/// HTTP client for the signup endpoint
#[derive(Clone, Debug)]
pub struct SignupClient {
    pub(crate) http_client: Client,
    config: SignupConfig,
}

impl SignupClient {
    /// Create a client for the given configuration.
    /// The configuration is checked here so bad settings surface before a submit.
    pub fn new(config: SignupConfig) -> ClientResult<Self> {
        config.validate()?;

        Ok(Self {
            http_client: build_http_client(&config)?,
            config,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &SignupConfig) -> ClientResult<Client> {
    Ok(Client::builder().user_agent(config.user_agent.as_str()).build()?)
}

// Browsers own the User-Agent header
#[cfg(target_arch = "wasm32")]
fn build_http_client(_config: &SignupConfig) -> ClientResult<Client> {
    Ok(Client::builder().build()?)
}

// reqwest::Client has no equality, two clients are the same if they post to the same place
impl PartialEq for SignupClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

/// What the form submits through: a working client, or the reason there is none.
/// A misconfigured form still renders and reports the generic error on submit.
#[derive(Clone, Debug, PartialEq)]
pub enum SignupBackend {
    Client(SignupClient),
    Unavailable(String),
}

impl SignupBackend {
    pub fn from_config(config: SignupConfig) -> Self {
        match SignupClient::new(config) {
            Ok(client) => SignupBackend::Client(client),
            Err(e) => SignupBackend::Unavailable(e.to_string()),
        }
    }
}

#[async_trait(?Send)]
impl SignupApi for SignupClient {
    #[instrument(skip(self, request), err)]
    async fn create_user(&self, request: &ClientSignupRequest) -> ClientResult<ClientSignupResponse> {
        info!("Submitting signup to {}", self.config.endpoint);

        let response = self
            .http_client
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.config.token))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Signup request failed: {}", e);
                ClientError::from(e)
            })?;

        let status = response.status().as_u16();
        info!("Signup endpoint responded with status {}", status);

        Ok(ClientSignupResponse { status })
    }
}

#[async_trait(?Send)]
impl SignupApi for SignupBackend {
    async fn create_user(&self, request: &ClientSignupRequest) -> ClientResult<ClientSignupResponse> {
        match self {
            SignupBackend::Client(client) => client.create_user(request).await,
            SignupBackend::Unavailable(reason) => {
                error!("Signup client unavailable: {}", reason);
                Err(ClientError::RequestBuildFailed {
                    message: reason.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::config::ConfigError;

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = SignupClient::new(SignupConfig::default()).unwrap_err();
        assert!(matches!(err, ClientError::Config(ConfigError::MissingToken)));
    }

    #[test]
    fn test_clients_compare_by_config() {
        let config = SignupConfig::new("https://example.com/signup", "token");
        let a = SignupClient::new(config.clone()).unwrap();
        let b = SignupClient::new(config).unwrap();
        assert!(a == b);

        let c = SignupClient::new(SignupConfig::new("https://example.com/signup", "other")).unwrap();
        assert!(a != c);
    }

    #[test]
    fn test_backend_from_config() {
        let backend = SignupBackend::from_config(SignupConfig::new("https://example.com/signup", "token"));
        assert!(matches!(backend, SignupBackend::Client(_)));

        let backend = SignupBackend::from_config(SignupConfig::new("not a url", "token"));
        assert_eq!(
            backend,
            SignupBackend::Unavailable(
                "Configuration error: endpoint must be an http(s) URL, got 'not a url'".to_string()
            )
        );
    }

    #[test]
    fn test_debug_output_hides_token() {
        let config = SignupConfig::new("https://example.com/signup", "secret-token");
        let client = SignupClient::new(config.clone()).unwrap();
        assert!(!format!("{:?}", client).contains("secret-token"));

        let backend = SignupBackend::from_config(config);
        assert!(!format!("{:?}", backend).contains("secret-token"));
    }

    #[tokio::test]
    async fn test_unavailable_backend_fails_without_sending() {
        let backend = SignupBackend::Unavailable("no API token configured".to_string());
        let result = backend
            .create_user(&ClientSignupRequest::new("alice", "Abcdefghij1"))
            .await;
        assert!(matches!(result, Err(ClientError::RequestBuildFailed { .. })));
    }
}
