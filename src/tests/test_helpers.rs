//! Shared test helper functions and constants
//!
//! Provides standardized configurations, header mappings, scripted issuers,
//! and wiremock token endpoints so individual test modules stay short.

use crate::config::{EnvConfig, Environment};
use crate::error::AuthError;
use crate::headers::{AuthHeaders, CLAIM_SET_HEADER};
use crate::issuer::{IssuedToken, TokenIssuer};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// Re-export commonly used types
pub use wiremock::matchers::{body_json, method, path};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

// ==================== Test constants ====================

/// A structurally token-shaped value for the claim-set header.
pub const TEST_TOKEN: &str = "eyJ0eXAiOiJKV1QifQ.eyJzdWIiOiJ0ZXN0In0.c2ln";

/// Path of the mocked token endpoint.
pub const TOKEN_PATH: &str = "/api/token/generate";

// ==================== Config helpers ====================

/// A configuration that requires authentication (local environment).
pub fn auth_config() -> EnvConfig {
    EnvConfig::for_environment(Environment::Local, false)
}

/// A configuration that does not require authentication (mock environment).
pub fn no_auth_config() -> EnvConfig {
    EnvConfig::for_environment(Environment::Mock, false)
}

/// An auth-requiring configuration whose token endpoint is `server`.
pub fn config_for_server(server: &MockServer) -> EnvConfig {
    let mut config = auth_config();
    config.token_url = Some(format!("{}{TOKEN_PATH}", server.uri()));
    config
}

// ==================== Header helpers ====================

/// A header mapping carrying the claim-set field, as a real issuance would.
pub fn issued_headers() -> AuthHeaders {
    let mut headers = AuthHeaders::new();
    headers.insert(CLAIM_SET_HEADER, TEST_TOKEN);
    headers
}

/// A non-empty header mapping without the claim-set field.
pub fn claimless_headers() -> AuthHeaders {
    let mut headers = AuthHeaders::new();
    headers.insert("X-Other", "value");
    headers
}

// ==================== Scripted issuer ====================

/// What a [`ScriptedIssuer`] does when invoked.
#[derive(Debug, Clone)]
pub enum ScriptedOutcome {
    /// Succeed with the given header mapping.
    Succeed(AuthHeaders),
    /// Succeed with an empty header mapping.
    SucceedEmpty,
    /// Fail with a network error.
    Fail,
    /// Sleep briefly, then succeed with the given header mapping.
    SucceedSlowly(AuthHeaders),
}

/// Issuer scripted with a fixed outcome; counts invocations.
///
/// Clones share the invocation counter, so tests keep a clone for
/// inspection after moving the issuer into a resolver.
#[derive(Debug, Clone)]
pub struct ScriptedIssuer {
    outcome: ScriptedOutcome,
    calls: Arc<AtomicUsize>,
}

impl ScriptedIssuer {
    pub fn new(outcome: ScriptedOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Issuer that succeeds with [`issued_headers`].
    pub fn succeeding() -> Self {
        Self::new(ScriptedOutcome::Succeed(issued_headers()))
    }

    /// Issuer that fails every invocation.
    pub fn failing() -> Self {
        Self::new(ScriptedOutcome::Fail)
    }

    /// How many times `issue_token` has been invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TokenIssuer for ScriptedIssuer {
    async fn issue_token(&self, _config: &EnvConfig) -> Result<IssuedToken, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            ScriptedOutcome::Succeed(headers) => Ok(IssuedToken {
                auth_header: headers.clone(),
            }),
            ScriptedOutcome::SucceedEmpty => Ok(IssuedToken {
                auth_header: AuthHeaders::new(),
            }),
            ScriptedOutcome::Fail => Err(AuthError::NetworkError(
                "scripted issuance failure".to_string(),
            )),
            ScriptedOutcome::SucceedSlowly(headers) => {
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(IssuedToken {
                    auth_header: headers.clone(),
                })
            }
        }
    }
}

// ==================== Mock server helpers ====================

/// Starts a token endpoint that responds with a claim-set header mapping.
pub async fn start_token_server() -> MockServer {
    start_token_server_expecting(None).await
}

/// Like [`start_token_server`], optionally asserting the number of requests.
pub async fn start_token_server_expecting(expected_requests: Option<u64>) -> MockServer {
    let server = MockServer::start().await;
    let body = serde_json::json!({ CLAIM_SET_HEADER: TEST_TOKEN });

    let mock = Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body));
    let mock = match expected_requests {
        Some(n) => mock.expect(n),
        None => mock,
    };
    mock.mount(&server).await;

    server
}

/// Starts a token endpoint that responds with the given status and no body.
pub async fn start_error_token_server(status: u16) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;

    server
}
