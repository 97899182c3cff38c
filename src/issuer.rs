//! # Token Issuer Module
//!
//! The external collaborator that performs the actual network round-trip to
//! obtain an authentication token. The resolver only depends on the
//! [`TokenIssuer`] trait, so tests inject scripted issuers and production
//! code uses [`HttpTokenIssuer`] against the environment's token endpoint.
//!
//! ## Wire format
//! The endpoint accepts the configuration's [`TokenRequest`](crate::TokenRequest)
//! as a JSON body and responds with the header mapping itself, e.g.
//! `{"iam-claimsetjwt": "<jwt>"}`.

use crate::config::EnvConfig;
use crate::error::AuthError;
use crate::headers::AuthHeaders;
use std::sync::LazyLock;

/// Global HTTP client instance with a connection pool.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5)) // Bound the token round-trip.
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

/// A successfully issued authentication token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// The header mapping to attach to authenticated requests.
    pub auth_header: AuthHeaders,
}

/// Issues authentication tokens for a given environment configuration.
///
/// Implementations perform whatever round-trip their credential source
/// requires; the resolver treats them as opaque and never retries.
pub trait TokenIssuer {
    /// Obtains a fresh token for the environment described by `config`.
    fn issue_token(
        &self,
        config: &EnvConfig,
    ) -> impl std::future::Future<Output = Result<IssuedToken, AuthError>> + Send;
}

/// Token issuer backed by the environment's HTTP token endpoint.
#[derive(Debug, Clone, Default)]
pub struct HttpTokenIssuer;

impl HttpTokenIssuer {
    /// Creates a new issuer using the shared HTTP client.
    pub fn new() -> Self {
        Self
    }
}

impl TokenIssuer for HttpTokenIssuer {
    async fn issue_token(&self, config: &EnvConfig) -> Result<IssuedToken, AuthError> {
        let token_url = config.token_url.as_deref().ok_or_else(|| {
            AuthError::AuthenticationFailure(format!(
                "environment '{}' has no token endpoint configured",
                config.environment
            ))
        })?;

        tracing::info!("Requesting token from: {token_url}");

        let response = HTTP_CLIENT
            .post(token_url)
            .json(&config.token_request)
            .send()
            .await
            .map_err(|e| {
                let error_msg = format!("Failed to reach token endpoint: {e:?}");
                tracing::error!("{}", error_msg);
                AuthError::NetworkError(error_msg)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Token endpoint returned status: {status}");
            return Err(AuthError::TokenEndpoint(status.as_u16()));
        }

        let auth_header: AuthHeaders = response.json().await.map_err(|e| {
            let error_msg = format!("Failed to parse token response: {e:?}");
            tracing::error!("{}", error_msg);
            AuthError::NetworkError(error_msg)
        })?;

        if auth_header.is_empty() {
            tracing::error!("Token endpoint returned an empty header mapping");
            return Err(AuthError::AuthenticationFailure(
                "token endpoint returned an empty header mapping".to_string(),
            ));
        }

        tracing::debug!("Token endpoint returned {} header(s)", auth_header.len());
        Ok(IssuedToken { auth_header })
    }
}

// Tests live in the unified tests module.
// See: src/tests/issuer_tests.rs
