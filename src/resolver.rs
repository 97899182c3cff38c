//! # Authentication Header Resolver Module
//!
//! Decides what headers an outgoing test request carries, minimizing
//! redundant calls to the token issuer.
//!
//! ## Resolution Strategy
//! 1. Authentication not required: dummy headers, no cache interaction
//! 2. Cached token present and valid: returned unchanged, no issuer call
//! 3. Otherwise: a single, non-retried call to the injected issuer
//!
//! The cache slot has two states, `Empty` and `Populated`. A fresh issuance
//! does **not** populate the slot; the caller chooses whether to persist it
//! via [`AuthHeaderResolver::store_token`]. Only [`clear_cached_token`]
//! empties the slot; there is no automatic expiry.
//!
//! [`clear_cached_token`]: AuthHeaderResolver::clear_cached_token

use crate::config::EnvConfig;
use crate::error::AuthError;
use crate::headers::AuthHeaders;
use crate::issuer::TokenIssuer;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Resolves the authentication headers for outgoing test requests.
///
/// Each instance owns its own cache slot and active-configuration slot, so
/// concurrent suites (or tests) construct isolated resolvers instead of
/// sharing process-wide state. Cloning is cheap and clones share state.
#[derive(Debug, Clone)]
pub struct AuthHeaderResolver<I> {
    /// The injected token-issuing collaborator.
    issuer: I,
    /// Configuration used when a call supplies none.
    active_config: Arc<RwLock<Option<EnvConfig>>>,
    /// The token cache slot; when populated, always carries the claim-set field.
    cached_token: Arc<RwLock<Option<AuthHeaders>>>,
    /// Serializes issuance so concurrent cache misses coalesce to one in-flight call.
    issue_mutex: Arc<Mutex<()>>,
}

impl<I: TokenIssuer> AuthHeaderResolver<I> {
    /// Creates a resolver with an empty cache slot and no active configuration.
    pub fn new(issuer: I) -> Self {
        Self {
            issuer,
            active_config: Arc::new(RwLock::new(None)),
            cached_token: Arc::new(RwLock::new(None)),
            issue_mutex: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a resolver with `config` pre-set as the active configuration.
    pub fn with_active_config(issuer: I, config: EnvConfig) -> Self {
        Self {
            issuer,
            active_config: Arc::new(RwLock::new(Some(config))),
            cached_token: Arc::new(RwLock::new(None)),
            issue_mutex: Arc::new(Mutex::new(())),
        }
    }

    /// Sets the configuration used when `resolve_headers` is called without one.
    pub async fn set_active_config(&self, config: EnvConfig) {
        *self.active_config.write().await = Some(config);
    }

    /// Returns a snapshot of the active configuration, if any.
    pub async fn active_config(&self) -> Option<EnvConfig> {
        self.active_config.read().await.clone()
    }

    /// Resolves the header mapping to attach to an outgoing request.
    ///
    /// When `config` is `None`, the active configuration is used; if none is
    /// set either, the call fails with [`AuthError::ConfigurationMissing`].
    /// `force_auth` forces the authenticated path even for environments that
    /// do not require a token.
    ///
    /// On the authenticated path a valid cached token is returned unchanged;
    /// otherwise the issuer is called exactly once, with no retry. A freshly
    /// issued token is returned but not written to the cache slot — persist
    /// it explicitly with [`store_token`](Self::store_token) if desired.
    pub async fn resolve_headers(
        &self,
        config: Option<&EnvConfig>,
        force_auth: bool,
    ) -> Result<AuthHeaders, AuthError> {
        let active;
        let config = match config {
            Some(config) => config,
            None => {
                active = self.active_config.read().await.clone();
                active.as_ref().ok_or(AuthError::ConfigurationMissing)?
            }
        };

        let requires_auth = force_auth || config.requires_auth;
        if !requires_auth {
            tracing::debug!("Authentication not required, returning dummy headers");
            return Ok(AuthHeaders::dummy());
        }

        // 1. Valid cached token: return it unchanged, no issuer call.
        if let Some(cached) = self.valid_cached_token().await {
            tracing::debug!("Using cached authentication token");
            return Ok(cached);
        }

        // 2. Serialize issuance; re-check the cache in case another caller
        //    persisted a token while we waited for the lock.
        let _issue_guard = self.issue_mutex.lock().await;
        if let Some(cached) = self.valid_cached_token().await {
            tracing::debug!("Token cache was populated while waiting for issuance lock");
            return Ok(cached);
        }

        tracing::info!("Getting new authentication token");
        match self.issuer.issue_token(config).await {
            Ok(issued) if !issued.auth_header.is_empty() => {
                tracing::info!("Authentication token obtained successfully");
                Ok(issued.auth_header)
            }
            Ok(_) => {
                tracing::error!("Token issuer returned an empty header mapping");
                Err(AuthError::AuthenticationFailure(
                    "token issuer returned an empty header mapping".to_string(),
                ))
            }
            Err(e) => {
                tracing::error!("Failed to obtain authentication token: {e}");
                Err(AuthError::AuthenticationFailure(e.to_string()))
            }
        }
    }

    /// Persists an issued header mapping into the cache slot.
    ///
    /// Mappings without the claim-set field are rejected, keeping the slot
    /// invariant: a populated slot is always a valid cache hit.
    pub async fn store_token(&self, headers: AuthHeaders) -> Result<(), AuthError> {
        if !headers.has_claim_set() {
            tracing::warn!("Refusing to cache headers without the claim-set field");
            return Err(AuthError::MissingClaimSet);
        }
        *self.cached_token.write().await = Some(headers);
        Ok(())
    }

    /// Empties the cache slot unconditionally.
    pub async fn clear_cached_token(&self) {
        tracing::debug!("Clearing cached authentication token");
        *self.cached_token.write().await = None;
    }

    /// Returns a snapshot of the cache slot, valid or not.
    pub async fn cached_token(&self) -> Option<AuthHeaders> {
        self.cached_token.read().await.clone()
    }

    /// The cache slot contents, only if they count as a valid cache hit.
    async fn valid_cached_token(&self) -> Option<AuthHeaders> {
        self.cached_token
            .read()
            .await
            .as_ref()
            .filter(|h| h.has_claim_set())
            .cloned()
    }
}

/// Whether the given environment requires authentication.
///
/// Pure predicate over the configuration; unlike `resolve_headers` there is
/// no `force_auth` notion and no side effects.
pub fn is_auth_required(config: &EnvConfig) -> bool {
    config.requires_auth
}

// Tests live in the unified tests module.
// See: src/tests/resolver_tests.rs
