//! Defines the error types that can occur during header resolution.
//!
//! This module provides the set of errors that may arise while loading
//! environment configuration, issuing tokens, or resolving authentication
//! headers, and is independent of any specific test framework.

use thiserror::Error;

/// Represents errors that can occur during authentication-header resolution.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AuthError {
    /// No configuration was supplied and no active configuration is set.
    #[error("no configuration supplied and no active configuration is set")]
    ConfigurationMissing,

    /// The token issuer failed or returned no usable header mapping.
    #[error("unable to obtain authentication token: {0}")]
    AuthenticationFailure(String),

    /// Refused to cache a header mapping without the claim-set field.
    #[error("header mapping is missing the claim-set field")]
    MissingClaimSet,

    /// The environment name is not recognized.
    #[error("unknown test environment: {0}")]
    UnknownEnvironment(String),

    /// The token endpoint responded with a non-success status.
    #[error("token endpoint returned status: {0}")]
    TokenEndpoint(u16),

    /// A network error occurred while reaching the token endpoint.
    #[error("network error: {0}")]
    NetworkError(String),
}
