//! # Environment Configuration Module
//!
//! Maps a selected test environment to the configuration record consumed by
//! the rest of the library: base URL, token endpoint, whether authentication
//! is required, and the opaque fields forwarded to the token issuer.
//!
//! A configuration is constructed once at suite start-up, either explicitly
//! via [`EnvConfig::for_environment`] or from the `TEST_ENV` / `IS_AWS`
//! process variables via [`EnvConfig::from_env`], and is immutable for the
//! rest of the run.

use crate::error::AuthError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Process variable selecting the environment under test.
const ENV_VAR: &str = "TEST_ENV";

/// Process variable marking an AWS-hosted run.
const IS_AWS_VAR: &str = "IS_AWS";

/// Service name reported to the token endpoint.
const SERVICE_NAME: &str = "api-integration-tests";

/// The set of environments a test run can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development stack.
    Local,
    /// Shared development deployment.
    Dev,
    /// Pre-production staging deployment.
    Staging,
    /// Production deployment.
    Prod,
    /// Local mock server; does not require authentication.
    Mock,
}

impl Environment {
    /// The lowercase environment name as used in configuration and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
            Environment::Mock => "mock",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Environment::Local),
            "dev" => Ok(Environment::Dev),
            "staging" => Ok(Environment::Staging),
            "prod" => Ok(Environment::Prod),
            "mock" => Ok(Environment::Mock),
            other => Err(AuthError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Opaque request body forwarded unchanged to the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    /// Whether the run executes on AWS infrastructure.
    pub is_aws: bool,
    /// Name of the calling service/suite.
    pub service: String,
    /// Environment name the token is requested for.
    pub environment: String,
}

/// Configuration record describing the environment under test.
///
/// Immutable per test run. The resolver consumes `requires_auth`; everything
/// else is passed through to consumers or to the token issuer unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// The environment under test.
    pub environment: Environment,
    /// Whether the run executes on AWS infrastructure.
    pub is_aws: bool,
    /// Base URL for API requests in this environment.
    pub base_url: String,
    /// Token endpoint URL; absent for environments without authentication.
    pub token_url: Option<String>,
    /// Whether requests to this environment require an authentication token.
    pub requires_auth: bool,
    /// Headers attached to every request regardless of authentication.
    pub default_headers: BTreeMap<String, String>,
    /// Request body sent to the token endpoint.
    pub token_request: TokenRequest,
}

impl EnvConfig {
    /// Builds the configuration for a given environment.
    ///
    /// The URL table mirrors the deployments the suite targets; `Mock` points
    /// at a local mock server and requires no authentication.
    pub fn for_environment(environment: Environment, is_aws: bool) -> Self {
        let (base_url, token_url, requires_auth) = match environment {
            Environment::Local => (
                "http://localhost:8085",
                Some("http://localhost:8085/api/token/generate"),
                true,
            ),
            Environment::Dev => (
                "https://dev-api.example.com",
                Some("https://dev-token.example.com/api/token/generate"),
                true,
            ),
            Environment::Staging => (
                "https://staging-api.example.com",
                Some("https://staging-token.example.com/api/token/generate"),
                true,
            ),
            Environment::Prod => (
                "https://api.example.com",
                Some("https://token.example.com/api/token/generate"),
                true,
            ),
            Environment::Mock => ("http://localhost:3000", None, false),
        };

        let mut default_headers = BTreeMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            environment,
            is_aws,
            base_url: base_url.to_string(),
            token_url: token_url.map(str::to_string),
            requires_auth,
            default_headers,
            token_request: TokenRequest {
                is_aws,
                service: SERVICE_NAME.to_string(),
                environment: environment.as_str().to_string(),
            },
        }
    }

    /// Loads the configuration from the process environment.
    ///
    /// Reads `TEST_ENV` (defaulting to `local` when unset) and `IS_AWS`
    /// (`"true"` enables the flag). An unrecognized `TEST_ENV` value is an
    /// error rather than a silent fallback.
    pub fn from_env() -> Result<Self, AuthError> {
        let env_name = std::env::var(ENV_VAR).unwrap_or_else(|_| "local".to_string());
        let environment = env_name.parse::<Environment>()?;
        let is_aws = std::env::var(IS_AWS_VAR).is_ok_and(|v| v == "true");

        tracing::info!("Environment: {environment}");
        tracing::info!("Is AWS: {is_aws}");

        Ok(Self::for_environment(environment, is_aws))
    }
}

// Tests live in the unified tests module.
// See: src/tests/config_tests.rs
