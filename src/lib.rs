//! # testenv-auth
//!
//! A lightweight, framework-agnostic Rust library providing environment-dependent
//! configuration and authentication-header resolution for API integration test suites.
//!
//! ## Features
//! - **Framework Agnostic**: Not tied to any test runner or HTTP assertion library.
//! - **Environment Aware**: Per-environment base/token URLs with a single loader.
//! - **Token Caching**: An in-process cache slot avoids redundant token issuance.
//! - **Injectable Collaborators**: The token issuer is a trait, so tests construct
//!   isolated resolver instances instead of sharing process-wide state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use testenv_auth::{AuthHeaderResolver, EnvConfig, Environment, HttpTokenIssuer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Load the configuration for the environment under test
//!     let config = EnvConfig::for_environment(Environment::Local, false);
//!
//!     // 2. Build a resolver around the HTTP token issuer
//!     let resolver = AuthHeaderResolver::new(HttpTokenIssuer::new());
//!
//!     // 3. Resolve the headers to attach to an outgoing test request
//!     let headers = resolver.resolve_headers(Some(&config), false).await?;
//!     for (name, value) in headers.iter() {
//!         println!("{name}: {value}");
//!     }
//!
//!     Ok(())
//! }
//! ```
// Module declarations for the library's internal components.
/// Environment selection and per-environment configuration.
mod config;
/// Defines error types for the library.
mod error;
/// Header mappings: dummy headers and the claim-set marker.
mod headers;
/// The token-issuing collaborator and its HTTP implementation.
mod issuer;
/// Decides what headers a test request carries; owns the token cache slot.
mod resolver;

// Test module, conditionally compiled only when running tests.
#[cfg(test)]
mod tests;

// Re-exporting key types and functions for a clean public API.
pub use config::{EnvConfig, Environment, TokenRequest};
pub use error::AuthError;
pub use headers::{
    AuthHeaders, CLAIM_SET_HEADER, DUMMY_AUTH_HEADER, DUMMY_AUTH_VALUE, REQUEST_ID_HEADER,
};
pub use issuer::{HttpTokenIssuer, IssuedToken, TokenIssuer};
pub use resolver::{is_auth_required, AuthHeaderResolver};
