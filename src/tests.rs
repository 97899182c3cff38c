//! # Test suite for the authentication-header helper
//!
//! The library trusts its collaborators (the token endpoint issues whatever
//! credential the deployment uses) and focuses on the decision logic around
//! them: which header shape a request gets, when the cache slot is consulted,
//! and when a fresh issuance happens.
//!
//! ## Test strategy
//!
//! - **Injected issuers**: resolver behavior is exercised with scripted
//!   issuers that count invocations, never with live endpoints.
//! - **Mocked endpoints**: the HTTP issuer is tested against wiremock servers.
//! - **Fast failure**: error paths assert the exact error kind a caller sees.
//! - **Isolated instances**: every test builds its own resolver; there is no
//!   shared process state to reset between tests.
//!
//! ## Module structure
//!
//! - `test_helpers`: shared constructors, constants, and the scripted issuer.
//! - `config_tests`: environment table and process-variable loading.
//! - `headers_tests`: dummy-header shape and claim-set detection.
//! - `issuer_tests`: the HTTP issuer against mocked token endpoints.
//! - `resolver_tests`: cache-slot and resolution-path decision logic.
//! - `integration_tests`: resolver + HTTP issuer end to end.

// Shared test helper module
pub mod test_helpers;
