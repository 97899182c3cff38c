//! # Header Mapping Module
//!
//! Header mappings returned to test scenarios, which attach them to outgoing
//! requests verbatim.
//!
//! Two disjoint shapes exist:
//! - **Dummy headers**: a fixed marker header plus a per-call request
//!   identifier, returned when authentication is not required.
//! - **Real headers**: carry the claim-set field, whose presence marks a
//!   mapping as a genuine token and doubles as the cache-validity check.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Header key whose presence marks a mapping as a genuine authentication token.
pub const CLAIM_SET_HEADER: &str = "iam-claimsetjwt";

/// Marker header attached when authentication is not required.
pub const DUMMY_AUTH_HEADER: &str = "X-Dummy-Auth";

/// Fixed value of the dummy marker header.
pub const DUMMY_AUTH_VALUE: &str = "no-auth-required";

/// Header carrying the per-call request identifier on the dummy path.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// A mapping of header name to value, as attached to an outgoing request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthHeaders(BTreeMap<String, String>);

impl AuthHeaders {
    /// Creates an empty header mapping.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builds the placeholder header set used when authentication is not
    /// required: the fixed marker header plus a freshly generated request
    /// identifier, unique per call within the process.
    pub fn dummy() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(DUMMY_AUTH_HEADER.to_string(), DUMMY_AUTH_VALUE.to_string());
        headers.insert(
            REQUEST_ID_HEADER.to_string(),
            uuid::Uuid::new_v4().to_string(),
        );
        Self(headers)
    }

    /// Returns `true` if the claim-set field is present with a non-empty
    /// value. Only mappings for which this holds are treated as valid
    /// cached tokens.
    pub fn has_claim_set(&self) -> bool {
        self.get(CLAIM_SET_HEADER).is_some_and(|v| !v.is_empty())
    }

    /// Looks up a header value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Inserts a header, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns `true` if the mapping contains no headers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of headers in the mapping.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for AuthHeaders {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

// Tests live in the unified tests module.
// See: src/tests/headers_tests.rs
