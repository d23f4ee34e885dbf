/// ID types for Fourleaf entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Track identifier
///
/// The storefront backend issues opaque string ids; this newtype carries
/// them verbatim for both the public catalog and personal libraries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
