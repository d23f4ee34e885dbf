/// Resolved stream resources
use serde::{Deserialize, Serialize};

/// A playable resource resolved from the storefront backend
///
/// Wraps a directly playable URL. Backends typically sign these URLs, so a
/// resource may expire; the binder never caches it across track switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayableResource {
    /// Directly playable (typically signed) URL
    pub url: String,

    /// URL validity in seconds, when the backend reports one
    pub expires_in: Option<u64>,
}

impl PlayableResource {
    /// Create a resource from a bare URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            expires_in: None,
        }
    }
}
