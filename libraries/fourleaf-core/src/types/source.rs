/// Library source discrimination
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which library a track comes from
///
/// The storefront exposes two disjoint libraries: the shared public catalog
/// and the signed-in user's personal uploads. Streaming and permissions
/// differ per library, so the pair `(LibrarySource, TrackId)` is the
/// identity of a playable track everywhere in this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibrarySource {
    /// Public storefront catalog
    Catalog,

    /// The user's personal library
    Personal,
}

impl fmt::Display for LibrarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibrarySource::Catalog => write!(f, "catalog"),
            LibrarySource::Personal => write!(f, "personal"),
        }
    }
}
