/// Track display metadata
use serde::{Deserialize, Serialize};

use crate::types::TrackId;

/// Display metadata for a track reference
///
/// This is everything the player needs to render a row or the transport bar
/// without touching the network. The playable audio itself is resolved
/// lazily through [`crate::traits::StreamResolver`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRef {
    /// Backend-issued track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name (optional)
    pub album: Option<String>,

    /// Reported duration in seconds (display only; the output's resolved
    /// duration wins once metadata loads)
    pub duration_seconds: f64,

    /// Cover image URL (optional)
    pub cover_url: Option<String>,
}

impl TrackRef {
    /// Create a track reference with just the required fields
    pub fn new(id: TrackId, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            album: None,
            duration_seconds: 0.0,
            cover_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_ref_creation() {
        let track = TrackRef::new(TrackId::new("trk_1"), "Evergreen", "The Clovers");
        assert_eq!(track.id.as_str(), "trk_1");
        assert_eq!(track.title, "Evergreen");
        assert_eq!(track.album, None);
        assert_eq!(track.duration_seconds, 0.0);
    }
}
