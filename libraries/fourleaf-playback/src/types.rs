//! Types for queue and transport state

use fourleaf_core::types::{LibrarySource, TrackId, TrackRef};
use serde::{Deserialize, Serialize};

/// One playlist item, tagged with the library it came from
///
/// The same track id can exist in both libraries (a catalog song the user
/// also uploaded privately), so entry identity is the `(source, id)` pair,
/// never the id alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Which library this entry plays from
    pub source: LibrarySource,

    /// Display metadata for the track
    pub track: TrackRef,
}

impl QueueEntry {
    /// Create a queue entry
    pub fn new(source: LibrarySource, track: TrackRef) -> Self {
        Self { source, track }
    }

    /// Identity of this entry for equality and removal purposes
    pub fn key(&self) -> EntryKey {
        EntryKey {
            source: self.source,
            track_id: self.track.id.clone(),
        }
    }
}

/// Identity of a queue entry: library plus track id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    /// Library the entry plays from
    pub source: LibrarySource,

    /// Backend-issued track id
    pub track_id: TrackId,
}

/// Screen-space rectangle of the artwork a transition animates from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OriginRect {
    /// Left edge in CSS pixels
    pub x: f64,
    /// Top edge in CSS pixels
    pub y: f64,
    /// Width in CSS pixels
    pub width: f64,
    /// Height in CSS pixels
    pub height: f64,
}

/// Visual-continuity payload for the expanded "now playing" transition
///
/// Purely cosmetic. The store carries it between the transport bar and the
/// overlay; nothing in playback semantics depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionHint {
    /// Where the artwork was on screen when the overlay opened
    pub origin_rect: OriginRect,

    /// Artwork URL to animate, if the track has one
    pub origin_image_url: Option<String>,
}

/// Configuration for the queue store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Initial volume in `[0, 1]` (default: 0.7)
    pub initial_volume: f32,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_volume: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> TrackRef {
        TrackRef::new(TrackId::new(id), "Title", "Artist")
    }

    #[test]
    fn entry_identity_includes_source() {
        let catalog = QueueEntry::new(LibrarySource::Catalog, track("t1"));
        let personal = QueueEntry::new(LibrarySource::Personal, track("t1"));
        assert_ne!(catalog.key(), personal.key());
    }

    #[test]
    fn entry_identity_matches_same_pair() {
        let a = QueueEntry::new(LibrarySource::Catalog, track("t1"));
        let mut b = a.clone();
        b.track.title = "Different display title".to_string();
        // Identity is (source, id); display metadata does not participate
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn default_config() {
        let config = QueueConfig::default();
        assert_eq!(config.initial_volume, 0.7);
    }
}
