/// Core traits for the Fourleaf player
use async_trait::async_trait;

use crate::error::Result;
use crate::types::{LibrarySource, PlayableResource, TrackId};

/// Streaming resolver trait
///
/// Implementers turn a `(source, track_id)` pair into a playable resource.
/// This is the only asynchronous boundary the playback core crosses: the
/// binder calls it once per track switch and correlates the answer with the
/// entry it was issued for.
///
/// Contract:
/// - `Ok(Some(resource))` — the track is streamable right now.
/// - `Ok(None)` — the backend answered but has no stream for this track
///   (deleted, still transcoding, not entitled). Not an error.
/// - `Err(_)` — the resolution itself failed (network, backend fault).
///
/// Implementations must be idempotent for the same key: the binder may
/// re-resolve after an unavailable outcome when the user reselects the
/// track.
#[async_trait]
pub trait StreamResolver: Send + Sync {
    /// Resolve the playable resource for a track in the given library
    async fn resolve(
        &self,
        source: LibrarySource,
        track_id: &TrackId,
    ) -> Result<Option<PlayableResource>>;
}
