//! Stream URL resolution.
//!
//! The backend keeps catalog and personal uploads in separate libraries
//! with separate endpoints; the `(source, id)` pair picks the endpoint.
//! A `404` means the track has no playable stream right now, which is an
//! answer, not a failure.

use async_trait::async_trait;
use tracing::debug;

use fourleaf_core::types::{LibrarySource, PlayableResource, TrackId};
use fourleaf_core::StreamResolver;

use crate::client::StorefrontClient;
use crate::error::{ClientError, Result};
use crate::types::StreamUrlResponse;

impl StorefrontClient {
    /// Resolve a playable stream URL for a track.
    ///
    /// Returns `Ok(None)` when the backend reports the track as not
    /// streamable (404). Idempotent; safe to call repeatedly for the same
    /// track.
    pub async fn stream_url(
        &self,
        source: LibrarySource,
        track_id: &TrackId,
    ) -> Result<Option<PlayableResource>> {
        let url = self.api_url(&format!("{source}/tracks/{}/stream-url", track_id.as_str()));

        debug!(%source, track_id = %track_id, "resolving stream url");

        let response = self
            .authorize(self.http().get(&url))
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();

        if status.is_success() {
            let body: StreamUrlResponse = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse stream url response: {e}"))
            })?;
            Ok(Some(PlayableResource {
                url: body.url,
                expires_in: body.expires_in,
            }))
        } else if status.as_u16() == 404 {
            debug!(track_id = %track_id, "no stream available");
            Ok(None)
        } else if status.as_u16() == 401 {
            Err(ClientError::AuthRequired)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl StreamResolver for StorefrontClient {
    async fn resolve(
        &self,
        source: LibrarySource,
        track_id: &TrackId,
    ) -> fourleaf_core::Result<Option<PlayableResource>> {
        self.stream_url(source, track_id).await.map_err(Into::into)
    }
}
