//! Types for storefront API requests and responses.

use chrono::{DateTime, Utc};
use fourleaf_core::types::{TrackId, TrackRef};
use serde::{Deserialize, Serialize};

/// Configuration for connecting to a storefront backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "https://store.example.com")
    pub base_url: String,
    /// Bearer token for authenticated endpoints, if available
    pub access_token: Option<String>,
}

impl ClientConfig {
    /// Create a config for anonymous access.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: None,
        }
    }

    /// Create a config with a bearer token.
    pub fn with_token(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: Some(access_token.into()),
        }
    }
}

/// Stream URL response.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamUrlResponse {
    /// Directly playable (typically signed) URL
    pub url: String,
    /// URL validity in seconds, when the backend reports one
    pub expires_in: Option<u64>,
}

/// A track record as stored by the backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoredTrack {
    /// Backend-issued track id
    pub id: TrackId,
    /// Track title
    pub title: String,
    /// Artist, if known
    pub artist: Option<String>,
    /// Album, if known
    pub album: Option<String>,
    /// Duration in seconds, if the backend extracted it
    pub duration_seconds: Option<f64>,
    /// Cover artwork URL, if one was uploaded
    pub cover_url: Option<String>,
    /// Content hash used for dedup
    pub content_hash: Option<String>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl StoredTrack {
    /// Display metadata for queueing this record.
    pub fn to_track_ref(&self) -> TrackRef {
        let mut track = TrackRef::new(
            self.id.clone(),
            self.title.clone(),
            self.artist.clone().unwrap_or_else(|| "Unknown Artist".to_string()),
        );
        track.album = self.album.clone();
        track.duration_seconds = self.duration_seconds.unwrap_or(0.0);
        track.cover_url = self.cover_url.clone();
        track
    }
}

/// Metadata to send alongside a track upload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UploadMetadata {
    /// Track title
    pub title: Option<String>,
    /// Artist name
    pub artist: Option<String>,
    /// Album name
    pub album: Option<String>,
    /// Client-computed content hash for dedup
    pub content_hash: Option<String>,
}

/// Response from a successful upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// The stored track record
    pub track: StoredTrack,
    /// True if an identical track already existed (deduplicated)
    pub already_existed: bool,
}

/// Progress information during upload.
#[derive(Debug, Clone)]
pub struct UploadProgress {
    /// Bytes sent so far
    pub bytes_sent: u64,
    /// Total bytes to send
    pub bytes_total: u64,
    /// Normalized completion percentage in `[0, 100]`
    pub percent: f64,
}

/// API error response from the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub error: String,
    /// Human-readable message
    pub message: String,
}
