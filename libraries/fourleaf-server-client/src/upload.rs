//! Track upload.
//!
//! Uploads stream the file off disk so large lossless files never sit in
//! memory; progress is reported per chunk through a caller-supplied
//! callback. An optional cover image rides along as a second multipart
//! part (covers are small and are read whole).

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures_util::TryStreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::Body;
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use tracing::{debug, info};

use fourleaf_core::types::LibrarySource;

use crate::client::StorefrontClient;
use crate::error::{ClientError, Result};
use crate::types::{UploadMetadata, UploadProgress, UploadResponse};

/// Normalize a progress value to a percentage in `[0, 100]`.
///
/// Collaborators are inconsistent about whether progress is a ratio in
/// `[0, 1]` or already a percentage; anything above 1 is taken to be a
/// percentage, anything at or below 1 a ratio. Out-of-range input is
/// clamped.
pub fn normalize_progress(progress: f64) -> f64 {
    let percent = if progress > 1.0 {
        progress
    } else {
        progress * 100.0
    };
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

impl StorefrontClient {
    /// Upload an audio file into one of the backend libraries.
    ///
    /// `on_progress` is invoked as body chunks go out, with a normalized
    /// percentage. The backend deduplicates by content hash; an upload of
    /// an already-known file succeeds with `already_existed == true`.
    pub async fn upload_track<F>(
        &self,
        source: LibrarySource,
        file_path: &Path,
        metadata: Option<&UploadMetadata>,
        cover_path: Option<&Path>,
        on_progress: F,
    ) -> Result<UploadResponse>
    where
        F: Fn(UploadProgress) + Send + Sync + 'static,
    {
        if !file_path.exists() {
            return Err(ClientError::FileNotFound(file_path.display().to_string()));
        }

        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("track")
            .to_string();

        let file = File::open(file_path).await?;
        let bytes_total = file.metadata().await?.len();

        debug!(file = %file_path.display(), bytes_total, %source, "uploading track");

        let sent = Arc::new(AtomicU64::new(0));
        let on_progress = Arc::new(on_progress);
        let progress_sent = Arc::clone(&sent);
        let progress_cb = Arc::clone(&on_progress);

        let body_stream = ReaderStream::new(file).inspect_ok(move |chunk| {
            let bytes_sent =
                progress_sent.fetch_add(chunk.len() as u64, Ordering::Relaxed) + chunk.len() as u64;
            let ratio = if bytes_total > 0 {
                bytes_sent as f64 / bytes_total as f64
            } else {
                1.0
            };
            progress_cb(UploadProgress {
                bytes_sent,
                bytes_total,
                percent: normalize_progress(ratio),
            });
        });

        let file_part = Part::stream_with_length(Body::wrap_stream(body_stream), bytes_total)
            .file_name(file_name.clone())
            .mime_str(audio_mime_type(file_path))?;

        let mut form = Form::new().part("file", file_part);

        if let Some(cover) = cover_path {
            let cover_bytes = tokio::fs::read(cover).await?;
            let cover_name = cover
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("cover")
                .to_string();
            let cover_part = Part::bytes(cover_bytes)
                .file_name(cover_name)
                .mime_str(image_mime_type(cover))?;
            form = form.part("cover", cover_part);
        }

        if let Some(meta) = metadata {
            let meta_json = serde_json::to_string(meta)
                .map_err(|e| ClientError::ParseError(e.to_string()))?;
            form = form.text("metadata", meta_json);
        }

        let url = self.api_url(&format!("{source}/tracks"));

        let response = self
            .authorize(self.http().post(&url))
            .multipart(form)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();

        if status.is_success() {
            let upload_response: UploadResponse = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse upload response: {e}"))
            })?;

            info!(
                track_id = %upload_response.track.id,
                file = %file_name,
                already_existed = upload_response.already_existed,
                "track uploaded"
            );

            Ok(upload_response)
        } else if status.as_u16() == 401 {
            Err(ClientError::AuthRequired)
        } else if status.as_u16() == 413 {
            Err(ClientError::ServerError {
                status: 413,
                message: "File too large".to_string(),
            })
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// MIME type for an audio file, by extension.
fn audio_mime_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("mp3") => "audio/mpeg",
        Some("flac") => "audio/flac",
        Some("ogg") => "audio/ogg",
        Some("wav") => "audio/wav",
        Some("m4a") | Some("aac") => "audio/mp4",
        _ => "application/octet-stream",
    }
}

/// MIME type for a cover image, by extension.
fn image_mime_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_ratios_and_percentages() {
        // Ratios in [0, 1] scale up
        assert_eq!(normalize_progress(0.0), 0.0);
        assert_eq!(normalize_progress(0.25), 25.0);
        assert_eq!(normalize_progress(1.0), 100.0);

        // Values above 1 are already percentages
        assert_eq!(normalize_progress(47.0), 47.0);
        assert_eq!(normalize_progress(100.0), 100.0);

        // Out-of-range input clamps
        assert_eq!(normalize_progress(-0.3), 0.0);
        assert_eq!(normalize_progress(150.0), 100.0);
        assert_eq!(normalize_progress(f64::NAN), 0.0);
    }

    #[test]
    fn audio_mime_types() {
        assert_eq!(audio_mime_type(Path::new("song.mp3")), "audio/mpeg");
        assert_eq!(audio_mime_type(Path::new("song.flac")), "audio/flac");
        assert_eq!(audio_mime_type(Path::new("song.m4a")), "audio/mp4");
        assert_eq!(
            audio_mime_type(Path::new("song.weird")),
            "application/octet-stream"
        );
    }

    #[test]
    fn image_mime_types() {
        assert_eq!(image_mime_type(Path::new("art.jpg")), "image/jpeg");
        assert_eq!(image_mime_type(Path::new("art.png")), "image/png");
        assert_eq!(
            image_mime_type(Path::new("art.tiff")),
            "application/octet-stream"
        );
    }
}
