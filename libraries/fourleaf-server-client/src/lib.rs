//! Fourleaf Storefront Client
//!
//! HTTP client library for the Fourleaf storefront backend.
//!
//! # Features
//!
//! - **Stream resolution**: per-source stream URLs for catalog and
//!   personal tracks; implements
//!   [`StreamResolver`](fourleaf_core::StreamResolver) so the playback
//!   binder can consume it directly
//! - **Upload**: streamed multipart upload of audio (plus optional cover
//!   art) with normalized progress reporting
//!
//! # Example
//!
//! ```ignore
//! use fourleaf_server_client::{ClientConfig, StorefrontClient};
//! use fourleaf_core::types::{LibrarySource, TrackId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::with_token("https://store.example.com", "token");
//!     let client = StorefrontClient::new(config)?;
//!
//!     let resource = client
//!         .stream_url(LibrarySource::Catalog, &TrackId::new("trk_1"))
//!         .await?;
//!     match resource {
//!         Some(r) => println!("play {}", r.url),
//!         None => println!("not streamable"),
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod client;
mod error;
mod stream;
mod types;
mod upload;

pub use client::StorefrontClient;
pub use error::{ClientError, Result};
pub use types::{
    ApiError, ClientConfig, StoredTrack, StreamUrlResponse, UploadMetadata, UploadProgress,
    UploadResponse,
};
pub use upload::normalize_progress;
