//! Fourleaf Core
//!
//! Platform-agnostic core types, traits, and error handling for the Fourleaf
//! storefront player.
//!
//! The core crate defines:
//! - **Domain Types**: `TrackRef`, `LibrarySource`, `PlayableResource`
//! - **Core Traits**: `StreamResolver` (the seam to the storefront backend)
//! - **Error Handling**: Unified `FourleafError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use fourleaf_core::types::{LibrarySource, TrackId, TrackRef};
//!
//! let track = TrackRef::new(TrackId::new("trk_01"), "Evergreen", "The Clovers");
//! assert_eq!(track.id.as_str(), "trk_01");
//! assert_eq!(LibrarySource::Catalog.to_string(), "catalog");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{FourleafError, Result};
pub use traits::StreamResolver;
pub use types::{LibrarySource, PlayableResource, TrackId, TrackRef};
