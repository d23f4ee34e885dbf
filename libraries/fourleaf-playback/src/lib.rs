//! Fourleaf Playback - Queue and Transport State
//!
//! Single source of truth for what the player is doing: the ordered queue,
//! the cursor into it, and the transport intent (playing/paused, volume,
//! displayed time). Pure in-memory state, no I/O, no timers.
//!
//! This crate provides:
//! - [`QueueState`]: the queue/transport state machine with a total
//!   operation set (no operation fails or panics)
//! - [`QueueStore`]: a clonable shared handle that funnels every mutation
//!   through [`QueueState`] and publishes a [`QueueSnapshot`] on a
//!   `tokio::sync::watch` channel for observers (the playback binder, UI)
//!
//! The crate never touches the physical audio output. The binder in
//! `fourleaf-audio` observes snapshots, resolves streams, and reflects
//! media-element facts (`set_current_time`, `set_duration`,
//! `set_stream_unavailable`) back into the store.
//!
//! # Example
//!
//! ```rust
//! use fourleaf_core::types::{LibrarySource, TrackId, TrackRef};
//! use fourleaf_playback::{QueueConfig, QueueEntry, QueueStore};
//!
//! let store = QueueStore::new(QueueConfig::default());
//! let entry = QueueEntry::new(
//!     LibrarySource::Catalog,
//!     TrackRef::new(TrackId::new("trk_1"), "Evergreen", "The Clovers"),
//! );
//!
//! store.set_queue(vec![entry], 0);
//! store.play();
//! assert!(store.is_playing());
//! assert_eq!(store.position(), Some(0));
//! ```

#![forbid(unsafe_code)]

mod queue;
mod store;
mod types;

pub use queue::QueueState;
pub use store::{QueueSnapshot, QueueStore};
pub use types::{EntryKey, OriginRect, QueueConfig, QueueEntry, TransitionHint};
