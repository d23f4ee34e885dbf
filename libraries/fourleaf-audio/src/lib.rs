//! Fourleaf Audio - Playback Binder and Output Abstraction
//!
//! This crate connects the pure queue state in `fourleaf-playback` to a
//! physical audio output:
//!
//! - [`AudioOutput`]: the output seam (load a URL, play, pause, seek,
//!   gain), with facts flowing back as generation-tagged [`StreamEvent`]s
//! - [`PlaybackBinder`]: the async task that watches queue snapshots,
//!   resolves stream URLs through a
//!   [`StreamResolver`](fourleaf_core::StreamResolver), and keeps the
//!   output in line with the transport intent
//! - [`NullOutput`]: a do-nothing output for headless use and tests
//!
//! The binder owns all playback I/O. The store stays pure; the UI only
//! ever talks to the store.

#![forbid(unsafe_code)]

mod binder;
mod error;
mod output;

pub use binder::{BinderState, PlaybackBinder};
pub use error::{AudioError, Result};
pub use output::{AudioOutput, NullOutput, OutputEvent, StreamEvent};
