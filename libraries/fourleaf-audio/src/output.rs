//! Audio output abstraction
//!
//! [`AudioOutput`] is the seam between the binder and the physical player.
//! Commands flow in through the trait; facts about what the output is
//! actually doing flow back as [`StreamEvent`]s on a channel the output is
//! constructed with. The binder never assumes a command took effect until
//! the corresponding event arrives.
//!
//! Events are tagged with the generation passed to [`AudioOutput::load`],
//! so a late event queued by a stream the binder has already replaced can
//! be told apart from one belonging to the current stream.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::Result;

/// Fact reported by the output backend
#[derive(Debug, Clone, PartialEq)]
pub enum OutputEvent {
    /// Playback position moved (seconds from the start of the stream)
    TimeUpdate(f64),

    /// Stream metadata became available
    MetadataLoaded {
        /// Total stream duration in seconds
        duration: f64,
    },

    /// The stream played to its end
    Ended,

    /// The stream failed mid-playback (network drop, decode error)
    Failed(String),
}

/// An [`OutputEvent`] stamped with the stream it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct StreamEvent {
    /// Generation handed to [`AudioOutput::load`] for the originating stream
    pub generation: u64,

    /// What the output reported
    pub event: OutputEvent,
}

impl StreamEvent {
    /// Tag `event` as belonging to the stream loaded under `generation`
    pub fn new(generation: u64, event: OutputEvent) -> Self {
        Self { generation, event }
    }
}

/// A playable audio output
///
/// One stream at a time: `load` replaces whatever was loaded before.
/// `play` is fallible because outputs may refuse to start without user
/// interaction; everything else is best-effort and infallible.
#[async_trait]
pub trait AudioOutput: Send {
    /// Load a stream URL, replacing the current stream
    ///
    /// `generation` is opaque to the output; it must be echoed on every
    /// [`StreamEvent`] emitted for this stream so the binder can discard
    /// events from a stream it has since replaced.
    async fn load(&mut self, url: &str, generation: u64) -> Result<()>;

    /// Start or resume playback of the loaded stream
    async fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the stream loaded
    fn pause(&mut self);

    /// Stop playback and unload the current stream
    fn stop(&mut self);

    /// Jump to a position in seconds
    fn seek(&mut self, seconds: f64);

    /// Apply an output gain in `[0, 1]`
    fn set_gain(&mut self, gain: f32);
}

/// An output that plays nothing and reports nothing
///
/// Stands in for the real backend in headless contexts; every command
/// succeeds and no events are ever emitted.
#[derive(Debug)]
pub struct NullOutput {
    // Held so the paired receiver stays open
    _events: mpsc::UnboundedSender<StreamEvent>,
}

impl NullOutput {
    /// Create a null output together with an (always silent) event channel
    pub fn new() -> (Self, mpsc::UnboundedReceiver<StreamEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { _events: tx }, rx)
    }
}

#[async_trait]
impl AudioOutput for NullOutput {
    async fn load(&mut self, _url: &str, _generation: u64) -> Result<()> {
        Ok(())
    }

    async fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn stop(&mut self) {}

    fn seek(&mut self, _seconds: f64) {}

    fn set_gain(&mut self, _gain: f32) {}
}
