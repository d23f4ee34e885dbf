//! Playback binder
//!
//! Bridges the queue store and a physical [`AudioOutput`]. The binder is
//! the only component that performs I/O on behalf of the queue: it watches
//! store snapshots, resolves a stream URL for the current entry, drives the
//! output, and reflects output facts (time, duration, end-of-stream,
//! availability) back into the store.
//!
//! ## Staleness
//!
//! Stream resolution is asynchronous and the user can switch tracks while
//! one is in flight. Every resolution is tagged with the store epoch it was
//! started for; a completion whose epoch no longer matches the store's is
//! dropped on the floor, whatever its payload. This holds even when the
//! user lands back on a track with the same id (duplicate queue entries),
//! which is why correlation uses the epoch and not the track identity.
//!
//! Output events get the same treatment from the other direction: `load`
//! hands the output the epoch as its stream generation, every
//! [`StreamEvent`] echoes it, and an event whose generation no longer
//! matches is dropped. Without this, a time update or failure queued by the
//! previous stream could corrupt the entry the user just switched to.
//!
//! ```text
//! QueueStore ──snapshots──> PlaybackBinder ──load/play/pause──> AudioOutput
//!     ^                         │    ^                              │
//!     │                         │    └──────── OutputEvent ─────────┘
//!     └── time/duration/        └──resolve──> StreamResolver
//!         unavailable
//! ```

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use fourleaf_core::{PlayableResource, StreamResolver};
use fourleaf_playback::{QueueSnapshot, QueueStore};

use crate::output::{AudioOutput, OutputEvent, StreamEvent};

/// What the binder is currently doing with the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinderState {
    /// No entry selected; the output is stopped
    Idle,

    /// A stream resolution for the current entry is in flight
    Resolving,

    /// The current entry's stream is loaded into the output
    Ready,

    /// The current entry has no playable stream
    Unavailable,
}

/// One completed resolution, tagged with the epoch it was started for
struct Resolution {
    epoch: u64,
    outcome: fourleaf_core::Result<Option<PlayableResource>>,
}

/// Drives an [`AudioOutput`] from queue store snapshots
///
/// Construct it, grab a [`BinderState`] watch via [`state`](Self::state),
/// then hand the binder to a task runner:
///
/// ```no_run
/// # use std::sync::Arc;
/// # use fourleaf_audio::{NullOutput, PlaybackBinder};
/// # use fourleaf_core::StreamResolver;
/// # use fourleaf_playback::QueueStore;
/// # fn demo(store: QueueStore, resolver: Arc<dyn StreamResolver>) {
/// let (output, events) = NullOutput::new();
/// let binder = PlaybackBinder::new(store, resolver, output, events);
/// let state = binder.state();
/// tokio::spawn(binder.run());
/// # }
/// ```
pub struct PlaybackBinder<O: AudioOutput> {
    store: QueueStore,
    resolver: Arc<dyn StreamResolver>,
    output: O,
    output_events: mpsc::UnboundedReceiver<StreamEvent>,
    state_tx: watch::Sender<BinderState>,
}

impl<O: AudioOutput + 'static> PlaybackBinder<O> {
    /// Create a binder for `store`, resolving streams through `resolver`
    /// and playing them on `output`
    pub fn new(
        store: QueueStore,
        resolver: Arc<dyn StreamResolver>,
        output: O,
        output_events: mpsc::UnboundedReceiver<StreamEvent>,
    ) -> Self {
        let (state_tx, _rx) = watch::channel(BinderState::Idle);
        Self {
            store,
            resolver,
            output,
            output_events,
            state_tx,
        }
    }

    /// Subscribe to the binder's state transitions
    pub fn state(&self) -> watch::Receiver<BinderState> {
        self.state_tx.subscribe()
    }

    /// Run the binder until the output's event channel closes
    ///
    /// Consumes the binder; spawn this on the runtime that should own
    /// playback.
    pub async fn run(self) {
        let PlaybackBinder {
            store,
            resolver,
            output,
            mut output_events,
            state_tx,
        } = self;

        let (resolution_tx, mut resolution_rx) = mpsc::unbounded_channel();
        let mut snapshots = store.subscribe();

        let mut driver = Driver {
            store,
            resolver,
            output,
            state_tx,
            resolution_tx,
            epoch: None,
            loaded: false,
            output_playing: false,
            gain: None,
        };

        // Pick up whatever state the store is already in
        let initial = snapshots.borrow_and_update().clone();
        driver.apply_snapshot(initial).await;

        loop {
            tokio::select! {
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = snapshots.borrow_and_update().clone();
                    driver.apply_snapshot(snapshot).await;
                }
                Some(resolution) = resolution_rx.recv() => {
                    driver.apply_resolution(resolution).await;
                }
                event = output_events.recv() => {
                    match event {
                        Some(event) => driver.apply_event(event).await,
                        None => break,
                    }
                }
            }
        }

        debug!("playback binder stopped");
    }
}

/// The binder's mutable core, separated out so `run` can select over its
/// receivers without aliasing it
struct Driver<O: AudioOutput> {
    store: QueueStore,
    resolver: Arc<dyn StreamResolver>,
    output: O,
    state_tx: watch::Sender<BinderState>,
    resolution_tx: mpsc::UnboundedSender<Resolution>,

    /// Last store epoch the output was synced to
    epoch: Option<u64>,
    /// Whether the output holds a loaded stream for the current epoch
    loaded: bool,
    /// Whether the output was told to play (and did not refuse)
    output_playing: bool,
    /// Last gain applied to the output
    gain: Option<f32>,
}

impl<O: AudioOutput> Driver<O> {
    async fn apply_snapshot(&mut self, snapshot: QueueSnapshot) {
        if self.epoch != Some(snapshot.epoch) {
            self.switch_to(&snapshot);
        }

        if self.gain != Some(snapshot.gain) {
            self.gain = Some(snapshot.gain);
            self.output.set_gain(snapshot.gain);
        }

        if self.loaded {
            if let Some(target) = snapshot.pending_seek {
                self.output.seek(target);
                self.store.clear_seek_request();
            }
            if snapshot.is_playing != self.output_playing {
                self.set_transport(snapshot.is_playing).await;
            }
        }
    }

    /// The current entry changed: drop whatever the output held and kick
    /// off a resolution for the new entry
    fn switch_to(&mut self, snapshot: &QueueSnapshot) {
        self.epoch = Some(snapshot.epoch);
        self.loaded = false;
        self.output_playing = false;
        self.output.stop();

        match &snapshot.entry {
            Some(entry) => {
                debug!(
                    source = %entry.source,
                    track_id = %entry.track.id,
                    epoch = snapshot.epoch,
                    "resolving stream for current entry"
                );
                self.set_state(BinderState::Resolving);

                let resolver = Arc::clone(&self.resolver);
                let tx = self.resolution_tx.clone();
                let epoch = snapshot.epoch;
                let source = entry.source;
                let track_id = entry.track.id.clone();
                tokio::spawn(async move {
                    let outcome = resolver.resolve(source, &track_id).await;
                    let _ = tx.send(Resolution { epoch, outcome });
                });
            }
            None => self.set_state(BinderState::Idle),
        }
    }

    async fn apply_resolution(&mut self, resolution: Resolution) {
        if self.epoch != Some(resolution.epoch) {
            debug!(
                resolved_for = resolution.epoch,
                current = ?self.epoch,
                "dropping stale stream resolution"
            );
            return;
        }

        match resolution.outcome {
            Ok(Some(resource)) => match self.output.load(&resource.url, resolution.epoch).await {
                Ok(()) => {
                    self.loaded = true;
                    self.output_playing = false;
                    self.set_state(BinderState::Ready);

                    if let Some(target) = self.store.pending_seek() {
                        self.output.seek(target);
                        self.store.clear_seek_request();
                    }
                    if self.store.is_playing() {
                        self.set_transport(true).await;
                    }
                }
                Err(err) => {
                    warn!(%err, "failed to load resolved stream");
                    self.mark_unavailable();
                }
            },
            Ok(None) => {
                debug!("current entry has no stream available");
                self.mark_unavailable();
            }
            Err(err) => {
                warn!(%err, "stream resolution failed");
                self.mark_unavailable();
            }
        }
    }

    async fn apply_event(&mut self, event: StreamEvent) {
        if self.epoch != Some(event.generation) {
            debug!(
                emitted_for = event.generation,
                current = ?self.epoch,
                "dropping stale output event"
            );
            return;
        }

        match event.event {
            OutputEvent::TimeUpdate(seconds) => self.store.set_current_time(seconds),
            OutputEvent::MetadataLoaded { duration } => self.store.set_duration(duration),
            OutputEvent::Ended => {
                self.output_playing = false;
                if self.store.at_last_index() {
                    // End of the queue: stop, do not wrap around
                    self.store.pause();
                } else {
                    self.store.next();
                }
            }
            OutputEvent::Failed(message) => {
                warn!(%message, "output reported stream failure");
                self.mark_unavailable();
            }
        }
    }

    async fn set_transport(&mut self, playing: bool) {
        if playing {
            match self.output.play().await {
                Ok(()) => self.output_playing = true,
                Err(err) => {
                    // Refused start (e.g. no prior user gesture): the
                    // stream stays loaded, the store falls back to paused
                    warn!(%err, "output refused to start playback");
                    self.store.pause();
                }
            }
        } else {
            self.output.pause();
            self.output_playing = false;
        }
    }

    /// A dead stream pauses the transport and flags the entry; the flag
    /// clears itself on the next entry switch
    fn mark_unavailable(&mut self) {
        self.loaded = false;
        self.output_playing = false;
        self.set_state(BinderState::Unavailable);
        self.store.pause();
        self.store.set_stream_unavailable(true);
    }

    fn set_state(&self, state: BinderState) {
        self.state_tx.send_replace(state);
    }
}
