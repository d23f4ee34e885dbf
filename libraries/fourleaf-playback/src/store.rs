//! Shared queue store handle
//!
//! [`QueueStore`] is the process-wide handle the UI and the playback binder
//! share. Every mutation funnels through [`QueueState`] under one lock and
//! publishes a fresh [`QueueSnapshot`] on a watch channel, so observers see
//! each state transition as a whole, never a half-applied one.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::debug;

use crate::queue::QueueState;
use crate::types::{QueueConfig, QueueEntry, TransitionHint};

/// What the binder needs to know after any store mutation
///
/// Deliberately small: the binder diffs `epoch` to detect track switches
/// and reads the rest to keep the output in line with the transport intent.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueSnapshot {
    /// Current-entry change counter
    pub epoch: u64,

    /// The entry under the cursor, if any
    pub entry: Option<QueueEntry>,

    /// Transport intent
    pub is_playing: bool,

    /// Gain the output should apply (0 when muted)
    pub gain: f32,

    /// Pending cross-surface seek target
    pub pending_seek: Option<f64>,

    /// Whether the cursor sits on the last entry
    pub at_last: bool,
}

impl QueueSnapshot {
    fn of(state: &QueueState) -> Self {
        Self {
            epoch: state.epoch(),
            entry: state.current_entry().cloned(),
            is_playing: state.is_playing(),
            gain: state.effective_gain(),
            pending_seek: state.pending_seek(),
            at_last: state.at_last_index(),
        }
    }
}

/// Clonable handle to the shared queue state
///
/// Cheap to clone; all clones address the same state. Mutations are atomic
/// state transitions (single lock, no interleaving) and each one publishes
/// a snapshot to subscribers.
#[derive(Clone)]
pub struct QueueStore {
    inner: Arc<Mutex<QueueState>>,
    tx: Arc<watch::Sender<QueueSnapshot>>,
}

impl QueueStore {
    /// Create a store with an empty queue
    pub fn new(config: QueueConfig) -> Self {
        let state = QueueState::new(config);
        let (tx, _rx) = watch::channel(QueueSnapshot::of(&state));
        Self {
            inner: Arc::new(Mutex::new(state)),
            tx: Arc::new(tx),
        }
    }

    /// Subscribe to snapshots published after every mutation
    ///
    /// A `watch` receiver only retains the latest value; rapid successive
    /// mutations coalesce, which is exactly right for the binder: only the
    /// newest transport intent matters.
    pub fn subscribe(&self) -> watch::Receiver<QueueSnapshot> {
        self.tx.subscribe()
    }

    fn mutate<R>(&self, op: impl FnOnce(&mut QueueState) -> R) -> R {
        let mut state = self.inner.lock().unwrap();
        let out = op(&mut state);
        let snapshot = QueueSnapshot::of(&state);
        drop(state);
        self.tx.send_replace(snapshot);
        out
    }

    fn read<R>(&self, op: impl FnOnce(&QueueState) -> R) -> R {
        let state = self.inner.lock().unwrap();
        op(&state)
    }

    // ===== Queue mutation =====

    /// Replace the queue wholesale; see [`QueueState::set_queue`]
    pub fn set_queue(&self, items: Vec<QueueEntry>, start_index: usize) {
        debug!(len = items.len(), start_index, "queue replaced");
        self.mutate(|state| state.set_queue(items, start_index));
    }

    /// Jump the cursor to `index`
    pub fn set_position(&self, index: usize) {
        self.mutate(|state| state.set_position(index));
    }

    /// Advance to the next entry; no-op at the tail
    pub fn next(&self) {
        self.mutate(QueueState::next);
    }

    /// Step back to the previous entry; no-op at the head
    pub fn previous(&self) {
        self.mutate(QueueState::previous);
    }

    /// Remove the entry under the cursor
    pub fn remove_current(&self) {
        self.mutate(QueueState::remove_current);
    }

    /// Close the player: full reset to the empty state
    pub fn close(&self) {
        debug!("player closed");
        self.mutate(QueueState::close);
    }

    // ===== Transport intent =====

    /// Request playback
    pub fn play(&self) {
        self.mutate(QueueState::play);
    }

    /// Request pause
    pub fn pause(&self) {
        self.mutate(QueueState::pause);
    }

    /// Flip between playing and paused
    pub fn toggle_play_pause(&self) {
        self.mutate(QueueState::toggle_play_pause);
    }

    /// Set the volume, clamped to `[0, 1]`
    pub fn set_volume(&self, volume: f32) {
        self.mutate(|state| state.set_volume(volume));
    }

    /// Mute or unmute without touching the volume level
    pub fn set_muted(&self, muted: bool) {
        self.mutate(|state| state.set_muted(muted));
    }

    /// Toggle the mute flag
    pub fn toggle_muted(&self) {
        self.mutate(QueueState::toggle_muted);
    }

    // ===== Binder reflection =====

    /// Reflect the output's playback position (binder only)
    pub fn set_current_time(&self, seconds: f64) {
        self.mutate(|state| state.set_current_time(seconds));
    }

    /// Reflect the output's resolved duration (binder only)
    pub fn set_duration(&self, seconds: f64) {
        self.mutate(|state| state.set_duration(seconds));
    }

    /// Reflect a failed or empty stream resolution (binder only)
    pub fn set_stream_unavailable(&self, unavailable: bool) {
        self.mutate(|state| state.set_stream_unavailable(unavailable));
    }

    // ===== Cross-surface seek =====

    /// Ask the binder to seek the output to `seconds`
    pub fn request_seek(&self, seconds: f64) {
        self.mutate(|state| state.request_seek(seconds));
    }

    /// Clear a pending seek once applied
    pub fn clear_seek_request(&self) {
        self.mutate(QueueState::clear_seek_request);
    }

    // ===== Overlay and transition =====

    /// Open the expanded "now playing" overlay
    pub fn open_overlay(&self) {
        self.mutate(QueueState::open_overlay);
    }

    /// Close the overlay; playback is unaffected
    pub fn close_overlay(&self) {
        self.mutate(QueueState::close_overlay);
    }

    /// Store or clear the overlay transition payload
    pub fn set_transition_hint(&self, hint: Option<TransitionHint>) {
        self.mutate(|state| state.set_transition_hint(hint));
    }

    // ===== Accessors =====

    /// The entry under the cursor, if any
    pub fn current_entry(&self) -> Option<QueueEntry> {
        self.read(|state| state.current_entry().cloned())
    }

    /// All entries in playback order (for "up next" rendering)
    pub fn entries(&self) -> Vec<QueueEntry> {
        self.read(|state| state.entries().to_vec())
    }

    /// Cursor position; `None` iff the queue is empty
    pub fn position(&self) -> Option<usize> {
        self.read(QueueState::position)
    }

    /// Number of entries in the queue
    pub fn len(&self) -> usize {
        self.read(QueueState::len)
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.read(QueueState::is_empty)
    }

    /// Whether the cursor sits on the last entry
    pub fn at_last_index(&self) -> bool {
        self.read(QueueState::at_last_index)
    }

    /// Transport intent
    pub fn is_playing(&self) -> bool {
        self.read(QueueState::is_playing)
    }

    /// Volume in `[0, 1]`
    pub fn volume(&self) -> f32 {
        self.read(QueueState::volume)
    }

    /// Mute flag
    pub fn is_muted(&self) -> bool {
        self.read(QueueState::is_muted)
    }

    /// Displayed playback position in seconds
    pub fn current_time(&self) -> f64 {
        self.read(QueueState::current_time)
    }

    /// Resolved duration in seconds
    pub fn duration(&self) -> f64 {
        self.read(QueueState::duration)
    }

    /// Pending cross-surface seek target, if any
    pub fn pending_seek(&self) -> Option<f64> {
        self.read(QueueState::pending_seek)
    }

    /// Whether the expanded overlay is open
    pub fn overlay_open(&self) -> bool {
        self.read(QueueState::overlay_open)
    }

    /// The overlay transition payload, if set
    pub fn transition_hint(&self) -> Option<TransitionHint> {
        self.read(|state| state.transition_hint().cloned())
    }

    /// Whether the current entry's stream failed to resolve
    pub fn stream_unavailable(&self) -> bool {
        self.read(QueueState::stream_unavailable)
    }

    /// Whether transport buttons should be enabled
    pub fn controls_enabled(&self) -> bool {
        self.read(QueueState::controls_enabled)
    }

    /// Current-entry change counter
    pub fn epoch(&self) -> u64 {
        self.read(QueueState::epoch)
    }
}

impl Default for QueueStore {
    fn default() -> Self {
        Self::new(QueueConfig::default())
    }
}

impl std::fmt::Debug for QueueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.lock().unwrap();
        f.debug_struct("QueueStore")
            .field("len", &state.len())
            .field("position", &state.position())
            .field("is_playing", &state.is_playing())
            .field("epoch", &state.epoch())
            .finish()
    }
}
