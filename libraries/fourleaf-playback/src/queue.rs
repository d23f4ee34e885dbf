//! Queue and transport state machine
//!
//! One ordered queue, one cursor, one transport intent. Every operation is
//! a total function: out-of-range input is clamped or ignored, never an
//! error. The binder is the only legitimate caller of the reflection
//! operations (`set_current_time`, `set_duration`,
//! `set_stream_unavailable`); everything else belongs to the UI.

use crate::types::{QueueConfig, QueueEntry, TransitionHint};

/// Queue and transport state
///
/// Structure:
/// ```text
/// entries:  [ A, B, C, D ]
///                  ^
/// position:        1        (None when the queue is empty)
/// epoch:           7        (bumps on every current-entry change)
/// ```
///
/// The epoch is the correlation tag for asynchronous stream resolution: a
/// resolution started at epoch N is stale once the epoch moves past N, even
/// if the entry at the cursor carries the same track id.
#[derive(Debug, Clone)]
pub struct QueueState {
    /// Playback order; insertion order is playback order
    entries: Vec<QueueEntry>,

    /// Cursor into `entries`; `None` iff `entries` is empty
    position: Option<usize>,

    /// Transport intent; the physical output follows this, not vice versa
    is_playing: bool,

    /// Volume in `[0, 1]`
    volume: f32,

    /// Mute flag; preserves `volume`
    muted: bool,

    /// Displayed playback position in seconds (reflected from the output)
    current_time: f64,

    /// Resolved track duration in seconds; 0 until metadata loads
    duration: f64,

    /// Seek target requested by a detached control surface, applied by the
    /// binder exactly once
    pending_seek: Option<f64>,

    /// Whether the expanded "now playing" overlay is open
    overlay_open: bool,

    /// Visual-continuity payload for the overlay transition
    transition_hint: Option<TransitionHint>,

    /// Binder-reported: the current entry's stream could not be resolved
    stream_unavailable: bool,

    /// Bumped on every current-entry change; never reset
    epoch: u64,
}

impl QueueState {
    /// Create an empty queue state
    pub fn new(config: QueueConfig) -> Self {
        Self {
            entries: Vec::new(),
            position: None,
            is_playing: false,
            volume: clamp_volume(config.initial_volume),
            muted: false,
            current_time: 0.0,
            duration: 0.0,
            pending_seek: None,
            overlay_open: false,
            transition_hint: None,
            stream_unavailable: false,
            epoch: 0,
        }
    }

    // ===== Queue mutation =====

    /// Replace the queue wholesale and move the cursor to `start_index`
    ///
    /// Previous contents are discarded; there are no merge semantics.
    /// Playback always starts paused; callers follow up with `play()`.
    /// An empty `items` resets to the empty state. `start_index` is clamped
    /// into range defensively (passing one out of range is a caller bug).
    pub fn set_queue(&mut self, items: Vec<QueueEntry>, start_index: usize) {
        if items.is_empty() {
            self.clear_entries();
            return;
        }

        let index = start_index.min(items.len() - 1);
        self.entries = items;
        self.position = Some(index);
        self.is_playing = false;
        self.switch_entry();
    }

    /// Jump the cursor directly to `index`
    ///
    /// Does not touch `is_playing`. Clamped into range; no-op when empty.
    pub fn set_position(&mut self, index: usize) {
        if self.entries.is_empty() {
            return;
        }
        self.position = Some(index.min(self.entries.len() - 1));
        self.switch_entry();
    }

    /// Advance to the next entry; no-op at the tail
    pub fn next(&mut self) {
        if let Some(pos) = self.position {
            if pos + 1 < self.entries.len() {
                self.position = Some(pos + 1);
                self.switch_entry();
            }
        }
    }

    /// Step back to the previous entry; no-op at the head
    pub fn previous(&mut self) {
        if let Some(pos) = self.position {
            if pos > 0 {
                self.position = Some(pos - 1);
                self.switch_entry();
            }
        }
    }

    /// Remove the entry under the cursor
    ///
    /// Removing the current track intentionally auto-advances: the entry
    /// that shifted into the cursor's slot (the old "next") becomes
    /// current. Removing the tail clamps the cursor back; removing the
    /// only entry resets to the empty state and closes the overlay.
    pub fn remove_current(&mut self) {
        let Some(pos) = self.position else {
            return;
        };

        self.entries.remove(pos);

        if self.entries.is_empty() {
            self.clear_entries();
            self.overlay_open = false;
            return;
        }

        if pos >= self.entries.len() {
            self.position = Some(self.entries.len() - 1);
        }
        self.switch_entry();
    }

    /// Close the player: full reset to the empty state
    ///
    /// Also clears the transition hint and any pending seek. Volume and
    /// mute survive; they are user preferences, not queue state.
    pub fn close(&mut self) {
        self.clear_entries();
        self.overlay_open = false;
        self.transition_hint = None;
    }

    fn clear_entries(&mut self) {
        self.entries.clear();
        self.position = None;
        self.is_playing = false;
        self.pending_seek = None;
        self.switch_entry();
    }

    /// Timing and availability are per-entry; invalidate them and bump the
    /// epoch whenever the cursor's target changes.
    fn switch_entry(&mut self) {
        self.current_time = 0.0;
        self.duration = 0.0;
        self.stream_unavailable = false;
        self.epoch += 1;
    }

    // ===== Transport intent =====

    /// Request playback; no-op on an empty queue
    pub fn play(&mut self) {
        if !self.entries.is_empty() {
            self.is_playing = true;
        }
    }

    /// Request pause
    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    /// Flip between playing and paused
    pub fn toggle_play_pause(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Set the volume, clamped to `[0, 1]`
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
    }

    /// Mute or unmute without touching the volume level
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Toggle the mute flag
    pub fn toggle_muted(&mut self) {
        self.muted = !self.muted;
    }

    // ===== Binder reflection =====

    /// Reflect the output's playback position (binder only)
    pub fn set_current_time(&mut self, seconds: f64) {
        self.current_time = sanitize_seconds(seconds);
    }

    /// Reflect the output's resolved duration (binder only)
    pub fn set_duration(&mut self, seconds: f64) {
        self.duration = sanitize_seconds(seconds);
    }

    /// Reflect a failed or empty stream resolution (binder only)
    ///
    /// Reset automatically on the next entry change, so reselecting a
    /// track re-enables the transport and re-triggers resolution.
    pub fn set_stream_unavailable(&mut self, unavailable: bool) {
        self.stream_unavailable = unavailable;
    }

    // ===== Cross-surface seek =====

    /// Ask the binder to seek the output to `seconds`
    pub fn request_seek(&mut self, seconds: f64) {
        self.pending_seek = Some(sanitize_seconds(seconds));
    }

    /// Clear a pending seek once applied
    pub fn clear_seek_request(&mut self) {
        self.pending_seek = None;
    }

    // ===== Overlay and transition =====

    /// Open the expanded "now playing" overlay
    pub fn open_overlay(&mut self) {
        self.overlay_open = true;
    }

    /// Close the overlay; playback is unaffected
    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
    }

    /// Store or clear the overlay transition payload
    pub fn set_transition_hint(&mut self, hint: Option<TransitionHint>) {
        self.transition_hint = hint;
    }

    // ===== Accessors =====

    /// The entry under the cursor, if any
    pub fn current_entry(&self) -> Option<&QueueEntry> {
        self.position.and_then(|pos| self.entries.get(pos))
    }

    /// All entries in playback order
    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    /// Cursor position; `None` iff the queue is empty
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Number of entries in the queue
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the cursor sits on the last entry
    pub fn at_last_index(&self) -> bool {
        matches!(self.position, Some(pos) if pos + 1 == self.entries.len())
    }

    /// Transport intent
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Volume in `[0, 1]`
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Mute flag
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Gain the output should apply: 0 when muted, else the volume
    pub fn effective_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    /// Displayed playback position in seconds
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Resolved duration in seconds (0 until metadata loads)
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Pending cross-surface seek target, if any
    pub fn pending_seek(&self) -> Option<f64> {
        self.pending_seek
    }

    /// Whether the expanded overlay is open
    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    /// The overlay transition payload, if set
    pub fn transition_hint(&self) -> Option<&TransitionHint> {
        self.transition_hint.as_ref()
    }

    /// Whether the current entry's stream failed to resolve
    pub fn stream_unavailable(&self) -> bool {
        self.stream_unavailable
    }

    /// Whether transport buttons should be enabled
    pub fn controls_enabled(&self) -> bool {
        !self.entries.is_empty() && !self.stream_unavailable
    }

    /// Current-entry change counter
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

impl Default for QueueState {
    fn default() -> Self {
        Self::new(QueueConfig::default())
    }
}

fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        return 0.0;
    }
    volume.clamp(0.0, 1.0)
}

fn sanitize_seconds(seconds: f64) -> f64 {
    if seconds.is_nan() {
        return 0.0;
    }
    seconds.max(0.0)
}
