//! Property-based tests for the queue state machine
//!
//! Uses proptest to verify invariants across many random inputs.
//! No shallow tests - every property test verifies meaningful invariants.

use fourleaf_core::types::{LibrarySource, TrackId, TrackRef};
use fourleaf_playback::{QueueConfig, QueueEntry, QueueState};
use proptest::prelude::*;

// ===== Helpers =====

fn arbitrary_entry() -> impl Strategy<Value = QueueEntry> {
    (
        "[a-z0-9]{1,10}",                        // id
        "[A-Za-z ]{1,30}",                       // title
        "[A-Za-z ]{1,20}",                       // artist
        proptest::option::of("[A-Za-z ]{1,20}"), // album
        prop::bool::ANY,                         // personal library?
    )
        .prop_map(|(id, title, artist, album, personal)| {
            let source = if personal {
                LibrarySource::Personal
            } else {
                LibrarySource::Catalog
            };
            let mut track = TrackRef::new(TrackId::new(id), title, artist);
            track.album = album;
            QueueEntry::new(source, track)
        })
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<QueueEntry>> {
    prop::collection::vec(arbitrary_entry(), 1..30)
}

/// Check the structural invariants that must hold after every operation
fn assert_invariants(state: &QueueState) {
    match state.position() {
        Some(index) => {
            assert!(!state.is_empty(), "cursor set on an empty queue");
            assert!(
                index < state.len(),
                "cursor {} out of bounds for {} entries",
                index,
                state.len()
            );
            assert!(state.current_entry().is_some());
        }
        None => {
            assert!(state.is_empty(), "no cursor despite non-empty queue");
            assert!(state.current_entry().is_none());
            assert!(!state.is_playing(), "playing with nothing selected");
        }
    }

    assert!(
        (0.0..=1.0).contains(&state.volume()),
        "volume out of range: {}",
        state.volume()
    );
    assert!(state.current_time() >= 0.0);
    assert!(state.duration() >= 0.0);
}

// ===== Property Tests =====

proptest! {
    /// Property: No operation sequence breaks the structural invariants
    #[test]
    fn invariants_hold_under_any_operation_sequence(
        entries in arbitrary_entries(),
        start_index in 0usize..40,
        operations in prop::collection::vec((0u8..12, 0usize..40, -2.0f32..3.0), 1..60)
    ) {
        let mut state = QueueState::new(QueueConfig::default());
        state.set_queue(entries, start_index);
        assert_invariants(&state);

        for (op, index, value) in operations {
            match op {
                0 => state.next(),
                1 => state.previous(),
                2 => state.set_position(index),
                3 => state.remove_current(),
                4 => state.play(),
                5 => state.pause(),
                6 => state.toggle_play_pause(),
                7 => state.set_volume(value),
                8 => state.toggle_muted(),
                9 => state.set_current_time(f64::from(value) * 100.0),
                10 => state.request_seek(f64::from(value) * 100.0),
                _ => state.close(),
            }
            assert_invariants(&state);
        }
    }

    /// Property: Volume is clamped to [0, 1] for any input, including
    /// non-finite values
    #[test]
    fn volume_clamped_for_any_input(
        volume in prop_oneof![
            any::<f32>(),
            Just(f32::NAN),
            Just(f32::INFINITY),
            Just(f32::NEG_INFINITY),
        ]
    ) {
        let mut state = QueueState::new(QueueConfig::default());
        state.set_volume(volume);

        let actual = state.volume();
        prop_assert!((0.0..=1.0).contains(&actual), "volume out of range: {actual}");
    }

    /// Property: Mute zeroes the effective gain without losing the level
    #[test]
    fn mute_silences_and_restores(volume in 0.0f32..=1.0) {
        let mut state = QueueState::new(QueueConfig::default());
        state.set_volume(volume);

        state.set_muted(true);
        prop_assert_eq!(state.effective_gain(), 0.0);
        prop_assert_eq!(state.volume(), volume);

        state.set_muted(false);
        prop_assert_eq!(state.effective_gain(), volume);
    }

    /// Property: The start index is always clamped into bounds
    #[test]
    fn start_index_always_in_bounds(
        entries in arbitrary_entries(),
        start_index in 0usize..200
    ) {
        let mut state = QueueState::new(QueueConfig::default());
        let len = entries.len();
        state.set_queue(entries, start_index);

        let position = state.position().unwrap();
        prop_assert!(position < len);
        prop_assert_eq!(position, start_index.min(len - 1));
    }

    /// Property: Stepping preserves the playing flag and never walks off
    /// either end
    #[test]
    fn stepping_stays_in_bounds_and_preserves_intent(
        entries in arbitrary_entries(),
        steps in prop::collection::vec(prop::bool::ANY, 1..80)
    ) {
        let mut state = QueueState::new(QueueConfig::default());
        let len = entries.len();
        state.set_queue(entries, 0);
        state.play();

        for forward in steps {
            if forward {
                state.next();
            } else {
                state.previous();
            }
            let position = state.position().unwrap();
            prop_assert!(position < len);
            prop_assert!(state.is_playing(), "stepping cleared the playing flag");
        }
    }

    /// Property: The epoch is strictly monotone across entry changes and
    /// stable across transport-only operations
    #[test]
    fn epoch_monotone_over_entry_changes(
        entries in prop::collection::vec(arbitrary_entry(), 2..20),
        operations in prop::collection::vec(0u8..8, 1..40)
    ) {
        let mut state = QueueState::new(QueueConfig::default());
        state.set_queue(entries, 0);

        let mut last_epoch = state.epoch();
        for op in operations {
            let entry_before = state.current_entry().cloned();
            let position_before = state.position();

            match op {
                0 => state.next(),
                1 => state.previous(),
                2 => state.remove_current(),
                3 => state.play(),
                4 => state.pause(),
                5 => state.set_volume(0.3),
                6 => state.set_current_time(42.0),
                _ => state.toggle_muted(),
            }

            let epoch = state.epoch();
            prop_assert!(epoch >= last_epoch, "epoch went backwards");

            let switched = state.position() != position_before
                || state.current_entry().cloned() != entry_before;
            if switched {
                prop_assert!(epoch > last_epoch, "entry changed without an epoch bump");
            }
            last_epoch = epoch;
        }
    }

    /// Property: Removing the current entry shrinks the queue by one and
    /// leaves the cursor on a valid entry (or empties the queue)
    #[test]
    fn remove_current_shrinks_by_one(
        entries in arbitrary_entries(),
        start_index in 0usize..40
    ) {
        let mut state = QueueState::new(QueueConfig::default());
        state.set_queue(entries, start_index);

        let len_before = state.len();
        state.remove_current();

        prop_assert_eq!(state.len(), len_before - 1);
        assert_invariants(&state);
    }

    /// Property: Replacing the queue always lands paused with zeroed timing
    #[test]
    fn set_queue_resets_transport(
        first in arbitrary_entries(),
        second in arbitrary_entries(),
        start_index in 0usize..40
    ) {
        let mut state = QueueState::new(QueueConfig::default());
        state.set_queue(first, 0);
        state.play();
        state.set_duration(200.0);
        state.set_current_time(120.0);

        state.set_queue(second, start_index);

        prop_assert!(!state.is_playing());
        prop_assert_eq!(state.current_time(), 0.0);
        prop_assert_eq!(state.duration(), 0.0);
        prop_assert_eq!(state.pending_seek(), None);
    }

    /// Property: Close fully resets playback state but keeps audio settings
    #[test]
    fn close_resets_playback_keeps_settings(
        entries in arbitrary_entries(),
        volume in 0.0f32..=1.0,
        muted in prop::bool::ANY
    ) {
        let mut state = QueueState::new(QueueConfig::default());
        state.set_queue(entries, 0);
        state.play();
        state.set_volume(volume);
        state.set_muted(muted);
        state.open_overlay();

        state.close();

        prop_assert!(state.is_empty());
        prop_assert_eq!(state.position(), None);
        prop_assert!(!state.is_playing());
        prop_assert!(!state.overlay_open());
        prop_assert_eq!(state.volume(), volume);
        prop_assert_eq!(state.is_muted(), muted);
    }
}
