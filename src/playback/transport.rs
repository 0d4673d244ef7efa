//! Transport: play/pause, next/previous, shuffle/repeat, and the play
//! history that backs "previous" navigation.

use rand::seq::SliceRandom;

use super::state::PlayerState;
use crate::catalog::Track;

/// Past this many seconds into a track, "previous" restarts it instead of
/// changing track.
pub const RESTART_THRESHOLD_SECS: f64 = 2.0;

/// What `previous` decided, so the media layer knows whether to seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviousOutcome {
    /// Playback position was far enough in: restart the current track.
    Restarted,
    /// A different track was selected (history pop or index fallback).
    SwitchedTrack,
    /// Nothing applied.
    Ignored,
}

/// What to do with the media element after a track finished naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOfTrackOutcome {
    /// Repeat is on: seek to zero and keep playing the same track.
    RestartCurrent,
    /// Advanced to the next track (selection already updated).
    Advanced,
}

/// The transport state machine. Owns the shuffle/repeat flags and the play
/// history; all track selection goes through [`PlayerState::select_track`].
#[derive(Debug, Clone, Default)]
pub struct TransportController {
    shuffle: bool,
    repeat: bool,
    history: Vec<Track>,
}

impl TransportController {
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn set_shuffle(&mut self, on: bool) {
        self.shuffle = on;
    }

    pub fn set_repeat(&mut self, on: bool) {
        self.repeat = on;
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.set_shuffle(!self.shuffle);
        self.shuffle
    }

    pub fn toggle_repeat(&mut self) -> bool {
        self.set_repeat(!self.repeat);
        self.repeat
    }

    #[cfg(test)]
    fn history(&self) -> &[Track] {
        &self.history
    }

    /// Flip playing/paused on the selected track. No-op without one.
    pub fn toggle_play(&self, state: &mut PlayerState) {
        if state.selected_track.is_none() {
            return;
        }
        let playing = state.is_playing();
        state.set_playing(!playing);
    }

    /// Advance to the next track: random (excluding the current index) when
    /// shuffle is on, otherwise the following index with wraparound. The
    /// outgoing track is pushed onto the history first.
    pub fn next(&mut self, state: &mut PlayerState) {
        let Some(playlist) = state.selected_playlist.clone() else {
            return;
        };
        let Some(current) = state.selected_track.clone() else {
            return;
        };
        if playlist.tracks.is_empty() {
            return;
        }

        let index = state.current_index();
        let candidate = if self.shuffle {
            // Only the current index is excluded; earlier tracks may recur.
            let others: Vec<usize> = (0..playlist.tracks.len())
                .filter(|i| Some(*i) != index)
                .collect();
            match others.choose(&mut rand::thread_rng()) {
                Some(i) => playlist.tracks[*i].clone(),
                None => return,
            }
        } else {
            // A track missing from the playlist (manual jump) counts as
            // sitting before the first, so "next" lands on index 0.
            let next_index = match index {
                Some(i) if i + 1 >= playlist.tracks.len() => 0,
                Some(i) => i + 1,
                None => 0,
            };
            playlist.tracks[next_index].clone()
        };

        self.history.push(current);
        state.select_track(&candidate);
    }

    /// Step backwards. Restarts the current track when more than
    /// [`RESTART_THRESHOLD_SECS`] have elapsed; otherwise pops the history,
    /// and failing that falls back to the previous index, clamped at the
    /// first track.
    pub fn previous(&mut self, state: &mut PlayerState, position_secs: f64) -> PreviousOutcome {
        if state.selected_track.is_some() && position_secs > RESTART_THRESHOLD_SECS {
            return PreviousOutcome::Restarted;
        }

        if let Some(last) = self.history.pop() {
            state.select_track(&last);
            return PreviousOutcome::SwitchedTrack;
        }

        if let Some(playlist) = state.selected_playlist.clone() {
            if playlist.tracks.is_empty() {
                return PreviousOutcome::Ignored;
            }
            let fallback = state.current_index().map_or(0, |i| i.saturating_sub(1));
            state.select_track(&playlist.tracks[fallback]);
            return PreviousOutcome::SwitchedTrack;
        }

        PreviousOutcome::Ignored
    }

    /// A track finished on its own: repeat restarts it, otherwise advance.
    pub fn handle_track_end(&mut self, state: &mut PlayerState) -> EndOfTrackOutcome {
        if self.repeat {
            EndOfTrackOutcome::RestartCurrent
        } else {
            self.next(state);
            EndOfTrackOutcome::Advanced
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::test_support::catalog_of;

    fn loaded_state(shape: &[(&str, usize)]) -> PlayerState {
        let mut state = PlayerState::default();
        state.load_catalog(&catalog_of(shape));
        state
    }

    fn selected_id(state: &PlayerState) -> &str {
        state.selected_track.as_ref().unwrap().id.as_str()
    }

    #[test]
    fn next_walks_the_playlist_and_wraps() {
        let mut state = loaded_state(&[("p", 3)]);
        let mut transport = TransportController::default();
        let first = state.playlists[0].tracks[0].clone();
        state.select_track(&first);

        transport.next(&mut state);
        assert_eq!(selected_id(&state), "p-1");
        transport.next(&mut state);
        assert_eq!(selected_id(&state), "p-2");
        transport.next(&mut state);
        assert_eq!(selected_id(&state), "p-0");
        assert!(state.is_playing());
    }

    #[test]
    fn next_n_times_returns_to_start() {
        let mut state = loaded_state(&[("p", 5)]);
        let mut transport = TransportController::default();
        let first = state.playlists[0].tracks[0].clone();
        state.select_track(&first);

        for _ in 0..5 {
            transport.next(&mut state);
        }
        assert_eq!(selected_id(&state), "p-0");
    }

    #[test]
    fn next_without_selection_is_a_no_op() {
        let mut state = PlayerState::default();
        let mut transport = TransportController::default();
        transport.next(&mut state);
        assert!(state.selected_track.is_none());
        assert!(transport.history().is_empty());
    }

    #[test]
    fn next_after_manual_jump_starts_the_new_playlist() {
        let mut state = loaded_state(&[("a", 3), ("b", 2)]);
        let mut transport = TransportController::default();
        let track = state.playlists[0].tracks[2].clone();
        state.select_track(&track);
        state.select_playlist("b");

        transport.next(&mut state);
        assert_eq!(selected_id(&state), "b-0");
    }

    #[test]
    fn shuffle_never_repicks_the_current_track() {
        let mut state = loaded_state(&[("p", 4)]);
        let mut transport = TransportController::default();
        transport.set_shuffle(true);
        let first = state.playlists[0].tracks[0].clone();
        state.select_track(&first);

        for _ in 0..50 {
            let before = selected_id(&state).to_string();
            transport.next(&mut state);
            let after = selected_id(&state).to_string();
            assert_ne!(before, after);
            assert!(state.playlists[0].contains(&after));
        }
    }

    #[test]
    fn shuffle_with_a_single_track_does_nothing() {
        let mut state = loaded_state(&[("p", 1)]);
        let mut transport = TransportController::default();
        transport.set_shuffle(true);
        let only = state.playlists[0].tracks[0].clone();
        state.select_track(&only);

        transport.next(&mut state);
        assert_eq!(selected_id(&state), "p-0");
        assert!(transport.history().is_empty());
    }

    #[test]
    fn previous_restarts_when_past_the_threshold() {
        let mut state = loaded_state(&[("p", 3)]);
        let mut transport = TransportController::default();
        let second = state.playlists[0].tracks[1].clone();
        state.select_track(&second);

        let outcome = transport.previous(&mut state, 7.3);
        assert_eq!(outcome, PreviousOutcome::Restarted);
        assert_eq!(selected_id(&state), "p-1");
    }

    #[test]
    fn previous_pops_history_after_next() {
        let mut state = loaded_state(&[("p", 3)]);
        let mut transport = TransportController::default();
        let second = state.playlists[0].tracks[1].clone();
        state.select_track(&second);

        transport.next(&mut state);
        assert_eq!(selected_id(&state), "p-2");
        assert_eq!(transport.history().len(), 1);

        let outcome = transport.previous(&mut state, 0.0);
        assert_eq!(outcome, PreviousOutcome::SwitchedTrack);
        assert_eq!(selected_id(&state), "p-1");
        assert!(transport.history().is_empty());
    }

    #[test]
    fn previous_falls_back_to_index_and_clamps_at_first() {
        let mut state = loaded_state(&[("p", 3)]);
        let mut transport = TransportController::default();
        let first = state.playlists[0].tracks[0].clone();
        state.select_track(&first);

        let outcome = transport.previous(&mut state, 0.5);
        assert_eq!(outcome, PreviousOutcome::SwitchedTrack);
        assert_eq!(selected_id(&state), "p-0");
    }

    #[test]
    fn previous_with_nothing_selected_is_ignored() {
        let mut state = PlayerState::default();
        let mut transport = TransportController::default();
        assert_eq!(transport.previous(&mut state, 0.0), PreviousOutcome::Ignored);
    }

    #[test]
    fn toggle_play_flips_only_with_a_selection() {
        let mut state = loaded_state(&[("p", 2)]);
        let transport = TransportController::default();
        let first = state.playlists[0].tracks[0].clone();
        state.select_track(&first);

        transport.toggle_play(&mut state);
        assert!(!state.is_playing());
        transport.toggle_play(&mut state);
        assert!(state.is_playing());

        let mut empty = PlayerState::default();
        transport.toggle_play(&mut empty);
        assert!(empty.selected_track.is_none());
    }

    #[test]
    fn track_end_restarts_with_repeat_on() {
        let mut state = loaded_state(&[("p", 3)]);
        let mut transport = TransportController::default();
        transport.set_repeat(true);
        let second = state.playlists[0].tracks[1].clone();
        state.select_track(&second);

        let outcome = transport.handle_track_end(&mut state);
        assert_eq!(outcome, EndOfTrackOutcome::RestartCurrent);
        assert_eq!(selected_id(&state), "p-1");
        assert!(state.is_playing());
    }

    #[test]
    fn track_end_advances_with_repeat_off() {
        let mut state = loaded_state(&[("p", 3)]);
        let mut transport = TransportController::default();
        let second = state.playlists[0].tracks[1].clone();
        state.select_track(&second);

        let outcome = transport.handle_track_end(&mut state);
        assert_eq!(outcome, EndOfTrackOutcome::Advanced);
        assert_eq!(selected_id(&state), "p-2");
    }

    #[test]
    fn history_only_grows_on_forward_navigation() {
        let mut state = loaded_state(&[("p", 4)]);
        let mut transport = TransportController::default();
        let first = state.playlists[0].tracks[0].clone();
        state.select_track(&first);

        transport.next(&mut state);
        transport.next(&mut state);
        assert_eq!(transport.history().len(), 2);

        // Direct selection does not push.
        let third = state.playlists[0].tracks[3].clone();
        state.select_track(&third);
        assert_eq!(transport.history().len(), 2);

        transport.previous(&mut state, 0.0);
        assert_eq!(transport.history().len(), 1);
        assert_eq!(selected_id(&state), "p-1");
    }
}
