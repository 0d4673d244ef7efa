//! The playback selection container: the loaded library plus the playlist
//! and track the user currently has open.

use crate::catalog::{Catalog, Playlist, Track};

/// Process-wide playback state. Starts empty and is populated once from the
/// bundled catalog; afterwards it changes only through the selection
/// operations below (the transport and the UI both go through these).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerState {
    pub playlists: Vec<Playlist>,
    pub selected_playlist: Option<Playlist>,
    pub selected_track: Option<Track>,
}

impl PlayerState {
    /// One-time population from the catalog. Opens the first playlist and
    /// selects its first track, not playing.
    pub fn load_catalog(&mut self, catalog: &Catalog) {
        self.playlists = catalog.playlists.clone();
        self.selected_playlist = self.playlists.first().cloned();
        self.selected_track = self
            .selected_playlist
            .as_ref()
            .and_then(|p| p.tracks.first().cloned());
    }

    pub fn select_playlist(&mut self, playlist_id: &str) {
        if let Some(playlist) = self.playlists.iter().find(|p| p.id == playlist_id) {
            self.selected_playlist = Some(playlist.clone());
        }
    }

    /// The single entry point for activating a track: selection always
    /// starts playback.
    pub fn select_track(&mut self, track: &Track) {
        self.selected_track = Some(Track {
            is_playing: true,
            ..track.clone()
        });
    }

    /// Replace the selected track verbatim, keeping whatever `is_playing`
    /// the caller set. Used by the library's play/pause thumbnail overlay.
    pub fn set_selected_track(&mut self, track: Track) {
        self.selected_track = Some(track);
    }

    pub fn set_playing(&mut self, playing: bool) {
        if let Some(track) = self.selected_track.as_mut() {
            track.is_playing = playing;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.selected_track.as_ref().is_some_and(|t| t.is_playing)
    }

    /// Whether the given track is the active one, matched by id.
    pub fn is_selected(&self, track_id: &str) -> bool {
        self.selected_track.as_ref().is_some_and(|t| t.id == track_id)
    }

    /// Whether the given playlist holds the active track and it is playing.
    /// Drives the "now playing" badge in the library panel.
    pub fn is_playing_from(&self, playlist: &Playlist) -> bool {
        self.selected_track
            .as_ref()
            .is_some_and(|t| t.is_playing && playlist.contains(&t.id))
    }

    /// Index of the selected track within the selected playlist. `None`
    /// when either is missing, or after a manual jump to a playlist that
    /// does not contain the active track.
    pub fn current_index(&self) -> Option<usize> {
        let playlist = self.selected_playlist.as_ref()?;
        let track = self.selected_track.as_ref()?;
        playlist.tracks.iter().position(|t| t.id == track.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::test_support::catalog_of;

    #[test]
    fn load_catalog_opens_first_playlist_and_track() {
        let catalog = catalog_of(&[("a", 3), ("b", 2)]);
        let mut state = PlayerState::default();
        state.load_catalog(&catalog);

        assert_eq!(state.playlists.len(), 2);
        assert_eq!(state.selected_playlist.as_ref().unwrap().id, "a");
        let track = state.selected_track.as_ref().unwrap();
        assert_eq!(track.id, "a-0");
        assert!(!track.is_playing);
    }

    #[test]
    fn select_track_always_starts_playback() {
        let catalog = catalog_of(&[("a", 3)]);
        let mut state = PlayerState::default();
        state.load_catalog(&catalog);

        let track = state.playlists[0].tracks[2].clone();
        state.select_track(&track);
        assert!(state.selected_track.as_ref().unwrap().is_playing);
        assert_eq!(state.current_index(), Some(2));
    }

    #[test]
    fn current_index_is_none_after_manual_playlist_jump() {
        let catalog = catalog_of(&[("a", 3), ("b", 2)]);
        let mut state = PlayerState::default();
        state.load_catalog(&catalog);

        let track = state.playlists[0].tracks[1].clone();
        state.select_track(&track);
        state.select_playlist("b");
        assert_eq!(state.current_index(), None);
    }

    #[test]
    fn selecting_unknown_playlist_is_a_no_op() {
        let catalog = catalog_of(&[("a", 1)]);
        let mut state = PlayerState::default();
        state.load_catalog(&catalog);
        state.select_playlist("missing");
        assert_eq!(state.selected_playlist.as_ref().unwrap().id, "a");
    }
}
