//! The playback core: volume, HUD, selection state, transport, and the
//! keyboard shortcut table. No rendering or browser types in here; the
//! Dioxus layer wraps these containers in signals and applies their
//! decisions to the media element.

mod hud;
mod shortcuts;
mod state;
mod transport;
mod volume;

pub use hud::{HudState, HUD_DISMISS_MS};
pub use shortcuts::{action_for_key, ShortcutAction, SEEK_STEP_SECS, VOLUME_STEP};
pub use state::PlayerState;
pub use transport::{
    EndOfTrackOutcome, PreviousOutcome, TransportController, RESTART_THRESHOLD_SECS,
};
pub use volume::VolumeState;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::catalog::{Catalog, Playlist, Track};

    /// Build a catalog from `(playlist id, track count)` pairs. Track ids
    /// are `"<playlist>-<index>"`.
    pub fn catalog_of(shape: &[(&str, usize)]) -> Catalog {
        let playlists = shape
            .iter()
            .map(|(id, count)| Playlist {
                id: (*id).to_string(),
                name: format!("Playlist {id}"),
                artist: "Test Artist".to_string(),
                thumbnail: format!("/assets/covers/{id}.jpg"),
                tracks: (0..*count)
                    .map(|i| Track {
                        id: format!("{id}-{i}"),
                        name: format!("Track {i}"),
                        image: format!("/assets/covers/{id}-{i}.jpg"),
                        url: format!("/assets/audio/{id}-{i}.mp3"),
                        duration: 180.0 + i as f64,
                        playlist: (*id).to_string(),
                        is_playing: false,
                    })
                    .collect(),
            })
            .collect();
        Catalog { playlists }
    }
}
