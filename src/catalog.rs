//! Bundled music catalog: the static playlist data the app boots from.
//!
//! The catalog ships as JSON inside the binary and is parsed exactly once.
//! Everything downstream (selection, transport, the library panel) works on
//! the `Playlist`/`Track` records defined here.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUNDLED_CATALOG_JSON: &str = include_str!("../assets/playlists.json");

static BUNDLED_CATALOG: Lazy<Result<Catalog, CatalogError>> =
    Lazy::new(|| Catalog::from_json(BUNDLED_CATALOG_JSON));

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no playlists")]
    Empty,
}

/// A single playable item. `id` is the stable identity used everywhere a
/// track is compared against the active selection; `name` is display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub image: String,
    pub url: String,
    #[serde(default)]
    pub duration: f64,
    /// Id of the playlist this track belongs to.
    pub playlist: String,
    /// Only meaningful on the currently selected track; selection always
    /// sets it explicitly.
    #[serde(default)]
    pub is_playing: bool,
}

/// An ordered, named collection of tracks. Track order defines what
/// "next" and "previous" mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub thumbnail: String,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn contains(&self, track_id: &str) -> bool {
        self.tracks.iter().any(|t| t.id == track_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub playlists: Vec<Playlist>,
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        if catalog.playlists.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    /// The catalog baked into the binary, parsed on first access.
    pub fn bundled() -> Result<&'static Catalog, &'static CatalogError> {
        BUNDLED_CATALOG.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses() {
        let catalog = Catalog::bundled().expect("bundled catalog is valid");
        assert!(!catalog.playlists.is_empty());
        for playlist in &catalog.playlists {
            assert!(!playlist.tracks.is_empty(), "{} has no tracks", playlist.id);
            for track in &playlist.tracks {
                assert_eq!(track.playlist, playlist.id);
                assert!(track.duration > 0.0);
                assert!(!track.is_playing);
            }
        }
    }

    #[test]
    fn track_ids_are_unique() {
        let catalog = Catalog::bundled().unwrap();
        let mut ids: Vec<&str> = catalog
            .playlists
            .iter()
            .flat_map(|p| p.tracks.iter().map(|t| t.id.as_str()))
            .collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(before, ids.len());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = Catalog::from_json(r#"{"playlists": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
