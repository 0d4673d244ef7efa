//! Keyboard shortcut table: key names to transport/volume actions.
//!
//! Pure mapping only; the document-level listener that feeds it lives in
//! `components::audio_manager`.

/// Volume delta per arrow-key press.
pub const VOLUME_STEP: f64 = 0.05;

/// Seek delta per arrow-key press, in seconds. Deliberately not clamped to
/// the track bounds; the media element tolerates out-of-range positions.
pub const SEEK_STEP_SECS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    VolumeUp,
    VolumeDown,
    SeekForward,
    SeekBackward,
    TogglePlay,
    ToggleShuffle,
    ToggleRepeat,
    NextTrack,
    PreviousTrack,
    ToggleMute,
}

/// Map a `KeyboardEvent::key` name to an action, case-insensitively.
/// "Spacebar" is the legacy spelling some engines still report.
pub fn action_for_key(key: &str) -> Option<ShortcutAction> {
    match key.to_lowercase().as_str() {
        "arrowup" => Some(ShortcutAction::VolumeUp),
        "arrowdown" => Some(ShortcutAction::VolumeDown),
        "arrowright" => Some(ShortcutAction::SeekForward),
        "arrowleft" => Some(ShortcutAction::SeekBackward),
        " " | "spacebar" => Some(ShortcutAction::TogglePlay),
        "s" => Some(ShortcutAction::ToggleShuffle),
        "r" => Some(ShortcutAction::ToggleRepeat),
        "n" => Some(ShortcutAction::NextTrack),
        "p" => Some(ShortcutAction::PreviousTrack),
        "m" => Some(ShortcutAction::ToggleMute),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::VolumeState;

    #[test]
    fn keys_map_case_insensitively() {
        assert_eq!(action_for_key("ArrowUp"), Some(ShortcutAction::VolumeUp));
        assert_eq!(action_for_key("arrowdown"), Some(ShortcutAction::VolumeDown));
        assert_eq!(action_for_key("S"), Some(ShortcutAction::ToggleShuffle));
        assert_eq!(action_for_key("r"), Some(ShortcutAction::ToggleRepeat));
        assert_eq!(action_for_key("N"), Some(ShortcutAction::NextTrack));
        assert_eq!(action_for_key("p"), Some(ShortcutAction::PreviousTrack));
        assert_eq!(action_for_key("M"), Some(ShortcutAction::ToggleMute));
    }

    #[test]
    fn space_and_legacy_spacebar_toggle_play() {
        assert_eq!(action_for_key(" "), Some(ShortcutAction::TogglePlay));
        assert_eq!(action_for_key("Spacebar"), Some(ShortcutAction::TogglePlay));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(action_for_key("Escape"), None);
        assert_eq!(action_for_key("x"), None);
        assert_eq!(action_for_key("Enter"), None);
    }

    #[test]
    fn volume_step_from_ninety_percent_lands_on_ninety_five() {
        let mut volume = VolumeState::default();
        volume.set_volume(0.90);
        volume.set_volume(volume.volume + VOLUME_STEP);
        assert!((volume.volume - 0.95).abs() < 1e-9);
        assert!(!volume.is_muted);
    }
}
