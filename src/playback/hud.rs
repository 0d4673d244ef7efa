//! Transient HUD state: the pop-up shown for shortcuts and volume changes.

/// How long a HUD message stays on screen.
pub const HUD_DISMISS_MS: u32 = 1500;

/// HUD contents plus a generation counter. Every `show` bumps the
/// generation and returns it as a ticket; a `clear` only takes effect when
/// its ticket is still current, so a superseded timer cannot blank a newer
/// message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HudState {
    message: Option<String>,
    volume_level: Option<f64>,
    generation: u64,
}

impl HudState {
    /// Show a message, replacing whatever was displayed (including a stale
    /// volume level). Returns the ticket the scheduled clear must present.
    pub fn show(&mut self, message: impl Into<String>, volume_level: Option<f64>) -> u64 {
        self.message = Some(message.into());
        self.volume_level = volume_level;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Clear the HUD if `ticket` belongs to the latest `show`.
    pub fn clear(&mut self, ticket: u64) {
        if ticket == self.generation {
            self.message = None;
            self.volume_level = None;
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn volume_level(&self) -> Option<f64> {
        self.volume_level
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some() || self.volume_level.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_clear_hides_everything() {
        let mut hud = HudState::default();
        let ticket = hud.show("Volume", Some(0.8));
        assert_eq!(hud.message(), Some("Volume"));
        assert_eq!(hud.volume_level(), Some(0.8));

        hud.clear(ticket);
        assert!(!hud.is_visible());
        assert_eq!(hud.volume_level(), None);
    }

    #[test]
    fn stale_ticket_does_not_clear_a_newer_message() {
        let mut hud = HudState::default();
        let old = hud.show("Next Track", None);
        let current = hud.show("Previous Track", None);

        hud.clear(old);
        assert_eq!(hud.message(), Some("Previous Track"));

        hud.clear(current);
        assert!(!hud.is_visible());
    }

    #[test]
    fn show_without_level_drops_a_stale_level() {
        let mut hud = HudState::default();
        hud.show("Volume", Some(0.45));
        hud.show("Shuffle Toggled", None);
        assert_eq!(hud.volume_level(), None);
        assert_eq!(hud.message(), Some("Shuffle Toggled"));
    }
}
