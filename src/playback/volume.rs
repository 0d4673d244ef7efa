//! Volume state: level, mute, and the remembered level to restore on unmute.

/// Volume container. Invariant: `is_muted` is true exactly when `volume`
/// is zero; every positive `set_volume` refreshes `unmute_volume`.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeState {
    pub volume: f64,
    pub unmute_volume: f64,
    pub is_muted: bool,
}

impl Default for VolumeState {
    fn default() -> Self {
        Self {
            volume: 1.0,
            unmute_volume: 1.0,
            is_muted: false,
        }
    }
}

impl VolumeState {
    /// Set the volume, clamping to `[0, 1]`. Positive values clear mute and
    /// become the new restore level; zero mutes.
    pub fn set_volume(&mut self, v: f64) {
        let clamped = v.clamp(0.0, 1.0);
        self.volume = clamped;
        if clamped > 0.0 {
            self.unmute_volume = clamped;
            self.is_muted = false;
        } else {
            self.is_muted = true;
        }
    }

    /// Flip mute and return the new mute state. Unmuting restores the last
    /// nonzero level, falling back to full volume.
    pub fn toggle_mute(&mut self) -> bool {
        if self.is_muted {
            self.volume = if self.unmute_volume == 0.0 {
                1.0
            } else {
                self.unmute_volume
            };
            self.is_muted = false;
        } else {
            self.unmute_volume = self.volume;
            self.volume = 0.0;
            self.is_muted = true;
        }
        self.is_muted
    }
}
