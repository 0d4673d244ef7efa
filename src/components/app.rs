//! App shell: owns every playback state container for the lifetime of the
//! app and provides typed handles to them via context. Components never
//! reach for globals; they consume these handles.

use crate::catalog::Catalog;
use crate::components::{
    AudioController, HudOverlay, Navbar, Player, PlaylistDisplay, PlaylistLibrary, TrackDisplay,
};
use crate::playback::{HudState, PlayerState, TransportController, VolumeState};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::playback::HUD_DISMISS_MS;

/// Handle to the playback selection state.
#[derive(Clone, Copy)]
pub struct PlayerSignal(pub Signal<PlayerState>);

/// Handle to the transport state machine.
#[derive(Clone, Copy)]
pub struct TransportSignal(pub Signal<TransportController>);

/// Handle to the volume store.
#[derive(Clone, Copy)]
pub struct VolumeSignal(pub Signal<VolumeState>);

/// Position mirrored out of the media element for the progress UI.
#[derive(Clone, Copy)]
pub struct PlaybackPositionSignal(pub Signal<f64>);

/// Media-element readouts that persist across renders.
#[derive(Clone, Copy)]
pub struct AudioState {
    pub current_time: Signal<f64>,
    pub duration: Signal<f64>,
}

impl AudioState {
    fn new() -> Self {
        Self {
            current_time: Signal::new(0.0),
            duration: Signal::new(0.0),
        }
    }
}

/// HUD handle: shows a message and schedules its own dismissal. Clears are
/// ticketed, so a superseded timer never blanks a newer message.
#[derive(Clone, Copy)]
pub struct HudController {
    state: Signal<HudState>,
}

impl HudController {
    pub fn new(state: Signal<HudState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> Signal<HudState> {
        self.state
    }

    pub fn show(&self, message: impl Into<String>, volume_level: Option<f64>) {
        let mut state = self.state;
        let ticket = state.write().show(message, volume_level);
        #[cfg(target_arch = "wasm32")]
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(HUD_DISMISS_MS).await;
            state.write().clear(ticket);
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = ticket;
    }
}

// Context accessors. Each fails fast when called outside AppShell's scope;
// a missing provider is a programmer error, not a state to limp through.

pub fn use_player() -> PlayerSignal {
    try_consume_context::<PlayerSignal>().expect("use_player must be called under AppShell")
}

pub fn use_transport() -> TransportSignal {
    try_consume_context::<TransportSignal>().expect("use_transport must be called under AppShell")
}

pub fn use_volume() -> VolumeSignal {
    try_consume_context::<VolumeSignal>().expect("use_volume must be called under AppShell")
}

pub fn use_hud() -> HudController {
    try_consume_context::<HudController>().expect("use_hud must be called under AppShell")
}

pub fn use_audio_state() -> AudioState {
    try_consume_context::<AudioState>().expect("use_audio_state must be called under AppShell")
}

pub fn use_playback_position() -> PlaybackPositionSignal {
    try_consume_context::<PlaybackPositionSignal>()
        .expect("use_playback_position must be called under AppShell")
}

#[component]
pub fn AppShell() -> Element {
    let mut player = use_signal(PlayerState::default);
    let transport = use_signal(TransportController::default);
    let volume = use_signal(VolumeState::default);
    let hud_state = use_signal(HudState::default);
    let playback_position = use_signal(|| 0.0f64);
    let audio_state = use_signal(AudioState::new);
    // Shared open/closed state for the mobile playlist display panel.
    let playlist_display_open = use_signal(|| false);

    let hud = HudController::new(hud_state);

    // Provide state via context
    use_context_provider(|| PlayerSignal(player));
    use_context_provider(|| TransportSignal(transport));
    use_context_provider(|| VolumeSignal(volume));
    use_context_provider(|| hud);
    use_context_provider(|| PlaybackPositionSignal(playback_position));
    use_context_provider(|| audio_state());

    // Populate the selection state from the bundled catalog, once.
    use_effect(move || {
        if !player.peek().playlists.is_empty() {
            return;
        }
        match Catalog::bundled() {
            Ok(catalog) => {
                info!(playlists = catalog.playlists.len(), "catalog loaded");
                player.write().load_catalog(catalog);
            }
            Err(err) => warn!("failed to load bundled catalog: {err}"),
        }
    });

    rsx! {
        div { class: "flex h-screen flex-col px-2 text-white",
            Navbar {}
            main { class: "flex min-h-0 flex-1 gap-2",
                PlaylistLibrary { display_open: playlist_display_open }
                PlaylistDisplay { display_open: playlist_display_open }
                TrackDisplay {}
            }
            Player {}
        }
        HudOverlay {}
        AudioController {}
    }
}
