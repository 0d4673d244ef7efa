//! Audio manager - keeps the hidden media element in sync with playback
//! state outside of the component render cycle, and owns the global
//! keyboard shortcut listener.
//!
//! Commands flow one way (state -> element: source, volume, play/pause);
//! the only signal flowing back is natural end-of-track, picked up by the
//! polling task and routed into the transport.

use crate::components::{
    use_audio_state, use_hud, use_playback_position, use_player, use_transport, use_volume,
};
use crate::playback::{PlayerState, PreviousOutcome, TransportController};
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::components::HudController;
#[cfg(target_arch = "wasm32")]
use crate::playback::{
    action_for_key, EndOfTrackOutcome, ShortcutAction, VolumeState, SEEK_STEP_SECS, VOLUME_STEP,
};
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::debug;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement, KeyboardEvent};

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "soundstage-audio";

/// How often the element is polled for position, duration, and end-of-track.
#[cfg(target_arch = "wasm32")]
const POLL_INTERVAL_MS: u32 = 200;

/// Initialize the global audio element once.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn get_or_create_audio_element() -> Option<()> {
    None
}

/// Start playback, swallowing the promise. Autoplay policy can reject it;
/// the logical state stays Playing either way.
#[cfg(target_arch = "wasm32")]
fn web_try_play(audio: &HtmlAudioElement) {
    if let Ok(promise) = audio.play() {
        spawn(async move {
            if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                debug!("media element rejected play()");
            }
        });
    }
}

/// Shortcuts stay inactive while the user is typing somewhere editable.
#[cfg(target_arch = "wasm32")]
fn is_editable_shortcut_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element
            .get_attribute("contenteditable")
            .is_some_and(|v| v.to_ascii_lowercase() != "false")
        {
            return true;
        }
        current = element.parent_element();
    }

    false
}

// Public playback utility API consumed by UI components.

/// Seek to a specific position in the current track.
#[cfg(target_arch = "wasm32")]
pub fn seek_to(position: f64) {
    if let Some(audio) = get_or_create_audio_element() {
        audio.set_current_time(position);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn seek_to(_position: f64) {}

/// Get the current playback position.
#[cfg(target_arch = "wasm32")]
pub fn get_current_time() -> f64 {
    get_or_create_audio_element()
        .map(|a| a.current_time())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get_current_time() -> f64 {
    0.0
}

/// Flip play/pause on the selected track and reflect it onto the element
/// right away (the play/pause effect will observe the same state later and
/// no-op).
pub fn play_pause(player: Signal<PlayerState>, transport: Signal<TransportController>) {
    let mut player = player;
    transport.peek().toggle_play(&mut player.write());

    #[cfg(target_arch = "wasm32")]
    if let Some(audio) = get_or_create_audio_element() {
        if player.peek().is_playing() {
            web_try_play(&audio);
        } else {
            let _ = audio.pause();
        }
    }
}

/// Advance to the next track.
pub fn skip_next(player: Signal<PlayerState>, transport: Signal<TransportController>) {
    let mut player = player;
    let mut transport = transport;
    transport.write().next(&mut player.write());
}

/// Go back: restart when far enough in, otherwise pop history or step to
/// the previous index.
pub fn skip_previous(player: Signal<PlayerState>, transport: Signal<TransportController>) {
    let mut player = player;
    let mut transport = transport;
    let position = get_current_time();
    let outcome = transport.write().previous(&mut player.write(), position);
    if outcome == PreviousOutcome::Restarted {
        seek_to(0.0);
    }
}

#[cfg(target_arch = "wasm32")]
fn dispatch_shortcut(
    action: ShortcutAction,
    player: Signal<PlayerState>,
    transport: Signal<TransportController>,
    volume: Signal<VolumeState>,
    hud: HudController,
) {
    let mut transport = transport;
    let mut volume = volume;

    match action {
        ShortcutAction::VolumeUp | ShortcutAction::VolumeDown => {
            let step = if action == ShortcutAction::VolumeUp {
                VOLUME_STEP
            } else {
                -VOLUME_STEP
            };
            let target = (volume.peek().volume + step).clamp(0.0, 1.0);
            // Applied straight to the element as well; the volume effect
            // would get there a beat later.
            if let Some(audio) = get_or_create_audio_element() {
                audio.set_volume(target);
            }
            volume.write().set_volume(target);
            let level = volume.peek().volume;
            hud.show("Volume", Some(level));
        }
        ShortcutAction::SeekForward => {
            if let Some(audio) = get_or_create_audio_element() {
                audio.set_current_time(audio.current_time() + SEEK_STEP_SECS);
            }
            hud.show("Forward 5s", None);
        }
        ShortcutAction::SeekBackward => {
            if let Some(audio) = get_or_create_audio_element() {
                audio.set_current_time(audio.current_time() - SEEK_STEP_SECS);
            }
            hud.show("Backward 5s", None);
        }
        ShortcutAction::TogglePlay => {
            play_pause(player, transport);
            let paused = get_or_create_audio_element()
                .map(|a| a.paused())
                .unwrap_or(true);
            hud.show(if paused { "Paused" } else { "Playing" }, None);
        }
        ShortcutAction::ToggleShuffle => {
            transport.write().toggle_shuffle();
            hud.show("Shuffle Toggled", None);
        }
        ShortcutAction::ToggleRepeat => {
            transport.write().toggle_repeat();
            hud.show("Repeat Toggled", None);
        }
        ShortcutAction::NextTrack => {
            skip_next(player, transport);
            hud.show("Next Track", None);
        }
        ShortcutAction::PreviousTrack => {
            skip_previous(player, transport);
            hud.show("Previous Track", None);
        }
        ShortcutAction::ToggleMute => {
            let muted = volume.write().toggle_mute();
            hud.show(if muted { "Muted" } else { "Unmuted" }, None);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let player = use_player().0;
    let transport = use_transport().0;
    let volume = use_volume().0;
    let hud = use_hud();
    let audio_state = use_audio_state();
    let playback_position = use_playback_position().0;

    let mut last_track_id = use_signal(|| None::<String>);

    // Apply the selected track's source when it changes.
    {
        let mut player = player;
        let volume = volume;
        use_effect(move || {
            let track = player().selected_track.clone();
            let Some(track) = track else {
                if let Some(audio) = get_or_create_audio_element() {
                    let _ = audio.pause();
                    audio.set_src("");
                }
                last_track_id.set(None);
                return;
            };

            if last_track_id.peek().as_deref() == Some(track.id.as_str()) {
                return;
            }
            last_track_id.set(Some(track.id.clone()));

            if let Some(audio) = get_or_create_audio_element() {
                audio.set_src(&track.url);
                audio.set_volume(volume.peek().volume.clamp(0.0, 1.0));
                if track.is_playing {
                    web_try_play(&audio);
                } else {
                    let _ = audio.pause();
                }
            }
        });
    }

    // Handle play/pause state changes.
    {
        let mut player = player;
        use_effect(move || {
            let playing = player()
                .selected_track
                .as_ref()
                .map(|t| t.is_playing)
                .unwrap_or(false);
            if let Some(audio) = get_or_create_audio_element() {
                if playing {
                    if audio.paused() {
                        web_try_play(&audio);
                    }
                } else if !audio.paused() {
                    let _ = audio.pause();
                }
            }
        });
    }

    // Handle volume changes.
    {
        let mut volume = volume;
        use_effect(move || {
            let vol = volume().volume.clamp(0.0, 1.0);
            if let Some(audio) = get_or_create_audio_element() {
                audio.set_volume(vol);
            }
        });
    }

    // One-time setup: keyboard shortcuts plus the polling task that mirrors
    // element state and catches natural end-of-track.
    use_effect(move || {
        let Some(_audio) = get_or_create_audio_element() else {
            return;
        };

        if let Some(doc) = window().and_then(|w| w.document()) {
            let runtime = Runtime::current();
            let key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                let _guard = RuntimeGuard::new(runtime.clone());
                if event.default_prevented() || is_editable_shortcut_target(&event) {
                    return;
                }
                let Some(action) = action_for_key(&event.key()) else {
                    return;
                };
                event.prevent_default();
                dispatch_shortcut(action, player, transport, volume, hud);
            }) as Box<dyn FnMut(KeyboardEvent)>);
            let _ =
                doc.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
            // The listener lives as long as the app does.
            key_cb.forget();
        }

        let mut current_time_signal = audio_state.current_time;
        let mut duration_signal = audio_state.duration;
        let mut playback_pos = playback_position;
        let mut player = player;
        let mut transport = transport;

        spawn(async move {
            let mut last_emit = 0.0f64;
            let mut last_duration = -1.0f64;
            let mut ended_for_track: Option<String> = None;

            loop {
                gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;

                let Some(audio) = get_or_create_audio_element() else {
                    continue;
                };

                let time = audio.current_time();
                if (time - last_emit).abs() >= 0.2 {
                    last_emit = time;
                    current_time_signal.set(time);
                    playback_pos.set(time);
                }

                let dur = audio.duration();
                if !dur.is_nan() && (dur - last_duration).abs() > 0.5 {
                    last_duration = dur;
                    duration_signal.set(dur);
                }

                if audio.ended() {
                    let current_id = player.peek().selected_track.as_ref().map(|t| t.id.clone());
                    if ended_for_track == current_id {
                        continue;
                    }
                    ended_for_track = current_id;

                    let outcome = transport.write().handle_track_end(&mut player.write());
                    if outcome == EndOfTrackOutcome::RestartCurrent {
                        audio.set_current_time(0.0);
                        web_try_play(&audio);
                    }
                } else {
                    ended_for_track = None;
                }
            }
        });
    });

    rsx! {}
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    // No media element off the web; transport still works on state alone.
    let _ = (
        use_player(),
        use_transport(),
        use_volume(),
        use_hud(),
        use_audio_state(),
        use_playback_position(),
    );
    rsx! {}
}
