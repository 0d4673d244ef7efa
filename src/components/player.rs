use crate::components::{
    play_pause, seek_to, skip_next, skip_previous, use_audio_state, use_playback_position,
    use_player, use_transport, use_volume, Icon,
};
use crate::utils::format_time;
use dioxus::prelude::*;

/// Footer player bar: now-playing info, transport controls, seek bar, and
/// the volume slider. Hidden until a track is selected.
#[component]
pub fn Player() -> Element {
    let player = use_player().0;
    let transport = use_transport().0;
    let volume = use_volume().0;
    let audio_state = use_audio_state();
    let playback_position = use_playback_position().0;

    let state = player();
    let (Some(track), Some(playlist)) = (
        state.selected_track.clone(),
        state.selected_playlist.clone(),
    ) else {
        return rsx! {};
    };

    let is_playing = track.is_playing;
    let shuffle_on = transport().shuffle();
    let repeat_on = transport().repeat();
    let volume_state = volume();

    let current_time = (audio_state.current_time)();
    let element_duration = (audio_state.duration)();
    // Prefer the catalog duration; the element reports NaN/0 until metadata
    // arrives.
    let safe_duration = if track.duration > 0.0 {
        track.duration
    } else {
        element_duration.max(1.0)
    };
    let progress_percent = ((current_time / safe_duration.max(1.0)) * 100.0).clamp(0.0, 100.0);
    let volume_percent = volume_state.volume * 100.0;

    let on_seek_input = {
        let mut playback_position = playback_position;
        let mut current_time_signal = audio_state.current_time;
        move |e: Event<FormData>| {
            if let Ok(value) = e.value().parse::<f64>() {
                let new_time = value.clamp(0.0, safe_duration);
                playback_position.set(new_time);
                current_time_signal.set(new_time);
                seek_to(new_time);
            }
        }
    };

    let on_volume_change = {
        let mut volume = volume;
        move |e: Event<FormData>| {
            if let Ok(val) = e.value().parse::<f64>() {
                volume.write().set_volume((val / 100.0).clamp(0.0, 1.0));
            }
        }
    };

    rsx! {
        footer { class: "w-full shrink-0 rounded-lg px-2 py-3",
            div { class: "relative z-40 flex flex-col items-center justify-between gap-2 lg:flex-row",

                // Now playing info
                div { class: "flex w-full items-center justify-center rounded-xl p-2 lg:w-1/5 lg:justify-start",
                    img {
                        src: "{track.image}",
                        alt: "{track.name}",
                        class: "mr-3 size-10 rounded-md object-cover lg:size-14",
                    }
                    div { class: "flex min-w-0 flex-col",
                        p { class: "truncate text-sm text-white", "{track.name}" }
                        p { class: "truncate text-xs text-gray-400", "{playlist.artist}" }
                    }
                    button {
                        title: "Add to Liked Songs",
                        aria_label: "Add to Liked Songs",
                        class: "ml-4 cursor-pointer text-white/60 transition-colors hover:text-white",
                        Icon { name: "plus".to_string(), class: "size-4".to_string() }
                    }
                }

                // Transport controls and seek bar
                div { class: "flex w-full max-w-lg flex-col items-center gap-1 lg:w-3/5",
                    div { class: "flex items-center gap-5",
                        button {
                            title: if shuffle_on { "Disable shuffle" } else { "Enable shuffle" },
                            class: if shuffle_on { "cursor-pointer text-green-500" } else { "cursor-pointer text-white/60 hover:text-white" },
                            onclick: move |_| {
                                let mut transport = transport;
                                transport.write().toggle_shuffle();
                            },
                            Icon { name: "shuffle".to_string(), class: "size-5".to_string() }
                        }
                        button {
                            title: "Previous",
                            class: "cursor-pointer text-white/60 hover:text-white",
                            onclick: move |_| skip_previous(player, transport),
                            Icon { name: "previous".to_string(), class: "size-5".to_string() }
                        }
                        button {
                            title: if is_playing { "Pause" } else { "Play" },
                            class: "flex size-8 cursor-pointer items-center justify-center rounded-full bg-white text-black transition-transform hover:scale-105",
                            onclick: move |_| play_pause(player, transport),
                            if is_playing {
                                Icon { name: "pause".to_string(), class: "size-4".to_string() }
                            } else {
                                Icon { name: "play".to_string(), class: "size-4".to_string() }
                            }
                        }
                        button {
                            title: "Next",
                            class: "cursor-pointer text-white/60 hover:text-white",
                            onclick: move |_| skip_next(player, transport),
                            Icon { name: "next".to_string(), class: "size-5".to_string() }
                        }
                        button {
                            title: if repeat_on { "Disable repeat" } else { "Enable repeat" },
                            class: if repeat_on { "cursor-pointer text-green-500" } else { "cursor-pointer text-white/60 hover:text-white" },
                            onclick: move |_| {
                                let mut transport = transport;
                                transport.write().toggle_repeat();
                            },
                            Icon { name: "repeat".to_string(), class: "size-5".to_string() }
                        }
                    }

                    div { class: "group flex w-full items-center gap-2 px-4",
                        span { class: "w-10 text-right text-xs text-gray-400", "{format_time(current_time)}" }
                        div { class: "relative flex h-4 w-full items-center",
                            div { class: "progress-track",
                                div {
                                    class: "progress-fill",
                                    style: "width: {progress_percent}%",
                                }
                            }
                            input {
                                r#type: "range",
                                min: "0",
                                max: "{safe_duration}",
                                step: "1",
                                value: "{current_time}",
                                oninput: on_seek_input,
                                class: "range-input z-10 w-full",
                            }
                        }
                        span { class: "w-10 text-xs text-gray-400", "{format_time(safe_duration)}" }
                    }
                }

                // Volume
                div { class: "hidden w-1/5 items-center justify-end gap-2 lg:flex",
                    button {
                        title: if volume_state.is_muted { "Unmute" } else { "Mute" },
                        aria_label: if volume_state.is_muted { "Unmute" } else { "Mute" },
                        class: "cursor-pointer text-white/60 hover:text-white",
                        onclick: move |_| {
                            let mut volume = volume;
                            volume.write().toggle_mute();
                        },
                        if volume_state.is_muted {
                            Icon { name: "mute".to_string(), class: "size-5".to_string() }
                        } else {
                            Icon { name: "volume".to_string(), class: "size-5".to_string() }
                        }
                    }
                    div { class: "group relative flex h-4 w-28 items-center",
                        div { class: "progress-track",
                            div {
                                class: "progress-fill",
                                style: "width: {volume_percent}%",
                            }
                        }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "100",
                            step: "1",
                            value: "{volume_percent}",
                            oninput: on_volume_change,
                            class: "range-input z-10 w-full",
                        }
                    }
                }
            }
        }
    }
}
