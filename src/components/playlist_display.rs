use crate::catalog::Track;
use crate::components::{use_player, Icon};
use crate::utils::format_time;
use dioxus::prelude::*;

/// Middle panel: the open playlist's track list. Clicking a row selects
/// that track and starts it.
#[component]
pub fn PlaylistDisplay(display_open: Signal<bool>) -> Element {
    let player = use_player().0;
    let state = player();
    let open = display_open();

    let Some(playlist) = state.selected_playlist.clone() else {
        return rsx! {
            div { class: "hidden flex-1 items-center justify-center rounded-lg bg-neutral-900 lg:flex",
                p { class: "text-gray-400", "Pick a playlist to get started" }
            }
        };
    };
    let track_count = playlist.tracks.len();

    rsx! {
        div {
            class: if open { "flex flex-1 flex-col overflow-hidden rounded-lg bg-neutral-900" } else { "hidden flex-1 flex-col overflow-hidden rounded-lg bg-neutral-900 lg:flex" },

            div { class: "flex items-end justify-between gap-4 p-4",
                div { class: "flex items-end gap-4",
                    img {
                        src: "{playlist.thumbnail}",
                        alt: "{playlist.name}",
                        class: "size-20 rounded-md object-cover shadow-lg md:size-28",
                    }
                    div { class: "flex flex-col",
                        p { class: "text-xs uppercase text-gray-400", "Playlist" }
                        h2 { class: "text-2xl font-bold md:text-4xl", "{playlist.name}" }
                        p { class: "mt-1 text-sm text-gray-400",
                            "{playlist.artist} \u{2022} {track_count} songs"
                        }
                    }
                }
                button {
                    title: "Close",
                    aria_label: "Close playlist display",
                    class: "cursor-pointer text-gray-400 hover:text-white lg:hidden",
                    onclick: move |_| {
                        let mut display_open = display_open;
                        display_open.set(false);
                    },
                    Icon { name: "close".to_string(), class: "size-5".to_string() }
                }
            }

            ul { class: "flex flex-col gap-1 overflow-y-auto px-2 pb-4",
                for (index , track) in playlist.tracks.iter().enumerate() {
                    TrackRow {
                        key: "{track.id}",
                        track: track.clone(),
                        index,
                    }
                }
            }
        }
    }
}

#[component]
fn TrackRow(track: Track, index: usize) -> Element {
    let player = use_player().0;
    let state = player();
    let active = state.is_selected(&track.id);
    let playing = active && state.is_playing();
    let number = index + 1;

    let on_select = {
        let track = track.clone();
        let mut player = player;
        move |_: Event<MouseData>| {
            player.write().select_track(&track);
        }
    };

    rsx! {
        li {
            class: "group flex cursor-pointer items-center justify-between gap-3 rounded-md p-2 transition-colors hover:bg-gray-500/20",
            onclick: on_select,
            div { class: "flex min-w-0 items-center gap-3",
                span { class: "w-5 text-right text-sm text-gray-400",
                    if playing {
                        Icon { name: "volume".to_string(), class: "size-4 text-green-500".to_string() }
                    } else {
                        "{number}"
                    }
                }
                img {
                    src: "{track.image}",
                    alt: "{track.name}",
                    class: "size-10 rounded-sm object-cover",
                }
                p {
                    class: if active { "truncate text-green-500" } else { "truncate text-gray-200" },
                    "{track.name}"
                }
            }
            span { class: "text-sm text-gray-400", "{format_time(track.duration)}" }
        }
    }
}
