use crate::catalog::{Playlist, Track};
use crate::components::{use_player, Icon};
use crate::utils::clean_input;
use dioxus::prelude::*;

/// Keystrokes are coalesced for this long before the filter applies.
#[cfg(target_arch = "wasm32")]
const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Whether a playlist matches the library filter: by playlist name, by any
/// track name, or by exact track count when the query is a number.
fn matches_query(playlist: &Playlist, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    playlist.name.to_lowercase().contains(query)
        || playlist
            .tracks
            .iter()
            .any(|t| t.name.to_lowercase().contains(query))
        || query.parse::<usize>().is_ok_and(|n| playlist.tracks.len() == n)
}

/// Left panel: the playlist library with filter box. Collapses to a strip
/// of thumbnails while the playlist display panel is open.
#[component]
pub fn PlaylistLibrary(display_open: Signal<bool>) -> Element {
    let player = use_player().0;
    let mut search_open = use_signal(|| false);
    let mut query = use_signal(String::new);
    let mut debounce = use_signal(|| 0u64);

    let state = player();
    let filter = query().to_lowercase();
    let filtered: Vec<Playlist> = state
        .playlists
        .iter()
        .filter(|p| matches_query(p, &filter))
        .cloned()
        .collect();
    let open = display_open();

    // Cancel-and-replace debounce: only the latest keystroke's timer gets
    // to publish the query.
    let on_search_input = move |e: Event<FormData>| {
        let value = e.value();
        let ticket = debounce.peek().wrapping_add(1);
        debounce.set(ticket);
        #[cfg(target_arch = "wasm32")]
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if *debounce.peek() == ticket {
                query.set(clean_input(&value));
            }
        });
        #[cfg(not(target_arch = "wasm32"))]
        query.set(clean_input(&value));
    };

    rsx! {
        div {
            class: if open { "flex w-fit flex-col rounded-lg bg-neutral-900 px-2 py-4 lg:w-[28.5%]" } else { "flex w-full flex-col rounded-lg bg-neutral-900 px-4 py-3 lg:w-[28.5%]" },

            div { class: if open { "hidden lg:block" } else { "" },
                div { class: "flex items-center justify-between px-1",
                    p { class: "font-semibold", "Your Library" }

                    div { class: "flex items-center gap-2",
                        button {
                            title: "Create a playlist",
                            aria_label: "Create a playlist",
                            class: "group flex min-w-12 cursor-pointer items-center justify-between gap-1 rounded-full bg-neutral-800 px-3 py-2",
                            Icon {
                                name: "plus".to_string(),
                                class: "size-4 text-gray-400 transition-colors group-hover:text-white".to_string(),
                            }
                            span { class: "text-sm font-semibold", "Create" }
                        }
                        button {
                            title: "Search your library",
                            aria_label: "Search your library",
                            class: "cursor-pointer",
                            onclick: move |_| {
                                let now_open = !search_open();
                                search_open.set(now_open);
                            },
                            Icon {
                                name: "search".to_string(),
                                class: "size-4 text-gray-400 transition-colors hover:text-white".to_string(),
                            }
                        }
                    }
                }

                if search_open() {
                    input {
                        r#type: "text",
                        placeholder: "Search playlists",
                        oninput: on_search_input,
                        class: "mt-2 w-full rounded-md bg-neutral-800 p-2 text-sm text-gray-200 outline-none",
                    }
                }
            }

            ul { class: "mt-3 flex flex-col gap-2 overflow-y-auto",
                for playlist in filtered {
                    PlaylistRow {
                        key: "{playlist.id}",
                        playlist: playlist.clone(),
                        display_open,
                    }
                }
            }
        }
    }
}

#[component]
fn PlaylistRow(playlist: Playlist, display_open: Signal<bool>) -> Element {
    let player = use_player().0;
    let state = player();
    let is_open_playlist = state
        .selected_playlist
        .as_ref()
        .is_some_and(|p| p.id == playlist.id);
    let playing_here = state.is_playing_from(&playlist);
    let open = display_open();
    let track_count = playlist.tracks.len();

    // Thumbnail click: toggle the active track when it lives here,
    // otherwise start the playlist from the top.
    let on_thumbnail_click = {
        let playlist = playlist.clone();
        let mut player = player;
        move |_: Event<MouseData>| {
            let mut state = player.write();
            let Some(current) = state.selected_track.clone() else {
                return;
            };
            if playlist.contains(&current.id) {
                state.set_selected_track(Track {
                    is_playing: !current.is_playing,
                    ..current
                });
            } else if let Some(first) = playlist.tracks.first() {
                state.select_track(first);
            }
        }
    };

    let on_open_playlist = {
        let playlist_id = playlist.id.clone();
        let mut player = player;
        let mut display_open = display_open;
        move |_: Event<MouseData>| {
            player.write().select_playlist(&playlist_id);
            display_open.set(true);
        }
    };

    let row_class = if is_open_playlist && !open {
        "group flex cursor-pointer items-center justify-between gap-2 rounded-md bg-gray-500/20 p-2 transition-colors"
    } else {
        "group flex cursor-pointer items-center justify-between gap-2 rounded-md p-2 transition-colors hover:bg-gray-500/20"
    };

    rsx! {
        li { class: row_class,
            div { class: "flex w-full items-center gap-3",
                button {
                    title: "{playlist.name}",
                    aria_label: "{playlist.name}",
                    onclick: on_thumbnail_click,
                    class: "relative z-0 block size-12 shrink-0 cursor-pointer overflow-hidden rounded-sm",
                    img {
                        src: "{playlist.thumbnail}",
                        alt: "{playlist.name}",
                        class: "size-full object-cover",
                    }
                    div { class: "absolute inset-0 hidden items-center justify-center bg-black/40 group-hover:flex",
                        if playing_here {
                            Icon { name: "pause".to_string(), class: "size-1/2 text-white".to_string() }
                        } else {
                            Icon { name: "play".to_string(), class: "size-1/2 text-white".to_string() }
                        }
                    }
                }

                div {
                    class: if open { "hidden w-full flex-col items-start lg:flex" } else { "flex w-full flex-col items-start" },
                    onclick: on_open_playlist,
                    p { class: if is_open_playlist { "text-green-500" } else { "text-gray-200" },
                        "{playlist.name}"
                    }
                    p { class: "text-sm text-gray-400", "Playlist \u{2022} {track_count} songs" }
                }
            }

            if playing_here && !open {
                Icon { name: "volume".to_string(), class: "mr-2 size-4 text-green-500".to_string() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::test_support::catalog_of;

    #[test]
    fn filter_matches_name_track_and_count() {
        let catalog = catalog_of(&[("chill", 3)]);
        let playlist = &catalog.playlists[0];

        assert!(matches_query(playlist, ""));
        assert!(matches_query(playlist, "playlist chill"));
        assert!(matches_query(playlist, "track 1"));
        assert!(matches_query(playlist, "3"));
        assert!(!matches_query(playlist, "jazz"));
        assert!(!matches_query(playlist, "7"));
    }
}
