use crate::components::use_player;
use dioxus::prelude::*;

/// Right panel: large artwork and details for the active track.
#[component]
pub fn TrackDisplay() -> Element {
    let player = use_player().0;
    let state = player();

    let Some(track) = state.selected_track.clone() else {
        return rsx! {};
    };
    let artist = state
        .selected_playlist
        .as_ref()
        .map(|p| p.artist.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "hidden w-1/4 flex-col gap-4 rounded-lg bg-neutral-900 p-4 xl:flex",
            img {
                src: "{track.image}",
                alt: "{track.name}",
                class: "aspect-square w-full rounded-lg object-cover shadow-lg",
            }
            div { class: "flex flex-col",
                p { class: "truncate text-lg font-semibold text-white", "{track.name}" }
                p { class: "truncate text-sm text-gray-400", "{artist}" }
            }
        }
    }
}
