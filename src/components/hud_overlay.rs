use crate::components::use_hud;
use dioxus::prelude::*;

/// The text pop-up shown when a user performs a keyboard shortcut
/// ("M" -> "Muted"). Volume changes render a level bar instead of text.
#[component]
pub fn HudOverlay() -> Element {
    let hud = use_hud();
    let state = (hud.state())();

    if !state.is_visible() {
        return rsx! {};
    }

    let body = match state.volume_level() {
        Some(level) => {
            let percent = (level * 100.0).clamp(0.0, 100.0);
            let label = percent.round() as i64;
            rsx! {
                div { class: "flex flex-col items-center gap-2 rounded-lg bg-white/10 px-4 py-3 backdrop-blur-md",
                    div { class: "h-2 w-40 overflow-hidden rounded-full bg-white/20",
                        div {
                            class: "h-full bg-white transition-all",
                            style: "width: {percent}%",
                        }
                    }
                    span { class: "text-sm font-medium text-white", "{label}%" }
                }
            }
        }
        None => {
            let message = state.message().unwrap_or_default().to_string();
            rsx! {
                span { class: "rounded-full bg-black/80 px-4 py-2 text-sm font-medium text-white shadow-md",
                    "{message}"
                }
            }
        }
    };

    rsx! {
        div { class: "pointer-events-none fixed inset-0 z-50 flex items-center justify-center",
            {body}
        }
    }
}
