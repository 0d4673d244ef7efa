use crate::components::Icon;
use dioxus::prelude::*;

/// Top chrome: logo, home button, the global search bar, and a couple of
/// decorative actions. Purely presentational.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        header { role: "banner", class: "shrink-0 py-2",
            div { class: "relative z-40 flex w-full items-center justify-between gap-2",
                div { class: "flex items-center py-2 sm:px-5",
                    div { class: "flex size-8 items-center justify-center rounded-full bg-green-500 font-bold text-black",
                        "S"
                    }
                }

                div { class: "mx-auto flex w-4/5 max-w-lg items-stretch gap-2 sm:w-3/5",
                    button {
                        title: "Home",
                        aria_label: "Go to home",
                        class: "group hidden min-w-12 cursor-pointer items-center justify-center rounded-full bg-neutral-800 p-2 sm:flex",
                        Icon {
                            name: "home".to_string(),
                            class: "size-6 text-gray-400 transition-colors group-hover:text-white".to_string(),
                        }
                    }

                    div { class: "w-full", role: "search",
                        form {
                            onsubmit: move |e: Event<FormData>| e.prevent_default(),
                            class: "group flex w-full items-center justify-between gap-3 rounded-full bg-neutral-800 p-2 transition-colors hover:bg-neutral-700 sm:p-3",
                            Icon {
                                name: "search".to_string(),
                                class: "size-5 text-gray-400 transition-colors group-hover:text-white".to_string(),
                            }
                            input {
                                r#type: "search",
                                placeholder: "What do you want to play?",
                                class: "w-5/6 border-r border-gray-500 bg-transparent pr-3 text-sm text-gray-200 outline-none md:text-base",
                            }
                        }
                    }
                }

                div { class: "hidden items-center gap-6 sm:flex sm:min-w-60 sm:justify-end",
                    button { class: "group flex cursor-pointer items-center gap-2 transition-transform hover:scale-105",
                        Icon {
                            name: "download".to_string(),
                            class: "size-4 text-gray-400 transition-colors group-hover:text-white".to_string(),
                        }
                        p { class: "text-sm font-semibold text-gray-400 transition-colors group-hover:text-white",
                            "Install App"
                        }
                    }
                    button {
                        title: "What's new",
                        aria_label: "Turn on notifications",
                        class: "cursor-pointer",
                        Icon {
                            name: "bell".to_string(),
                            class: "size-5 text-gray-300 transition-transform hover:scale-105 hover:text-white".to_string(),
                        }
                    }
                }
            }
        }
    }
}
