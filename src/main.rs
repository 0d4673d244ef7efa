use dioxus::prelude::*;

mod catalog;
mod components;
mod playback;
mod utils;

use components::AppShell;

const FAVICON: Asset = asset!("/assets/favicon.ico");
const APP_CSS: Asset = asset!("/assets/styling/app.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }

        // Theme color for mobile browsers
        document::Meta { name: "theme-color", content: "#121212" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }

        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
