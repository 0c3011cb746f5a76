use dioxus::prelude::*;

use store::DiaryConfig;
use ui::SessionProvider;
use views::{Dashboard, Home};

mod settings;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let storage = use_hook(ui::make_session_storage);
    let config = use_hook(|| {
        settings::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable settings: {}", e);
            DiaryConfig::default()
        })
    });

    rsx! {
        SessionProvider {
            storage: storage,
            config: config,
            Router::<Route> {}
        }
    }
}
