use dioxus::prelude::*;

use store::DiaryConfig;
use ui::SessionProvider;
use views::{Dashboard, Home};

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

/// Backend address baked in at build time, falling back to the local default.
fn config() -> DiaryConfig {
    match option_env!("DIARY_API_BASE_URL") {
        Some(base_url) => DiaryConfig::new(base_url),
        None => DiaryConfig::default(),
    }
}

#[component]
fn App() -> Element {
    let storage = use_hook(ui::make_session_storage);
    let config = use_hook(config);
    tracing::debug!("Using backend at {}", config.api.base_url);

    rsx! {
        SessionProvider {
            storage: storage,
            config: config,
            Router::<Route> {}
        }
    }
}
