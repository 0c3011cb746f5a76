use dioxus::prelude::*;
use ui::{use_session, Landing};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Already signed in: skip the landing page.
    use_hook(move || {
        if session.has_token() {
            nav.replace(Route::Dashboard {});
        }
    });

    rsx! {
        Landing {
            on_authenticated: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}
