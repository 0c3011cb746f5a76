use dioxus::prelude::*;
use ui::use_session_guard;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    let allowed = use_session_guard(move || {
        nav.replace(Route::Home {});
    });

    if !allowed {
        return rsx! {};
    }

    rsx! {
        ui::Dashboard {
            on_logout: move |_| {
                nav.replace(Route::Home {});
            },
        }
    }
}
