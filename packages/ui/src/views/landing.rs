use dioxus::prelude::*;

use crate::auth_form::AuthForm;

/// Unauthenticated landing view: title, tagline and the auth form.
#[component]
pub fn Landing(on_authenticated: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "landing",
            style: "min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; background: linear-gradient(to right, #14b8a6, #6366f1, #2e1065); padding: 1rem;",

            div {
                style: "text-align: center; color: #e5e7eb; padding: 1rem;",
                h1 {
                    style: "font-size: 2.25rem; font-weight: 700; margin: 2rem 0 1rem; color: #99f6e4;",
                    "Smart Personal Diary"
                }
                h3 {
                    style: "font-size: 1.25rem; margin-bottom: 1rem;",
                    "A simple and secure way to keep your thoughts and ideas organized, gain AI-driven insights, and track your mood!"
                }
            }

            AuthForm { on_authenticated: on_authenticated }
        }
    }
}
