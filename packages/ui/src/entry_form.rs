//! Compose or edit a diary entry.

use api::DiaryApi;
use dioxus::prelude::*;
use store::validation::{validate_entry_text, MAX_ENTRY_CHARS, MIN_ENTRY_CHARS};
use store::{DiaryEntry, EntryId};

use crate::error::FormError;
use crate::notice::use_timed_notice;
use crate::sequence::InFlight;
use crate::session::{use_api, use_config, use_session};

/// Whether the form creates a new entry or rewrites an existing one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EntryMode {
    #[default]
    Create,
    Edit(EntryId),
}

impl EntryMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, EntryMode::Edit(_))
    }
}

/// Validate `text`, then create or update depending on `mode`.
///
/// Nothing is sent when validation fails.
pub async fn submit_entry<A: DiaryApi>(
    api: &A,
    mode: &EntryMode,
    text: &str,
) -> Result<DiaryEntry, FormError> {
    let text = validate_entry_text(text)?;
    let saved = match mode {
        EntryMode::Create => api.create_entry(text).await?,
        EntryMode::Edit(id) => api.update_entry(id, text).await?,
    };
    tracing::info!("Saved entry {}", saved.id);
    Ok(saved)
}

/// Text area plus save button.
///
/// `text` and `mode` are owned by the caller so the entry list can seed an
/// edit. `on_saved` fires after every successful save.
#[component]
pub fn EntryForm(
    text: Signal<String>,
    mode: Signal<EntryMode>,
    on_saved: EventHandler<DiaryEntry>,
) -> Element {
    let client = use_api();
    let session = use_session();
    let config = use_config();

    let mut busy = use_signal(InFlight::default);
    let mut error = use_timed_notice(config.notices.error());
    let mut success = use_timed_notice(config.notices.success());
    let mut response = use_timed_notice(config.notices.response());

    let mut text = text;
    let mut mode = mode;

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !busy.write().try_start() {
            return;
        }
        let client = client.clone();
        let mut session = session.clone();
        let current_mode = mode();
        let current_text = text();
        error.clear();
        spawn(async move {
            let result = submit_entry(&client, &current_mode, &current_text).await;
            busy.write().finish();
            match result {
                Ok(saved) => {
                    text.set(String::new());
                    if current_mode.is_edit() {
                        mode.set(EntryMode::Create);
                    }
                    match saved.auto_response.as_deref() {
                        Some(reply) if !reply.is_empty() => response.show(reply),
                        _ => response.clear(),
                    }
                    let banner = if current_mode.is_edit() {
                        "Entry updated successfully!"
                    } else {
                        "Entry saved successfully!"
                    };
                    success.show(banner);
                    on_saved.call(saved);
                }
                Err(e) => {
                    if let FormError::Api(api_err) = &e {
                        tracing::warn!("Saving entry failed: {}", api_err);
                        session.end_if_unauthorized(api_err);
                    }
                    error.show(e.message());
                }
            }
        });
    };

    let cancel_edit = move |_| {
        mode.set(EntryMode::Create);
        text.set(String::new());
    };

    let is_busy = busy.read().is_busy();
    let editing = mode.read().is_edit();
    let count = text.read().trim().chars().count();
    let heading = if editing {
        "Edit Diary Entry"
    } else {
        "Write a New Diary Entry"
    };
    let button_label = match (is_busy, editing) {
        (true, _) => "Saving...",
        (false, true) => "Update Entry",
        (false, false) => "Save Entry",
    };

    rsx! {
        div {
            class: "entry-form",
            h2 { style: "font-size: 1.25rem; font-weight: 700; margin-bottom: 1rem;", "{heading}" }

            if let Some(msg) = success.get() {
                div {
                    class: "entry-success",
                    style: "padding: 0.625rem; margin-bottom: 0.75rem; background: #f0fdf4; border: 1px solid #bbf7d0; border-radius: 4px; color: #15803d;",
                    "{msg}"
                }
            }

            if let Some(err) = error.get() {
                div {
                    class: "entry-error",
                    style: "padding: 0.625rem; margin-bottom: 0.75rem; background: #fef2f2; border: 1px solid #fecaca; border-radius: 4px; color: #dc2626;",
                    "{err}"
                }
            }

            form {
                onsubmit: handle_submit,
                style: "display: flex; flex-direction: column; gap: 0.75rem;",

                textarea {
                    rows: "8",
                    placeholder: "How was your day?",
                    disabled: is_busy,
                    value: text(),
                    oninput: move |evt: FormEvent| text.set(evt.value()),
                }

                p {
                    style: "font-size: 0.75rem; color: #6b7280;",
                    "{count} / {MAX_ENTRY_CHARS} characters (minimum {MIN_ENTRY_CHARS})"
                }

                div {
                    style: "display: flex; gap: 0.5rem;",
                    button {
                        r#type: "submit",
                        disabled: is_busy,
                        style: "padding: 0.5rem 1rem; background: #0d9488; color: white; border: none; border-radius: 4px;",
                        "{button_label}"
                    }
                    if editing {
                        button {
                            r#type: "button",
                            disabled: is_busy,
                            onclick: cancel_edit,
                            "Cancel"
                        }
                    }
                }
            }

            if let Some(reply) = response.get() {
                div {
                    class: "entry-auto-response",
                    style: "margin-top: 1rem; padding: 1rem; background: #eef2ff; border-radius: 0.5rem;",
                    h3 { style: "font-weight: 600; margin-bottom: 0.5rem;", "Your diary says" }
                    p { "{reply}" }
                }
            }
        }
    }
}
