//! Past entries: the shared feed, the selectable list and the detail modal.

use api::{ApiClient, ApiError, DiaryApi};
use chrono::Local;
use dioxus::prelude::*;
use store::{DiaryEntry, EntryId};

use crate::sequence::{RequestSequence, Ticket};
use crate::session::{use_api, use_session, SessionContext};
use crate::views::ModalOverlay;

/// The entry collection and its fetch status.
///
/// Every fetch takes a ticket; a response is applied only if its ticket is
/// still the newest, so a slow response cannot overwrite a newer list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedState {
    entries: Vec<DiaryEntry>,
    loading: bool,
    error: Option<String>,
    sequence: RequestSequence,
}

impl FeedState {
    pub fn begin(&mut self) -> Ticket {
        self.loading = true;
        self.sequence.issue()
    }

    /// Apply a list response. Returns `false` if a newer fetch has started.
    pub fn apply(&mut self, ticket: Ticket, result: Result<Vec<DiaryEntry>, ApiError>) -> bool {
        if !self.sequence.is_current(ticket) {
            tracing::debug!("Dropping stale entry list response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(entries) => {
                tracing::debug!("Loaded {} entries", entries.len());
                self.entries = entries;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("Fetching entries failed: {}", e);
                self.error = Some(e.user_message());
            }
        }
        true
    }

    /// Record a confirmed delete of `id`, started with `ticket`.
    ///
    /// Once the backend accepted the delete the entry leaves the list even if
    /// the refetch failed; that failure is shown as a list error. Only a
    /// failed delete comes back as `Err`.
    pub fn settle_delete(
        &mut self,
        ticket: Ticket,
        id: &EntryId,
        outcome: DeleteOutcome,
    ) -> Result<(), ApiError> {
        match outcome {
            DeleteOutcome::Failed(e) => {
                if self.sequence.is_current(ticket) {
                    self.loading = false;
                }
                Err(e)
            }
            DeleteOutcome::Deleted { refreshed } => {
                self.entries.retain(|entry| &entry.id != id);
                self.apply(ticket, refreshed);
                Ok(())
            }
        }
    }

    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// The shared feed handle used by the list and the charts.
#[derive(Clone, Copy, PartialEq)]
pub struct EntryFeed {
    state: Signal<FeedState>,
}

pub fn use_entry_feed() -> EntryFeed {
    EntryFeed {
        state: use_signal(FeedState::default),
    }
}

impl EntryFeed {
    /// Fetch the full collection, replacing the current one.
    pub fn refresh(&mut self) {
        let client = consume_context::<ApiClient>();
        let mut session = consume_context::<SessionContext>();
        let ticket = self.state.write().begin();
        let mut state = self.state;
        spawn(async move {
            let result = client.list_entries().await;
            if let Err(e) = &result {
                session.end_if_unauthorized(e);
            }
            state.write().apply(ticket, result);
        });
    }

    pub fn entries(&self) -> Vec<DiaryEntry> {
        self.state.read().entries().to_vec()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error().map(str::to_string)
    }
}

/// Two-step delete: nothing is deleted until a requested delete is confirmed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeletePrompt {
    pending: Option<EntryId>,
}

impl DeletePrompt {
    pub fn request(&mut self, id: EntryId) {
        self.pending = Some(id);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the entry awaiting confirmation, if any.
    pub fn confirm(&mut self) -> Option<EntryId> {
        self.pending.take()
    }
}

/// What a confirmed delete did.
#[derive(Debug)]
pub enum DeleteOutcome {
    /// The backend refused the delete; nothing was removed.
    Failed(ApiError),
    /// The entry is gone. `refreshed` is the result of the follow-up fetch.
    Deleted {
        refreshed: Result<Vec<DiaryEntry>, ApiError>,
    },
}

impl DeleteOutcome {
    /// The backend error behind this outcome, from the delete or the refetch.
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            DeleteOutcome::Failed(e) => Some(e),
            DeleteOutcome::Deleted { refreshed } => refreshed.as_ref().err(),
        }
    }
}

/// Delete one entry and, if that worked, fetch the list again.
pub async fn delete_and_refresh<A: DiaryApi>(api: &A, id: &EntryId) -> DeleteOutcome {
    if let Err(e) = api.delete_entry(id).await {
        return DeleteOutcome::Failed(e);
    }
    tracing::info!("Deleted entry {}", id);
    DeleteOutcome::Deleted {
        refreshed: api.list_entries().await,
    }
}

pub fn format_timestamp(entry: &DiaryEntry) -> String {
    entry
        .created_at
        .with_timezone(&Local)
        .format("%b %-d, %Y %-I:%M %p")
        .to_string()
}

fn preview(text: &str) -> String {
    const PREVIEW_CHARS: usize = 80;
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{}…", cut.trim_end())
}

/// Selectable list of entries with a detail modal.
#[component]
pub fn EntryList(feed: EntryFeed, on_edit: EventHandler<DiaryEntry>) -> Element {
    let mut selected = use_signal(|| Option::<DiaryEntry>::None);

    let entries = feed.entries();

    rsx! {
        div {
            class: "entry-list",
            h2 { style: "font-size: 1.25rem; font-weight: 700; margin-bottom: 1rem;", "Your Previous Diaries" }

            if let Some(err) = feed.error() {
                p { style: "color: #dc2626;", "{err}" }
            }

            if feed.is_loading() && entries.is_empty() {
                p { style: "color: #6b7280;", "Loading entries..." }
            } else if entries.is_empty() {
                p { style: "color: #6b7280;", "No diary entries yet. Write your first one!" }
            } else {
                ul {
                    style: "list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.5rem;",
                    for entry in entries {
                        EntryRow {
                            key: "{entry.id}",
                            entry: entry.clone(),
                            on_select: move |e: DiaryEntry| selected.set(Some(e)),
                        }
                    }
                }
            }

            if let Some(entry) = selected() {
                EntryDetail {
                    entry: entry,
                    feed: feed,
                    on_close: move |_| selected.set(None),
                    on_edit: move |e: DiaryEntry| {
                        selected.set(None);
                        on_edit.call(e);
                    },
                }
            }
        }
    }
}

#[component]
fn EntryRow(entry: DiaryEntry, on_select: EventHandler<DiaryEntry>) -> Element {
    let when = format_timestamp(&entry);
    let snippet = preview(&entry.text_entry);
    let clicked = entry.clone();

    rsx! {
        li {
            class: "entry-row",
            style: "padding: 0.75rem; border: 1px solid #e5e7eb; border-radius: 0.375rem; cursor: pointer;",
            onclick: move |_| on_select.call(clicked.clone()),
            div { style: "font-size: 0.75rem; color: #6b7280;", "{when}" }
            div { "{snippet}" }
        }
    }
}

#[component]
fn EntryDetail(
    entry: DiaryEntry,
    feed: EntryFeed,
    on_close: EventHandler<()>,
    on_edit: EventHandler<DiaryEntry>,
) -> Element {
    let client = use_api();
    let session = use_session();
    let mut prompt = use_signal(DeletePrompt::default);
    let mut deleting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut feed = feed;

    let id = entry.id.clone();
    let ask_delete = move |_| prompt.write().request(id.clone());

    let confirm_delete = move |_| {
        let Some(id) = prompt.write().confirm() else {
            return;
        };
        let client = client.clone();
        let mut session = session.clone();
        let ticket = feed.state.write().begin();
        deleting.set(true);
        spawn(async move {
            let outcome = delete_and_refresh(&client, &id).await;
            if let Some(e) = outcome.error() {
                session.end_if_unauthorized(e);
            }
            let settled = feed.state.write().settle_delete(ticket, &id, outcome);
            match settled {
                Ok(()) => on_close.call(()),
                Err(e) => {
                    tracing::warn!("Deleting entry {} failed: {}", id, e);
                    deleting.set(false);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let editable = entry.clone();
    let when = format_timestamp(&entry);
    let score = format!("{:.2}", entry.sentiment_score);

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),

            div { style: "font-size: 0.75rem; color: #6b7280; margin-bottom: 0.5rem;", "{when}" }
            p { style: "white-space: pre-wrap; margin-bottom: 1rem;", "{entry.text_entry}" }
            p { style: "font-size: 0.875rem; color: #374151;", "Sentiment score: {score}" }

            if let Some(reply) = entry.auto_response.clone() {
                div {
                    style: "margin-top: 0.75rem; padding: 0.75rem; background: #eef2ff; border-radius: 0.375rem;",
                    "{reply}"
                }
            }

            if let Some(err) = error() {
                p { style: "color: #dc2626; margin-top: 0.75rem;", "{err}" }
            }

            if prompt.read().is_pending() {
                div {
                    class: "delete-confirm",
                    style: "margin-top: 1rem; display: flex; gap: 0.5rem; align-items: center;",
                    span { "Delete this entry? This cannot be undone." }
                    button { disabled: deleting(), onclick: confirm_delete, "Yes, delete" }
                    button { onclick: move |_| prompt.write().cancel(), "Cancel" }
                }
            } else {
                div {
                    style: "margin-top: 1rem; display: flex; gap: 0.5rem;",
                    button { onclick: move |_| on_edit.call(editable.clone()), "Edit" }
                    button { disabled: deleting(), onclick: ask_delete, "Delete" }
                    button { onclick: move |_| on_close.call(()), "Close" }
                }
            }
        }
    }
}
