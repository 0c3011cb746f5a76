//! In-memory [`DiaryApi`] that records every call, plus helpers for running
//! hooks and tasks inside a headless [`VirtualDom`].

use std::cell::RefCell;
use std::time::Duration;

use api::{ApiError, DiaryApi, LoginRequest, RegisterRequest};
use chrono::{TimeZone, Utc};
use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use store::{DiaryEntry, EntryId, Session, UserInfo};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login(String),
    Register(String),
    List,
    Create(String),
    Update(EntryId, String),
    Delete(EntryId),
}

#[derive(Default)]
pub struct RecordingApi {
    pub calls: RefCell<Vec<Call>>,
    pub entries: RefCell<Vec<DiaryEntry>>,
    pub failure: RefCell<Option<(u16, String)>>,
    pub list_failure: RefCell<Option<(u16, String)>>,
}

pub fn entry(id: i64, text: &str) -> DiaryEntry {
    DiaryEntry {
        id: EntryId::from(id),
        text_entry: text.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        sentiment_score: 0.25,
        auto_response: Some(format!("Thanks for sharing entry {id}.")),
    }
}

impl RecordingApi {
    pub fn with_entries(entries: Vec<DiaryEntry>) -> Self {
        let api = Self::default();
        *api.entries.borrow_mut() = entries;
        api
    }

    pub fn fail_next(&self, status: u16, message: &str) {
        *self.failure.borrow_mut() = Some((status, message.to_string()));
    }

    /// Make the next `list_entries` fail while other calls succeed.
    pub fn fail_next_list(&self, status: u16, message: &str) {
        *self.list_failure.borrow_mut() = Some((status, message.to_string()));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.failure.borrow_mut().take() {
            Some((status, message)) => Err(ApiError::Backend { status, message }),
            None => Ok(()),
        }
    }

    fn session(email: &str, username: Option<&str>) -> Session {
        Session {
            token: format!("token-for-{email}"),
            user: UserInfo {
                id: EntryId::from(1),
                username: username.map(str::to_string),
                email: email.to_string(),
            },
        }
    }
}

impl DiaryApi for RecordingApi {
    async fn login(&self, req: &LoginRequest) -> Result<Session, ApiError> {
        self.record(Call::Login(req.email.clone()))?;
        Ok(Self::session(&req.email, None))
    }

    async fn register(&self, req: &RegisterRequest) -> Result<Session, ApiError> {
        self.record(Call::Register(req.username.clone()))?;
        Ok(Self::session(&req.email, Some(&req.username)))
    }

    async fn list_entries(&self) -> Result<Vec<DiaryEntry>, ApiError> {
        self.record(Call::List)?;
        if let Some((status, message)) = self.list_failure.borrow_mut().take() {
            return Err(ApiError::Backend { status, message });
        }
        Ok(self.entries.borrow().clone())
    }

    async fn create_entry(&self, text: &str) -> Result<DiaryEntry, ApiError> {
        self.record(Call::Create(text.to_string()))?;
        let next = self.entries.borrow().len() as i64 + 1;
        let created = entry(next, text);
        self.entries.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_entry(&self, id: &EntryId, text: &str) -> Result<DiaryEntry, ApiError> {
        self.record(Call::Update(id.clone(), text.to_string()))?;
        let mut entries = self.entries.borrow_mut();
        let existing = entries
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| ApiError::Backend {
                status: 404,
                message: "Entry not found".to_string(),
            })?;
        existing.text_entry = text.to_string();
        Ok(existing.clone())
    }

    async fn delete_entry(&self, id: &EntryId) -> Result<(), ApiError> {
        self.record(Call::Delete(id.clone()))?;
        self.entries.borrow_mut().retain(|e| &e.id != id);
        Ok(())
    }
}

/// A rendered VirtualDom with an empty root component.
pub fn empty_dom() -> VirtualDom {
    fn app() -> Element {
        rsx! {}
    }
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dom
}

/// Run `f` as the root component would, so signals and tasks get an owner.
pub fn in_app_scope<T>(dom: &VirtualDom, f: impl FnOnce() -> T) -> T {
    dom.in_runtime(|| ScopeId::APP.in_runtime(f))
}

/// Let ready tasks run, then re-render whatever they dirtied.
pub async fn pump(dom: &mut VirtualDom) {
    let _ = tokio::time::timeout(Duration::from_millis(1), dom.wait_for_work()).await;
    dom.render_immediate(&mut NoOpMutations);
}
