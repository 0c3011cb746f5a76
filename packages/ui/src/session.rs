//! Session context for the UI.
//!
//! The persisted session is exposed through [`SessionContext`]. Login and
//! registration call [`SessionContext::establish`], logout calls
//! [`SessionContext::end`]; nothing else writes. Views read the current user
//! from the context, and the [`api::ApiClient`] provided alongside it reads
//! the token from the same storage on every request.

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::{DiaryConfig, Session, SessionStorage, StoreResult, UserInfo};

/// What the UI currently knows about the signed-in user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl SessionState {
    fn load(storage: &SessionStorage) -> Self {
        Self {
            token: storage.token(),
            user: storage.user(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[derive(Clone, PartialEq)]
pub struct SessionContext {
    state: Signal<SessionState>,
    storage: SessionStorage,
}

impl SessionContext {
    /// Context over `storage`, starting from whatever session it holds.
    ///
    /// Must run inside a component scope, which owns the state signal.
    pub fn new(storage: SessionStorage) -> Self {
        Self {
            state: Signal::new(SessionState::load(&storage)),
            storage,
        }
    }

    /// Persist a fresh session and publish it to the UI.
    pub fn establish(&mut self, session: Session) -> StoreResult<()> {
        self.storage.save(&session)?;
        tracing::info!("Signed in as {}", session.user.display_name());
        self.state.set(SessionState {
            token: Some(session.token),
            user: Some(session.user),
        });
        Ok(())
    }

    /// Forget token and user.
    pub fn end(&mut self) {
        if let Err(e) = self.storage.clear() {
            tracing::error!("Failed to clear stored session: {}", e);
        }
        tracing::info!("Signed out");
        self.state.set(SessionState::default());
    }

    /// End the session when the backend rejected the token.
    ///
    /// Returns whether the session was ended.
    pub fn end_if_unauthorized(&mut self, err: &ApiError) -> bool {
        if !err.is_unauthorized() {
            return false;
        }
        tracing::warn!("Backend rejected the session token");
        self.end();
        true
    }

    /// Whether a token is stored right now.
    ///
    /// Reads the backing storage rather than the cached state, so a token
    /// removed outside this view is noticed at the next check.
    pub fn has_token(&self) -> bool {
        self.storage.token().is_some()
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.read().user.clone()
    }

    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }
}

/// Where an authenticated view should go after the mount-time check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Stay,
    RedirectToLanding,
}

pub fn guard_decision(has_token: bool) -> GuardDecision {
    if has_token {
        GuardDecision::Stay
    } else {
        GuardDecision::RedirectToLanding
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_config() -> DiaryConfig {
    use_context::<DiaryConfig>()
}

/// Check the session once, when the calling component mounts.
///
/// Calls `redirect` and returns `false` if no token is stored. The check is not
/// repeated on later renders.
pub fn use_session_guard(redirect: impl FnOnce() + 'static) -> bool {
    let session = use_session();
    use_hook(move || match guard_decision(session.has_token()) {
        GuardDecision::Stay => true,
        GuardDecision::RedirectToLanding => {
            tracing::info!("No session token, leaving protected view");
            redirect();
            false
        }
    })
}

/// Provides [`SessionContext`], [`ApiClient`] and [`DiaryConfig`] to the tree.
#[component]
pub fn SessionProvider(storage: SessionStorage, config: DiaryConfig, children: Element) -> Element {
    let session_storage = storage.clone();
    use_context_provider(move || SessionContext::new(session_storage));

    let base_url = config.api.base_url.clone();
    let token_source = storage.clone();
    use_context_provider(move || ApiClient::new(base_url, token_source));

    use_context_provider(move || config);

    rsx! {
        {children}
    }
}
