//! This crate contains all shared UI for the workspace.

pub mod auth_form;
pub mod charts;
pub mod entry_form;
pub mod entry_list;
pub mod error;
pub mod notice;
pub mod sequence;
pub mod session;
pub mod views;

mod platform;
mod timers;

#[cfg(test)]
mod testing;

pub use auth_form::{AuthForm, AuthMode};
pub use charts::{MoodChart, WordCloud};
pub use entry_form::{EntryForm, EntryMode};
pub use entry_list::{EntryFeed, EntryList};
pub use error::FormError;
pub use notice::{use_timed_notice, TimedNotice};
pub use platform::make_session_storage;
pub use session::{
    use_api, use_config, use_session, use_session_guard, SessionContext, SessionProvider,
    SessionState,
};
pub use views::{Dashboard, DashboardTab, Landing};
