//! Messages that disappear on their own.
//!
//! A [`TimedNotice`] owns at most one pending clear task. Showing a new
//! message cancels the previous task before starting a fresh one, and the task
//! lives on the owning component's scope, so it is dropped with the component
//! and never writes after unmount.

use std::time::Duration;

use dioxus::prelude::*;

use crate::timers::sleep;

/// The message on screen and which `show` put it there.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    message: Option<String>,
    shown: u64,
}

impl NoticeState {
    /// Put `text` on screen. The returned stamp identifies this showing.
    pub fn show(&mut self, text: String) -> u64 {
        self.shown += 1;
        self.message = Some(text);
        self.shown
    }

    /// Clear the message if it is still the one stamped `stamp`.
    pub fn expire(&mut self, stamp: u64) -> bool {
        if stamp != self.shown || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct TimedNotice {
    state: Signal<NoticeState>,
    timer: Signal<Option<Task>>,
    duration: Duration,
}

/// Create a notice that clears itself `duration` after each [`TimedNotice::show`].
pub fn use_timed_notice(duration: Duration) -> TimedNotice {
    use_hook(|| TimedNotice::new(Signal::new(NoticeState::default()), duration))
}

impl TimedNotice {
    /// Notice writing to `state`. The timer slot belongs to the current scope.
    pub fn new(state: Signal<NoticeState>, duration: Duration) -> Self {
        Self {
            state,
            timer: Signal::new(None),
            duration,
        }
    }

    pub fn show(&mut self, text: impl Into<String>) {
        self.cancel_timer();
        let stamp = self.state.write().show(text.into());

        let mut state = self.state;
        let duration = self.duration;
        let task = spawn(async move {
            sleep(duration).await;
            state.write().expire(stamp);
        });
        self.timer.set(Some(task));
    }

    pub fn clear(&mut self) {
        self.cancel_timer();
        self.state.write().clear();
    }

    pub fn get(&self) -> Option<String> {
        self.state.read().message().map(str::to_string)
    }

    fn cancel_timer(&mut self) {
        if let Some(task) = self.timer.take() {
            task.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{empty_dom, in_app_scope, pump};

    #[test]
    fn test_stale_stamp_does_not_clear_newer_message() {
        let mut state = NoticeState::default();
        let first = state.show("first".to_string());
        let second = state.show("second".to_string());

        assert!(!state.expire(first));
        assert_eq!(state.message(), Some("second"));
        assert!(state.expire(second));
        assert_eq!(state.message(), None);
        assert!(!state.expire(second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_message_clears_after_its_duration() {
        let mut dom = empty_dom();
        let mut notice = in_app_scope(&dom, || {
            TimedNotice::new(Signal::new(NoticeState::default()), Duration::from_secs(5))
        });

        in_app_scope(&dom, || notice.show("Please fill in all required fields."));
        pump(&mut dom).await;

        tokio::time::advance(Duration::from_secs(4)).await;
        pump(&mut dom).await;
        assert_eq!(
            in_app_scope(&dom, || notice.get()).as_deref(),
            Some("Please fill in all required fields.")
        );

        tokio::time::advance(Duration::from_secs(2)).await;
        pump(&mut dom).await;
        assert_eq!(in_app_scope(&dom, || notice.get()), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_message_restarts_the_timer() {
        let mut dom = empty_dom();
        let mut notice = in_app_scope(&dom, || {
            TimedNotice::new(Signal::new(NoticeState::default()), Duration::from_secs(5))
        });

        in_app_scope(&dom, || notice.show("first"));
        pump(&mut dom).await;
        tokio::time::advance(Duration::from_secs(3)).await;

        in_app_scope(&dom, || notice.show("second"));
        pump(&mut dom).await;

        // Past the first deadline, before the second.
        tokio::time::advance(Duration::from_secs(3)).await;
        pump(&mut dom).await;
        assert_eq!(in_app_scope(&dom, || notice.get()).as_deref(), Some("second"));

        tokio::time::advance(Duration::from_secs(3)).await;
        pump(&mut dom).await;
        assert_eq!(in_app_scope(&dom, || notice.get()), None);
    }

    #[derive(Clone, Copy, PartialEq)]
    struct Shared {
        state: Signal<NoticeState>,
        mounted: Signal<bool>,
    }

    fn host() -> Element {
        let shared = use_context_provider(|| Shared {
            state: Signal::new(NoticeState::default()),
            mounted: Signal::new(true),
        });
        let mounted = shared.mounted;
        rsx! {
            if mounted() {
                Saver {}
            }
        }
    }

    /// Shows a notice into the host's state from its own scope.
    #[component]
    fn Saver() -> Element {
        let shared = use_context::<Shared>();
        use_hook(move || {
            let mut notice = TimedNotice::new(shared.state, Duration::from_secs(30));
            notice.show("Your diary says hello");
        });
        rsx! {}
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_runs_while_mounted() {
        let mut dom = VirtualDom::new(host);
        dom.rebuild_in_place();
        pump(&mut dom).await;
        let shared = in_app_scope(&dom, consume_context::<Shared>);

        tokio::time::advance(Duration::from_secs(31)).await;
        pump(&mut dom).await;
        assert_eq!(in_app_scope(&dom, || shared.state.read().message().map(str::to_string)), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_drops_the_pending_timer() {
        let mut dom = VirtualDom::new(host);
        dom.rebuild_in_place();
        pump(&mut dom).await;
        let mut shared = in_app_scope(&dom, consume_context::<Shared>);

        in_app_scope(&dom, || shared.mounted.set(false));
        pump(&mut dom).await;

        tokio::time::advance(Duration::from_secs(31)).await;
        pump(&mut dom).await;

        // The clear task died with the component, so nothing touched the state.
        assert_eq!(
            in_app_scope(&dom, || shared.state.read().message().map(str::to_string)).as_deref(),
            Some("Your diary says hello")
        );
    }
}
