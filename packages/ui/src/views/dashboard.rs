use dioxus::prelude::*;
use store::insights::{mood_trend, word_frequency_top};
use store::DiaryEntry;

use crate::charts::{MoodChart, WordCloud};
use crate::entry_form::{EntryForm, EntryMode};
use crate::entry_list::{use_entry_feed, EntryList};
use crate::session::{use_config, use_session};

/// Which panel of the dashboard is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Default,
    ViewDiaries,
    Graphs,
    NewDiary,
}

impl DashboardTab {
    /// Tabs that show the entry collection and so fetch it when selected.
    pub fn needs_entries(self) -> bool {
        matches!(self, DashboardTab::ViewDiaries | DashboardTab::Graphs)
    }
}

/// Authenticated dashboard. `on_logout` fires once the session is gone, whether
/// the user logged out or the backend answered 401.
#[component]
pub fn Dashboard(on_logout: EventHandler<()>) -> Element {
    let session = use_session();
    let config = use_config();

    let mut tab = use_signal(DashboardTab::default);
    let mut feed = use_entry_feed();
    let mut draft = use_signal(String::new);
    let mut mode = use_signal(EntryMode::default);

    let mut select = move |next: DashboardTab| {
        tab.set(next);
        if next.needs_entries() {
            feed.refresh();
        }
    };

    // Fires after logout and after the backend rejects the token.
    let watched = session.clone();
    use_effect(move || {
        if !watched.state().is_authenticated() {
            on_logout.call(());
        }
    });

    let logout = {
        let mut session = session.clone();
        move |_| session.end()
    };

    let start_edit = move |entry: DiaryEntry| {
        draft.set(entry.text_entry.clone());
        mode.set(EntryMode::Edit(entry.id));
        tab.set(DashboardTab::NewDiary);
    };

    let greeting = session
        .user()
        .map(|u| format!("Hi, {}", u.display_name()))
        .unwrap_or_default();

    let entries = feed.entries();
    let trend = mood_trend(&entries);
    let words = word_frequency_top(&entries, config.insights.word_limit());

    let content = match tab() {
        DashboardTab::Default => rsx! {
            p { style: "text-align: center; color: #4b5563;", "Select an option above to get started." }
        },
        DashboardTab::ViewDiaries => rsx! {
            Panel {
                EntryList { feed: feed, on_edit: start_edit }
            }
        },
        DashboardTab::Graphs => rsx! {
            Panel {
                h2 { style: "font-size: 1.25rem; font-weight: 700; margin-bottom: 1rem;", "Emotional Trends" }
                if let Some(err) = feed.error() {
                    p { style: "color: #dc2626;", "{err}" }
                }
                MoodChart { points: trend }
                h3 { style: "font-weight: 600; margin: 1.5rem 0 0.5rem;", "Word Cloud" }
                WordCloud { words: words }
            }
        },
        DashboardTab::NewDiary => rsx! {
            Panel {
                EntryForm {
                    text: draft,
                    mode: mode,
                    on_saved: move |_| feed.refresh(),
                }
            }
        },
    };

    rsx! {
        div {
            class: "dashboard",
            style: "min-height: 100vh; background: #f3f4f6;",

            nav {
                style: "background: white; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 1rem; display: flex; justify-content: space-between; align-items: center;",
                h1 { style: "font-size: 1.5rem; font-weight: 700; color: #1f2937;", "Smart Diary" }
                div {
                    style: "display: flex; gap: 1rem; align-items: center;",
                    span { style: "color: #4b5563;", "{greeting}" }
                    button { onclick: logout, "Logout" }
                }
            }

            div {
                style: "max-width: 72rem; margin: 0 auto; padding: 2rem 1rem;",

                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 2rem;",
                    DashboardCard {
                        title: "View Diaries",
                        description: "See all your previous diary entries.",
                        onclick: move |_| select(DashboardTab::ViewDiaries),
                    }
                    DashboardCard {
                        title: "Graphs",
                        description: "Visualize your emotional trends over time.",
                        onclick: move |_| select(DashboardTab::Graphs),
                    }
                    DashboardCard {
                        title: "New Diary Entry",
                        description: "Write a new journal entry for today.",
                        onclick: move |_| select(DashboardTab::NewDiary),
                    }
                }

                div {
                    style: "margin-top: 2rem;",
                    {content}
                }
            }
        }
    }
}

#[component]
fn DashboardCard(title: String, description: String, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "dashboard-card",
            style: "padding: 1.5rem; background: white; border-radius: 0.5rem; box-shadow: 0 4px 6px rgba(0,0,0,0.1); cursor: pointer;",
            onclick: move |evt| onclick.call(evt),
            h2 { style: "font-size: 1.25rem; font-weight: 700; margin-bottom: 1rem;", "{title}" }
            p { style: "color: #4b5563;", "{description}" }
        }
    }
}

#[component]
fn Panel(children: Element) -> Element {
    rsx! {
        div {
            style: "background: white; padding: 1.5rem; border-radius: 0.5rem; box-shadow: 0 4px 6px rgba(0,0,0,0.1);",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_list_and_graph_tabs_fetch() {
        assert!(DashboardTab::ViewDiaries.needs_entries());
        assert!(DashboardTab::Graphs.needs_entries());
        assert!(!DashboardTab::NewDiary.needs_entries());
        assert!(!DashboardTab::Default.needs_entries());
    }
}
