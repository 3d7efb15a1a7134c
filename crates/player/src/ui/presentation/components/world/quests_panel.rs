//! Quests Panel - Active and completed quests
//!
//! Active quests expand on click to show their description; completed quests
//! are listed compactly.

use dioxus::prelude::*;
use gmvoice_domain::{QuestList, QuestLog};

use crate::presentation::helpers::disclosure::ExpandedKeys;
use crate::presentation::helpers::quest_helpers::{done_label, quest_rows, QuestRow};

/// Props for QuestsPanel
#[derive(Props, Clone, PartialEq)]
pub struct QuestsPanelProps {
    /// Active/completed lists; each defaults to empty independently
    pub quests: Option<QuestLog>,
}

/// QuestsPanel component
#[component]
pub fn QuestsPanel(props: QuestsPanelProps) -> Element {
    let mut expanded = use_signal(ExpandedKeys::default);

    let log = props.quests.clone().unwrap_or_default();
    let active = quest_rows(log.active(), QuestList::Active);
    let completed = quest_rows(log.completed(), QuestList::Completed);
    let active_count = active.len();
    let done = done_label(completed.len());
    let completed_class = if active.is_empty() {
        ""
    } else {
        "pt-3 border-t-2 border-gray-700"
    };

    rsx! {
        div {
            class: "quests-panel parchment relative w-64 rounded-lg border-2 border-gray-700 bg-dark-surface/90 p-4 shadow-lg animate-rise-in",

            div {
                class: "flex items-center justify-between mb-3",
                div {
                    class: "flex items-center gap-2",
                    span { class: "text-amber-400 text-xl", "📜" }
                    h3 { class: "m-0 text-lg font-bold text-white font-serif", "Quests" }
                }
                div {
                    class: "flex items-center gap-2",
                    if active_count > 0 {
                        span {
                            class: "text-xs px-2 py-1 rounded-full bg-amber-500/20 text-amber-400 font-mono border border-amber-500/30 badge-pulse",
                            "{active_count}"
                        }
                    }
                    span { class: "text-xs text-gray-400 font-mono", "{done}" }
                }
            }

            div {
                class: "flex flex-col gap-3",

                if !active.is_empty() {
                    div {
                        div {
                            class: "flex items-center gap-2 mb-2 text-xs font-semibold text-gray-400",
                            span { class: "text-amber-400", "○" }
                            span { "Active" }
                        }
                        div {
                            class: "flex flex-col gap-2 max-h-60 overflow-y-auto pr-2",
                            for (index, row) in active.iter().enumerate() {
                                ActiveQuestCard {
                                    key: "{row.key}",
                                    expanded: expanded.read().is_expanded(&row.key),
                                    row: row.clone(),
                                    index: index,
                                    on_toggle: move |key: String| {
                                        let now_open = expanded.write().toggle(&key);
                                        tracing::debug!(quest = %key, expanded = now_open, "Toggled quest details");
                                    },
                                }
                            }
                        }
                    }
                }

                if !completed.is_empty() {
                    div {
                        class: "{completed_class}",
                        div {
                            class: "flex items-center gap-2 mb-2 text-xs font-semibold text-gray-400",
                            span { class: "text-green-500", "✓" }
                            span { "Completed" }
                        }
                        div {
                            class: "flex flex-col gap-1 max-h-40 overflow-y-auto pr-2",
                            for row in completed.iter() {
                                div {
                                    key: "{row.key}",
                                    class: "flex items-center gap-2 p-2 rounded-md bg-black/40 border border-gray-800 animate-fade-in",
                                    span { class: "text-green-500 shrink-0", "✓" }
                                    span { class: "text-xs text-white truncate", "{row.title}" }
                                }
                            }
                        }
                    }
                }

                if log.is_empty() {
                    div {
                        class: "text-center py-6 text-sm italic text-gray-400",
                        "No quests yet"
                    }
                }
            }
        }
    }
}

/// Props for one expandable active quest
#[derive(Props, Clone, PartialEq)]
struct ActiveQuestCardProps {
    row: QuestRow,
    expanded: bool,
    index: usize,
    on_toggle: EventHandler<String>,
}

#[component]
fn ActiveQuestCard(props: ActiveQuestCardProps) -> Element {
    let caret_class = if props.expanded {
        "text-gray-400 inline-block transition-transform rotate-180"
    } else {
        "text-gray-400 inline-block transition-transform"
    };
    let delay = format!("animation-delay: {}ms;", props.index * 100);
    let key = props.row.key.clone();

    rsx! {
        div {
            class: "quest-card rounded-md border border-amber-500/30 bg-amber-500/5 hover:bg-amber-500/10 p-3 transition-all cursor-pointer animate-slide-in",
            style: "{delay}",
            onclick: move |_| props.on_toggle.call(key.clone()),

            div {
                class: "flex items-start justify-between gap-2",
                div {
                    class: "flex-1 min-w-0",
                    div {
                        class: "flex items-center gap-2",
                        span { class: "text-amber-400 shrink-0", "○" }
                        h4 { class: "m-0 font-semibold text-sm text-white truncate", "{props.row.title}" }
                    }
                    if let Some(status) = props.row.status_badge.as_ref() {
                        span {
                            class: "inline-block mt-1 text-xs px-2 py-0.5 rounded-full bg-purple-500/20 text-purple-200 border border-purple-500/30",
                            "{status}"
                        }
                    }
                }
                span { class: "{caret_class}", "▾" }
            }

            if props.expanded {
                if let Some(description) = props.row.description.as_ref() {
                    div {
                        class: "overflow-hidden animate-expand",
                        p {
                            class: "text-xs text-gray-400 mt-2 mb-0 pt-2 border-t border-gray-800 leading-relaxed",
                            "{description}"
                        }
                    }
                }
            }
        }
    }
}
