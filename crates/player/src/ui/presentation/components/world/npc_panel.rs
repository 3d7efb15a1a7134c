//! NPC Panel - Known NPCs split into the living and the fallen
//!
//! Living NPCs expand to show location and description. Fallen NPCs are
//! listed in a muted block and do not expand.

use dioxus::prelude::*;
use gmvoice_domain::{NamedEntries, Npc};

use crate::presentation::helpers::disclosure::ExpandedKeys;
use crate::presentation::helpers::npc_helpers::{
    attitude_badge, attitude_tone, partition_npcs, roster_summary,
};

/// Props for NpcPanel
#[derive(Props, Clone, PartialEq)]
pub struct NpcPanelProps {
    /// NPC name → record, in snapshot order
    pub npcs: Option<NamedEntries<Npc>>,
}

/// NpcPanel component
#[component]
pub fn NpcPanel(props: NpcPanelProps) -> Element {
    let mut expanded = use_signal(ExpandedKeys::default);

    let partition = partition_npcs(props.npcs.as_ref());
    let summary = roster_summary(&partition);
    let has_fallen = !partition.fallen.is_empty();

    rsx! {
        div {
            class: "npc-panel parchment relative w-64 rounded-lg border-2 border-gray-700 bg-dark-surface/90 p-4 shadow-lg animate-rise-in delay-100",

            div {
                class: "flex items-center justify-between mb-3",
                div {
                    class: "flex items-center gap-2",
                    span { class: "text-amber-400 text-xl", "👥" }
                    h3 { class: "m-0 text-lg font-bold text-white font-serif", "NPCs" }
                }
                div { class: "text-xs text-gray-400 font-mono", "{summary}" }
            }

            div {
                class: "flex flex-col gap-2 max-h-96 overflow-y-auto pr-2",
                if partition.is_empty() {
                    div {
                        class: "text-sm text-gray-400 italic text-center py-4",
                        "No known NPCs"
                    }
                } else {
                    for (index, (name, npc)) in partition.alive.iter().enumerate() {
                        NpcCard {
                            key: "{name}",
                            expanded: expanded.read().is_expanded(name),
                            name: name.clone(),
                            npc: npc.clone(),
                            index: index,
                            on_toggle: move |name: String| {
                                let now_open = expanded.write().toggle(&name);
                                tracing::debug!(npc = %name, expanded = now_open, "Toggled NPC details");
                            },
                        }
                    }

                    if has_fallen {
                        div {
                            class: "pt-2 mt-2 border-t-2 border-gray-700",
                            div {
                                class: "flex items-center gap-2 mb-2 text-gray-400",
                                span { "☠" }
                                span { class: "text-xs font-semibold", "Fallen" }
                            }
                            for (name, _) in partition.fallen.iter() {
                                div {
                                    key: "{name}",
                                    class: "rounded-md border border-gray-800 bg-black/20 p-2 mb-1 opacity-60 animate-fade-in",
                                    div {
                                        class: "flex items-center gap-2",
                                        span { class: "text-xs text-gray-500", "☠" }
                                        span { class: "text-xs text-gray-400 line-through", "{name}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Props for a single living NPC card
#[derive(Props, Clone, PartialEq)]
struct NpcCardProps {
    name: String,
    npc: Npc,
    expanded: bool,
    /// Position in the living list, staggers the entry animation
    index: usize,
    on_toggle: EventHandler<String>,
}

#[component]
fn NpcCard(props: NpcCardProps) -> Element {
    let attitude = attitude_badge(&props.npc);
    let tone_class = attitude
        .and_then(attitude_tone)
        .map(|tone| tone.css_class())
        .unwrap_or("");
    let caret_class = if props.expanded {
        "inline-block transition-transform rotate-180"
    } else {
        "inline-block transition-transform"
    };
    let delay = format!("animation-delay: {}ms;", props.index * 100);
    let toggle_name = props.name.clone();

    rsx! {
        div {
            class: "npc-card rounded-md border border-gray-700 bg-black/40 hover:bg-black/60 p-3 transition-all animate-slide-in",
            style: "{delay}",

            div {
                class: "flex items-start justify-between",
                div {
                    class: "flex-1 min-w-0",
                    div {
                        class: "flex items-center gap-2",
                        span { class: "text-green-500 text-xs shrink-0", "❤" }
                        h4 { class: "m-0 font-semibold text-sm text-white truncate", "{props.name}" }
                    }
                    if let Some(role) = props.npc.role.as_ref() {
                        p { class: "text-xs text-gray-400 mt-1 mb-0", "{role}" }
                    }
                    if let Some(attitude) = attitude {
                        span {
                            class: "inline-block mt-1 text-xs px-2 py-0.5 rounded-full border {tone_class}",
                            "{attitude}"
                        }
                    }
                }
                button {
                    class: "ml-2 text-gray-400 hover:text-white bg-transparent border-0 cursor-pointer shrink-0",
                    onclick: move |_| props.on_toggle.call(toggle_name.clone()),
                    span { class: "{caret_class}", "▾" }
                }
            }

            if props.expanded {
                div {
                    class: "overflow-hidden animate-expand",
                    div {
                        class: "mt-3 pt-3 border-t border-gray-700 flex flex-col gap-1 text-xs",
                        if let Some(location) = props.npc.location.as_ref() {
                            div {
                                class: "flex items-center gap-2 text-gray-400",
                                span { class: "shrink-0", "📍" }
                                span { "{location}" }
                            }
                        }
                        if let Some(description) = props.npc.description.as_ref() {
                            p { class: "m-0 text-gray-400 italic leading-relaxed", "{description}" }
                        }
                    }
                }
            }
        }
    }
}
