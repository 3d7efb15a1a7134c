//! Locations Panel - Known locations with the current one highlighted

use dioxus::prelude::*;
use gmvoice_domain::{Location, NamedEntries, DEFAULT_CURRENT_LOCATION};

use crate::presentation::helpers::location_helpers::{known_label, location_rows};

/// Props for LocationsPanel
#[derive(Props, Clone, PartialEq)]
pub struct LocationsPanelProps {
    /// Location name → record, in snapshot order
    pub locations: Option<NamedEntries<Location>>,
    /// Key of the current location; "village" when absent
    pub current_location: Option<String>,
}

/// Locations Panel component
#[component]
pub fn LocationsPanel(props: LocationsPanelProps) -> Element {
    let current = props
        .current_location
        .as_deref()
        .unwrap_or(DEFAULT_CURRENT_LOCATION);
    let rows = location_rows(props.locations.as_ref(), current);
    let count = known_label(rows.len());

    rsx! {
        div {
            class: "locations-panel parchment relative w-64 rounded-lg border-2 border-gray-700 bg-dark-surface/90 p-4 shadow-lg animate-rise-in delay-200",

            div {
                class: "flex items-center justify-between mb-3",
                div {
                    class: "flex items-center gap-2",
                    span { class: "text-amber-400 text-xl", "🧭" }
                    h3 { class: "m-0 text-lg font-bold text-white font-serif", "Locations" }
                }
                div { class: "text-xs text-gray-400 font-mono", "{count}" }
            }

            div {
                class: "flex flex-col gap-2 max-h-80 overflow-y-auto pr-2",
                if rows.is_empty() {
                    div {
                        class: "text-sm text-gray-400 italic text-center py-4",
                        "No locations discovered"
                    }
                } else {
                    for (index, row) in rows.into_iter().enumerate() {
                        div {
                            key: "{row.key}",
                            class: if row.is_current {
                                "location-row rounded-md border p-3 transition-all border-amber-500/60 bg-amber-500/10 shadow-md animate-slide-in"
                            } else {
                                "location-row rounded-md border p-3 transition-all border-gray-700 bg-black/40 hover:bg-black/60 animate-slide-in"
                            },
                            style: format!("animation-delay: {}ms;", index * 100),

                            div {
                                class: "flex items-start gap-2",
                                span {
                                    class: if row.is_current { "text-amber-400 mt-0.5" } else { "text-gray-500 mt-0.5" },
                                    "📍"
                                }
                                div {
                                    class: "flex-1 min-w-0",
                                    div {
                                        class: "flex items-center justify-between",
                                        h4 {
                                            class: if row.is_current {
                                                "m-0 font-semibold text-sm capitalize text-amber-400"
                                            } else {
                                                "m-0 font-semibold text-sm capitalize text-white"
                                            },
                                            "{row.display_name}"
                                        }
                                        if row.is_current {
                                            span { class: "text-xs text-amber-400 font-mono badge-pulse", "Current" }
                                        }
                                    }
                                    if let Some(description) = row.description.as_ref() {
                                        p {
                                            class: "text-xs text-gray-400 mt-1 mb-0 line-clamp-2",
                                            "{description}"
                                        }
                                    }
                                    if !row.paths.is_empty() {
                                        div {
                                            class: "mt-2 flex flex-wrap gap-1",
                                            for path in row.paths.iter() {
                                                span {
                                                    key: "{path}",
                                                    class: "text-xs px-2 py-0.5 rounded-full bg-purple-500/20 text-purple-200 border border-purple-500/30",
                                                    "{path}"
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
        }
    }
}
