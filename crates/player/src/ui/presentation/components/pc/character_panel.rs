//! Character Panel - Display player character stats, attributes and inventory

use dioxus::prelude::*;
use gmvoice_domain::{InventoryItem, PlayerState};

use super::item_detail_modal::ItemDetailModal;
use crate::presentation::helpers::character_helpers::{
    durability_bar_width, durability_tone, hp_bar_width, hp_label, is_low_hp, quantity_label,
    selected_item, shows_durability_bar, sorted_attributes, status_tone, ItemSelection,
    XP_BAR_FILL_PERCENT,
};

/// Props for CharacterPanel
#[derive(Props, Clone, PartialEq)]
pub struct CharacterPanelProps {
    /// Player snapshot; a placeholder "Adventurer" is shown when absent
    pub player: Option<PlayerState>,
}

/// One inventory button, precomputed for rendering
struct InventoryRow {
    index: usize,
    item: InventoryItem,
    name: String,
    qty_label: String,
    /// Width and color class of the durability bar, for damaged items only
    durability_bar: Option<(f64, &'static str)>,
}

/// Character Panel component - Shows PC stats and inventory
///
/// Selecting an inventory row opens [`ItemDetailModal`]. Only one item can be
/// selected at a time. The overlay closes by itself when a new snapshot no
/// longer has the selected item at the selected position.
#[component]
pub fn CharacterPanel(props: CharacterPanelProps) -> Element {
    let player = props.player.clone().unwrap_or_else(PlayerState::placeholder);
    let mut selection: Signal<Option<ItemSelection>> = use_signal(|| None);

    let low_hp = is_low_hp(player.hp);
    let hp_width = hp_bar_width(player.hp);
    let hp_text = hp_label(player.hp);
    let hp_value_class = if low_hp {
        "text-red-500 animate-pulse"
    } else {
        "text-white"
    };
    let hp_bar_class = if low_hp {
        "h-full hp-bar rounded-full animate-grow animate-pulse"
    } else {
        "h-full hp-bar rounded-full animate-grow"
    };
    let status_class = status_tone(player.status.as_deref()).css_class();
    let attributes = sorted_attributes(player.attributes.as_ref());

    let inventory: Vec<InventoryRow> = player
        .inventory()
        .iter()
        .enumerate()
        .map(|(index, item)| InventoryRow {
            index,
            item: item.clone(),
            name: item.name.clone(),
            qty_label: quantity_label(item),
            durability_bar: item
                .durability
                .filter(|_| shows_durability_bar(item))
                .map(|d| (durability_bar_width(d), durability_tone(d).css_class())),
        })
        .collect();
    let inventory_count = inventory.len();

    let open_item = selected_item(player.inventory(), selection.read().as_ref()).cloned();

    rsx! {
        div {
            class: "character-panel parchment relative w-72 rounded-lg border-2 border-gray-700 bg-dark-surface/90 p-5 shadow-xl animate-rise-in",

            // Header
            div {
                class: "flex items-start justify-between mb-4 pb-3 border-b border-gray-700",
                div {
                    class: "flex items-center gap-2",
                    span { class: "text-amber-400 text-2xl", "👤" }
                    div {
                        h3 {
                            class: "m-0 text-xl font-bold text-white font-serif",
                            "{player.name}"
                        }
                        if let Some(class_name) = player.character_class.as_ref() {
                            p {
                                class: "m-0 text-sm text-gray-400",
                                "{class_name}"
                            }
                        }
                    }
                }
                if let Some(level) = player.level() {
                    div {
                        class: "text-center px-3 py-1 rounded-full bg-purple-500/20 border border-purple-500/40",
                        span { class: "text-xs text-purple-200 font-bold", "LV {level}" }
                    }
                }
            }

            // Bio
            if let Some(bio) = player.bio() {
                blockquote {
                    class: "mb-4 mx-0 text-xs italic text-gray-400 p-2 rounded bg-black/30 border-l-2 border-amber-500/40 animate-fade-in",
                    "{bio}"
                }
            }

            // HP bar
            div {
                class: "mb-4",
                div {
                    class: "flex items-center justify-between mb-2",
                    div {
                        class: "flex items-center gap-2",
                        span { class: "text-red-500", "❤" }
                        span { class: "text-sm font-semibold text-white", "Health" }
                    }
                    span {
                        class: "text-sm font-bold font-mono transition-colors {hp_value_class}",
                        "{hp_text}"
                    }
                }
                div {
                    class: "h-3 rounded-full bg-black/50 border border-gray-700 overflow-hidden",
                    div {
                        class: "{hp_bar_class}",
                        style: "width: {hp_width}%;",
                    }
                }
                if let Some(status) = player.status.as_ref() {
                    div {
                        class: "mt-1 text-xs text-center",
                        span { class: "font-medium {status_class}", "{status}" }
                    }
                }
            }

            // XP
            if let Some(xp) = player.xp() {
                div {
                    class: "mb-4 animate-fade-in",
                    div {
                        class: "flex justify-between text-xs mb-1",
                        span { class: "text-gray-400", "Experience" }
                        span { class: "font-mono text-white", "{xp} XP" }
                    }
                    div {
                        class: "h-2 rounded-full bg-black/50 border border-gray-700 overflow-hidden",
                        div {
                            class: "h-full xp-bar",
                            style: "width: {XP_BAR_FILL_PERCENT}%;",
                        }
                    }
                }
            }

            // Attributes
            if !attributes.is_empty() {
                div {
                    class: "mb-4",
                    div {
                        class: "flex items-center gap-2 mb-2",
                        span { class: "text-amber-400", "⚔" }
                        h4 { class: "m-0 text-sm font-semibold text-white", "Attributes" }
                    }
                    div {
                        class: "grid grid-cols-3 gap-2",
                        for (name, value) in attributes.iter() {
                            div {
                                key: "{name}",
                                class: "text-center p-2 rounded bg-black/40 border border-gray-700 hover-grow",
                                div { class: "text-xs text-gray-400 truncate", "{name}" }
                                div { class: "text-lg font-bold font-mono text-white", "{value}" }
                            }
                        }
                    }
                }
            }

            // Inventory
            div {
                div {
                    class: "flex items-center gap-2 mb-2",
                    span { class: "text-amber-400", "🎒" }
                    h4 { class: "m-0 text-sm font-semibold text-white", "Inventory" }
                    span { class: "text-xs text-gray-400", "({inventory_count})" }
                }
                if inventory.is_empty() {
                    div {
                        class: "text-center py-4 text-sm italic text-gray-400",
                        "Empty"
                    }
                } else {
                    div {
                        class: "flex flex-col gap-1 max-h-48 overflow-y-auto pr-2",
                        for row in inventory {
                            button {
                                key: "{row.index}",
                                class: "inventory-row w-full flex items-center justify-between p-2 rounded text-left bg-black/40 hover:bg-black/60 border border-gray-700 transition-colors cursor-pointer",
                                onclick: {
                                    let index = row.index;
                                    let item = row.item.clone();
                                    move |_| {
                                        tracing::debug!(index, item = %item.name, "Inventory item selected");
                                        selection.set(Some(ItemSelection { index, item: item.clone() }));
                                    }
                                },
                                div {
                                    class: "flex-1 min-w-0",
                                    span { class: "text-sm font-medium text-white", "{row.name}" }
                                    if let Some((width, tone)) = row.durability_bar {
                                        div {
                                            class: "mt-1 h-1 rounded-full bg-black/50 overflow-hidden",
                                            div {
                                                class: "h-full transition-all {tone}",
                                                style: "width: {width}%;",
                                            }
                                        }
                                    }
                                }
                                span { class: "text-xs font-mono text-gray-400 ml-2", "{row.qty_label}" }
                            }
                        }
                    }
                }
            }
        }

        if let Some(item) = open_item {
            ItemDetailModal {
                item: item,
                on_close: move |_| selection.set(None),
            }
        }
    }
}
