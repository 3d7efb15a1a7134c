//! Item Detail Modal - overlay describing one inventory item

use dioxus::prelude::*;
use gmvoice_domain::InventoryItem;

use crate::presentation::helpers::character_helpers::{
    durability_bar_width, durability_tone, item_detail_rows, ItemDetailRow,
};

/// Props for the item detail modal
#[derive(Props, Clone, PartialEq)]
pub struct ItemDetailModalProps {
    /// The selected item
    pub item: InventoryItem,
    /// Handler for dismissing the overlay (backdrop or close button)
    pub on_close: EventHandler<()>,
}

/// Item Detail Modal - one row per optional field the item carries
#[component]
pub fn ItemDetailModal(props: ItemDetailModalProps) -> Element {
    let rows: Vec<(&'static str, ItemDetailRow)> = item_detail_rows(&props.item)
        .into_iter()
        .map(|row| (row.label(), row))
        .collect();

    rsx! {
        // Backdrop
        div {
            class: "item-modal-backdrop fixed inset-0 bg-black/60 flex items-center justify-center z-[1000] p-4 animate-fade-in",
            onclick: move |_| props.on_close.call(()),

            // Card (prevent click propagation)
            div {
                class: "item-modal parchment bg-dark-surface border-2 border-gray-700 rounded-lg p-6 max-w-md w-full shadow-2xl animate-pop-in",
                onclick: move |e| e.stop_propagation(),

                // Header
                div {
                    class: "flex items-start justify-between mb-4",
                    div {
                        class: "flex-1",
                        h4 {
                            class: "text-xl font-bold text-white font-serif m-0",
                            "{props.item.name}"
                        }
                        if let Some(item_type) = props.item.item_type.as_ref() {
                            span {
                                class: "inline-block mt-1 text-xs px-2 py-1 rounded bg-amber-500/20 text-amber-400 border border-amber-500/30",
                                "{item_type}"
                            }
                        }
                    }
                    button {
                        class: "text-gray-400 hover:text-white cursor-pointer bg-transparent border-0 text-2xl shrink-0",
                        onclick: move |_| props.on_close.call(()),
                        "✕"
                    }
                }

                if let Some(desc) = props.item.desc.as_ref() {
                    p {
                        class: "text-sm text-gray-400 mb-4 italic leading-relaxed",
                        "{desc}"
                    }
                }

                div {
                    class: "flex flex-col gap-2 text-sm",
                    for (label, row) in rows {
                        ItemDetailLine { key: "{label}", row: row }
                    }
                }
            }
        }
    }
}

#[component]
fn ItemDetailLine(row: ItemDetailRow) -> Element {
    let label = row.label();

    match row {
        ItemDetailRow::Durability(durability) => {
            let tone = durability_tone(durability).css_class();
            let width = durability_bar_width(durability);
            rsx! {
                div {
                    class: "flex justify-between items-center py-1 border-b border-gray-700",
                    span { class: "text-gray-400", "{label}" }
                    div {
                        class: "flex items-center gap-2",
                        div {
                            class: "w-20 h-2 rounded-full bg-black/30 overflow-hidden",
                            div {
                                class: "h-full transition-all {tone}",
                                style: "width: {width}%;",
                            }
                        }
                        span { class: "font-mono font-semibold text-white", "{durability}%" }
                    }
                }
            }
        }
        ItemDetailRow::Properties(properties) => rsx! {
            div {
                class: "py-1",
                span { class: "text-gray-400", "{label}" }
                div {
                    class: "flex flex-wrap gap-1 mt-1",
                    for (index, property) in properties.iter().enumerate() {
                        span {
                            key: "{index}",
                            class: "text-xs px-2 py-1 rounded-full bg-purple-500/20 text-purple-300 border border-purple-500/30",
                            "{property}"
                        }
                    }
                }
            }
        },
        other => {
            let value_class = match &other {
                ItemDetailRow::Value(_) => "font-mono font-semibold text-amber-400",
                ItemDetailRow::Damage(_) => "font-mono font-semibold text-red-500",
                _ => "font-mono font-semibold text-white",
            };
            let value = other.value_text();
            rsx! {
                div {
                    class: "flex justify-between py-1 border-b border-gray-700",
                    span { class: "text-gray-400", "{label}" }
                    span { class: "{value_class}", "{value}" }
                }
            }
        }
    }
}
