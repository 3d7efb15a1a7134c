//! Player character components.
//!
//! Includes the character panel and the inventory item detail overlay.

pub mod character_panel;
pub mod item_detail_modal;
