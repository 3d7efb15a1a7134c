//! Pure presentation helpers.
//!
//! Everything a panel derives from its props lives here so it can be tested
//! without a Dioxus runtime.

pub mod character_helpers;
pub mod chat_helpers;
pub mod disclosure;
pub mod location_helpers;
pub mod npc_helpers;
pub mod quest_helpers;
