//! World panels: locations, NPCs, quests, and the right-hand panel stack.

pub mod locations_panel;
pub mod npc_panel;
pub mod quests_panel;
pub mod right_panel;
