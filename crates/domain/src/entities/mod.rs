//! Snapshot entities - the records each panel renders

mod chat_message;
mod item;
mod location;
mod npc;
mod player_character;
mod quest;

pub use chat_message::{ChatMessage, MessageOrigin};
pub use item::InventoryItem;
pub use location::Location;
pub use npc::{Attitude, Npc};
pub use player_character::{AttributeMap, AttributeValue, PlayerDetails, PlayerState};
pub use quest::{Quest, QuestId, QuestList, QuestLog};
