//! Game-state snapshot types.
//!
//! Everything in this crate is a read-only view of state produced upstream by the
//! game master service. The player crate renders it; nothing here mutates it.

extern crate self as gmvoice_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod snapshot;

pub use common::NamedEntries;

pub use entities::{
    Attitude, AttributeMap, AttributeValue, ChatMessage, InventoryItem, Location, MessageOrigin,
    Npc, PlayerDetails, PlayerState, Quest, QuestId, QuestList, QuestLog,
};

pub use error::SnapshotError;
pub use snapshot::{GameSnapshot, DEFAULT_CURRENT_LOCATION};
