//! Reusable UI components for the game screen.

pub mod chat;
pub mod pc;
pub mod world;

pub use chat::chat_entry::ChatEntry;
pub use chat::chat_transcript::ChatTranscript;
pub use pc::character_panel::CharacterPanel;
pub use pc::item_detail_modal::ItemDetailModal;
pub use world::locations_panel::LocationsPanel;
pub use world::npc_panel::NpcPanel;
pub use world::quests_panel::QuestsPanel;
pub use world::right_panel::RightPanel;
