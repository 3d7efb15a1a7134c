//! Client state held in Dioxus signals.

pub mod game_state;

pub use game_state::{append_message, use_game_state, GameState, MAX_TRANSCRIPT_LINES};
