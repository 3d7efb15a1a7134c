//! Game state management using Dioxus signals
//!
//! Holds the latest snapshot from the game master, the voice transcript, and
//! whether the player has left the welcome screen.

use dioxus::prelude::*;
use gmvoice_domain::{ChatMessage, GameSnapshot};

/// Maximum number of transcript lines to keep (oldest are evicted)
pub const MAX_TRANSCRIPT_LINES: usize = 500;

/// Central game state for the player client
#[derive(Clone, Copy)]
pub struct GameState {
    /// Latest snapshot; replaced wholesale on every update
    pub snapshot: Signal<GameSnapshot>,
    /// Transcript lines in spoken order
    pub transcript: Signal<Vec<ChatMessage>>,
    /// Whether the session has been started from the welcome screen
    pub started: Signal<bool>,
}

impl GameState {
    /// Create the state; must be called inside an active Dioxus runtime
    pub fn new(snapshot: GameSnapshot, transcript: Vec<ChatMessage>) -> Self {
        let mut transcript = transcript;
        trim_transcript(&mut transcript, MAX_TRANSCRIPT_LINES);
        Self {
            snapshot: Signal::new(snapshot),
            transcript: Signal::new(transcript),
            started: Signal::new(false),
        }
    }

    pub fn start(&mut self) {
        tracing::info!("Session started from welcome screen");
        self.started.set(true);
    }

    pub fn replace_snapshot(&mut self, snapshot: GameSnapshot) {
        tracing::debug!(
            has_player = snapshot.player.is_some(),
            npcs = snapshot.npcs.as_ref().map_or(0, |n| n.len()),
            "Replacing game snapshot"
        );
        self.snapshot.set(snapshot);
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        append_message(&mut self.transcript.write(), message);
    }
}

/// Hook to access the game state from context
pub fn use_game_state() -> GameState {
    use_context::<GameState>()
}

/// Append a line, evicting the oldest once [`MAX_TRANSCRIPT_LINES`] is exceeded
pub fn append_message(transcript: &mut Vec<ChatMessage>, message: ChatMessage) {
    transcript.push(message);
    trim_transcript(transcript, MAX_TRANSCRIPT_LINES);
}

/// Drop the oldest lines until at most `max` remain
fn trim_transcript(transcript: &mut Vec<ChatMessage>, max: usize) {
    if transcript.len() > max {
        let excess = transcript.len() - max;
        transcript.drain(..excess);
    }
}
