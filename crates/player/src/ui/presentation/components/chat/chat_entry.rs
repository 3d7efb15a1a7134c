//! Chat Entry - One line of the voice session transcript

use chrono::Local;
use dioxus::prelude::*;
use gmvoice_domain::MessageOrigin;

use crate::presentation::helpers::chat_helpers::{
    chat_timestamps, display_name, message_lines, visible_time,
};

/// Props for ChatEntry
#[derive(Props, Clone, PartialEq)]
pub struct ChatEntryProps {
    /// Locale tag for the timestamp (e.g. "en-US")
    pub locale: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Message body; '\n' becomes a line break
    pub message: String,
    pub message_origin: MessageOrigin,
    /// Sender name for local lines; ignored for the game master
    #[props(default)]
    pub name: Option<String>,
    #[props(default = false)]
    pub has_been_edited: bool,
}

/// ChatEntry component
///
/// Local lines are mirrored to the right; remote lines belong to the game
/// master and keep the parchment styling.
#[component]
pub fn ChatEntry(props: ChatEntryProps) -> Element {
    let is_game_master = props.message_origin == MessageOrigin::Remote;
    let sender = display_name(props.message_origin, props.name.as_deref());
    let origin = props.message_origin.as_str();

    let (title, time_text) = match chat_timestamps(props.timestamp, &props.locale, &Local) {
        Ok(times) => (times.full, visible_time(props.has_been_edited, &times.short)),
        Err(err) => {
            tracing::warn!(error = %err, timestamp = props.timestamp, "Unable to format chat timestamp");
            (String::new(), visible_time(props.has_been_edited, ""))
        }
    };

    let lines = message_lines(&props.message);
    let last_line = lines.len().saturating_sub(1);

    let header_class = if is_game_master {
        "text-gray-400 flex items-center gap-2 text-sm font-medium text-left"
    } else {
        "text-gray-400 flex items-center gap-2 text-sm font-medium flex-row-reverse"
    };
    let sender_class = if is_game_master {
        "flex items-center gap-1.5 font-serif text-amber-400 magic-glow-text"
    } else {
        "flex items-center gap-1.5 font-serif text-blue-400"
    };
    let bubble_class = if is_game_master {
        "max-w-[80%] rounded-2xl px-4 py-3 shadow-md leading-relaxed parchment text-white border-2 border-amber-500/30 mr-auto font-serif italic"
    } else {
        "max-w-[80%] rounded-2xl px-4 py-3 shadow-md leading-relaxed bg-blue-600 text-white ml-auto"
    };

    rsx! {
        li {
            class: "chat-entry group flex w-full flex-col gap-1.5",
            title: "{title}",
            "data-message-origin": "{origin}",

            header {
                class: "{header_class}",
                strong {
                    class: "{sender_class}",
                    span { if is_game_master { "📜" } else { "⚔" } }
                    "{sender}"
                }
                span {
                    class: "font-mono text-xs opacity-0 transition-opacity group-hover:opacity-100",
                    "{time_text}"
                }
            }
            span {
                class: "{bubble_class}",
                for (index, line) in lines.iter().enumerate() {
                    "{line}"
                    if index < last_line {
                        br {}
                    }
                }
            }
        }
    }
}
