//! Chat Transcript - Ordered list of transcript lines

use dioxus::prelude::*;
use gmvoice_domain::ChatMessage;

use super::chat_entry::ChatEntry;

/// Props for ChatTranscript
#[derive(Props, Clone, PartialEq)]
pub struct ChatTranscriptProps {
    /// Lines in the order they were spoken
    pub messages: Vec<ChatMessage>,
}

#[component]
pub fn ChatTranscript(props: ChatTranscriptProps) -> Element {
    rsx! {
        ul {
            class: "chat-transcript flex flex-col gap-4 list-none m-0 p-4 overflow-y-auto",
            if props.messages.is_empty() {
                li {
                    class: "text-center text-sm italic text-gray-400 py-8",
                    "The story has not begun yet"
                }
            }
            for (index, message) in props.messages.iter().enumerate() {
                ChatEntry {
                    key: "{index}",
                    locale: message.locale.clone(),
                    timestamp: message.timestamp,
                    message: message.message.clone(),
                    message_origin: message.message_origin,
                    name: message.name.clone(),
                    has_been_edited: message.has_been_edited,
                }
            }
        }
    }
}
