//! A single line of the voice-session transcript

use serde::{Deserialize, Serialize};

/// Who produced a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageOrigin {
    /// The player on this device
    Local,
    /// The game master
    Remote,
}

impl MessageOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

/// Transcript line handed to the chat view
///
/// Rendered once per line; it has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// BCP-47 locale tag used to format the timestamp (e.g. "en-US")
    pub locale: String,
    /// Milliseconds since the Unix epoch
    #[serde(deserialize_with = "crate::common::lenient::epoch_millis")]
    pub timestamp: i64,
    /// Message body; embedded '\n' characters are rendered as line breaks
    pub message: String,
    pub message_origin: MessageOrigin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub has_been_edited: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let msg: ChatMessage = serde_json::from_str(
            r#"{
                "locale": "en-US",
                "timestamp": 1700000000000,
                "message": "You enter the tavern.",
                "messageOrigin": "remote",
                "hasBeenEdited": true
            }"#,
        )
        .unwrap();
        assert_eq!(msg.message_origin, MessageOrigin::Remote);
        assert!(msg.has_been_edited);
        assert!(msg.name.is_none());
    }

    #[test]
    fn edited_flag_defaults_to_false() {
        let msg: ChatMessage = serde_json::from_str(
            r#"{"locale": "en-US", "timestamp": 0, "message": "hi", "messageOrigin": "local"}"#,
        )
        .unwrap();
        assert!(!msg.has_been_edited);
        assert_eq!(msg.message_origin.as_str(), "local");
    }

    #[test]
    fn unknown_origin_is_rejected() {
        let result = serde_json::from_str::<ChatMessage>(
            r#"{"locale": "en-US", "timestamp": 0, "message": "hi", "messageOrigin": "narrator"}"#,
        );
        assert!(result.is_err());
    }
}
