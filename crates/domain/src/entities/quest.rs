//! Quest entity and the two-list quest log

use serde::{Deserialize, Serialize};

/// Quest identifier as sent upstream: either a string or a number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestId {
    Text(String),
    Number(serde_json::Number),
}

impl std::fmt::Display for QuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Quest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuestId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Which of the two quest lists an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestList {
    Active,
    Completed,
}

impl QuestList {
    /// Prefix used when a quest has no id of its own
    pub fn key_prefix(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

/// Active and completed quests, partitioned upstream
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuestLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<Vec<Quest>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<Vec<Quest>>,
}

impl QuestLog {
    pub fn active(&self) -> &[Quest] {
        self.active.as_deref().unwrap_or(&[])
    }

    pub fn completed(&self) -> &[Quest] {
        self.completed.as_deref().unwrap_or(&[])
    }

    pub fn list(&self, list: QuestList) -> &[Quest] {
        match list {
            QuestList::Active => self.active(),
            QuestList::Completed => self.completed(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active().is_empty() && self.completed().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quest_id_accepts_strings_and_numbers() {
        let quests: Vec<Quest> =
            serde_json::from_str(r#"[{"id": "q-rats"}, {"id": 42}]"#).unwrap();
        assert_eq!(quests[0].id.as_ref().map(ToString::to_string).as_deref(), Some("q-rats"));
        assert_eq!(quests[1].id.as_ref().map(ToString::to_string).as_deref(), Some("42"));
    }

    #[test]
    fn lists_default_to_empty_independently() {
        let log: QuestLog = serde_json::from_str(r#"{"completed": [{"title": "Done"}]}"#).unwrap();
        assert!(log.active().is_empty());
        assert_eq!(log.completed().len(), 1);
        assert!(!log.is_empty());
        assert!(QuestLog::default().is_empty());
    }

    #[test]
    fn list_selects_by_kind() {
        let log = QuestLog {
            active: Some(vec![Quest::default()]),
            completed: None,
        };
        assert_eq!(log.list(QuestList::Active).len(), 1);
        assert!(log.list(QuestList::Completed).is_empty());
        assert_eq!(QuestList::Completed.key_prefix(), "completed");
    }
}
