//! Quests panel helper functions
//!
//! Display title and expansion key are derived separately:
//! - title: `title` → `name` → "Untitled"
//! - key: `id` → "<list>-<index>"
//!
//! The index-based key moves with the list. If upstream reorders a list
//! between renders, an expanded quest without an id can hand its open state
//! to whichever quest now sits at that index.

use gmvoice_domain::{Quest, QuestList};

pub const UNTITLED_QUEST: &str = "Untitled";

/// Status that is implied by the active list and therefore not badged
pub const ACTIVE_STATUS: &str = "active";

/// Display title for a quest
///
/// # Examples
/// ```
/// use gmvoice_domain::Quest;
/// use gmvoice_player::ui::presentation::helpers::quest_helpers::quest_title;
///
/// assert_eq!(quest_title(&Quest::default()), "Untitled");
/// ```
pub fn quest_title(quest: &Quest) -> String {
    quest
        .title
        .as_deref()
        .or(quest.name.as_deref())
        .unwrap_or(UNTITLED_QUEST)
        .to_string()
}

/// Expansion key: the quest's own id, or one synthesized from list and position
pub fn quest_key(quest: &Quest, list: QuestList, index: usize) -> String {
    match &quest.id {
        Some(id) => id.to_string(),
        None => format!("{}-{}", list.key_prefix(), index),
    }
}

/// Status badge shown on active quests whose status says something new
pub fn status_badge(quest: &Quest) -> Option<&str> {
    quest
        .status
        .as_deref()
        .filter(|status| *status != ACTIVE_STATUS)
}

/// One quest as the panel shows it
#[derive(Debug, Clone, PartialEq)]
pub struct QuestRow {
    pub key: String,
    pub title: String,
    pub description: Option<String>,
    pub status_badge: Option<String>,
}

pub fn quest_rows(quests: &[Quest], list: QuestList) -> Vec<QuestRow> {
    quests
        .iter()
        .enumerate()
        .map(|(index, quest)| QuestRow {
            key: quest_key(quest, list, index),
            title: quest_title(quest),
            description: quest.description.clone(),
            status_badge: status_badge(quest).map(str::to_string),
        })
        .collect()
}

/// Completed-count label in the header, e.g. "2 done"
pub fn done_label(completed: usize) -> String {
    format!("{completed} done")
}
