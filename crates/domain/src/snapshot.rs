//! Game-state snapshot - the whole picture the panels render from
//!
//! A snapshot is parsed once at the boundary. Sections may be missing or `null`;
//! sections with the wrong shape (an array where a name mapping is expected)
//! are rejected here with a [`SnapshotError`] instead of surfacing later as a
//! rendering fault.

use serde::{Deserialize, Serialize};

use crate::common::NamedEntries;
use crate::entities::{Location, Npc, PlayerState, QuestLog};
use crate::error::SnapshotError;

/// Location assumed to be current when upstream does not say
pub const DEFAULT_CURRENT_LOCATION: &str = "village";

/// Point-in-time read of game state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<NamedEntries<Location>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npcs: Option<NamedEntries<Npc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quests: Option<QuestLog>,
    #[serde(
        default,
        alias = "currentLocation",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_location: Option<String>,
}

impl GameSnapshot {
    /// Parse a snapshot from JSON text
    ///
    /// # Examples
    ///
    /// ```
    /// use gmvoice_domain::GameSnapshot;
    ///
    /// let snapshot = GameSnapshot::from_json(r#"{"npcs": {"Mira": {"role": "innkeeper"}}}"#).unwrap();
    /// assert_eq!(snapshot.npcs.map(|n| n.len()), Some(1));
    ///
    /// assert!(GameSnapshot::from_json("[1, 2, 3]").is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a snapshot from an already-decoded JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self, SnapshotError> {
        match &value {
            serde_json::Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(SnapshotError::not_an_object(json_type_name(other))),
        }
    }

    /// Key of the current location, falling back to [`DEFAULT_CURRENT_LOCATION`]
    pub fn current_location_or_default(&self) -> &str {
        self.current_location
            .as_deref()
            .unwrap_or(DEFAULT_CURRENT_LOCATION)
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_SNAPSHOT: &str = r#"{
        "player": {"name": "Rook", "hp": 20, "status": "Wounded"},
        "locations": {
            "village": {"description": "Home", "paths": ["dark_forest"]},
            "dark_forest": {"description": "Tall pines", "paths": ["village"]}
        },
        "npcs": {
            "Mira": {"role": "innkeeper", "attitude": "friendly"},
            "Grask": {"role": "bandit", "attitude": "hostile", "alive": false}
        },
        "quests": {
            "active": [{"id": 1, "title": "Clear the cellar"}],
            "completed": []
        },
        "current_location": "dark_forest"
    }"#;

    #[test]
    fn parses_every_section() {
        let snapshot = GameSnapshot::from_json(FULL_SNAPSHOT).unwrap();
        assert_eq!(snapshot.player.as_ref().map(|p| p.name.as_str()), Some("Rook"));
        assert_eq!(snapshot.locations.as_ref().map(NamedEntries::len), Some(2));
        assert_eq!(snapshot.npcs.as_ref().map(NamedEntries::len), Some(2));
        assert_eq!(snapshot.quests.as_ref().map(|q| q.active().len()), Some(1));
        assert_eq!(snapshot.current_location_or_default(), "dark_forest");
    }

    #[test]
    fn from_value_keeps_mapping_order() {
        let value: serde_json::Value = serde_json::from_str(FULL_SNAPSHOT).unwrap();
        let snapshot = GameSnapshot::from_value(value).unwrap();
        let names: Vec<&str> = snapshot
            .npcs
            .as_ref()
            .map(|n| n.names().collect())
            .unwrap_or_default();
        assert_eq!(names, vec!["Mira", "Grask"]);
    }

    #[test]
    fn empty_object_is_an_empty_snapshot() {
        let snapshot = GameSnapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, GameSnapshot::default());
        assert_eq!(snapshot.current_location_or_default(), DEFAULT_CURRENT_LOCATION);
    }

    #[test]
    fn null_sections_are_absent() {
        let snapshot =
            GameSnapshot::from_json(r#"{"player": null, "npcs": null, "quests": null}"#).unwrap();
        assert!(snapshot.player.is_none());
        assert!(snapshot.npcs.is_none());
        assert!(snapshot.quests.is_none());
    }

    #[test]
    fn camel_case_current_location_is_accepted() {
        let snapshot = GameSnapshot::from_json(r#"{"currentLocation": "tavern"}"#).unwrap();
        assert_eq!(snapshot.current_location_or_default(), "tavern");
    }

    #[test]
    fn array_where_mapping_expected_is_rejected() {
        let err = GameSnapshot::from_json(r#"{"npcs": ["Mira"]}"#).unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
    }

    #[test]
    fn loose_numbers_do_not_reject_the_snapshot() {
        let snapshot = GameSnapshot::from_json(
            r#"{
                "player": {
                    "name": "Rook",
                    "hp": null,
                    "inventory": [
                        {"name": "Arrows", "qty": "2", "weight": 1},
                        {"name": "Shield", "armor_class": 1.5, "weight": "heavy", "value": 10}
                    ],
                    "details": {"level": 2.0, "xp": "a lot"}
                }
            }"#,
        )
        .unwrap();

        let player = snapshot.player.unwrap();
        assert_eq!(player.hp, 0.0);
        assert_eq!(player.level(), Some(2));
        assert_eq!(player.xp(), None);

        let arrows = &player.inventory()[0];
        assert_eq!(arrows.qty, Some(2));
        assert_eq!(arrows.weight, Some(1.0));

        let shield = &player.inventory()[1];
        assert_eq!(shield.armor_class, Some(2));
        assert_eq!(shield.weight, None);
        assert_eq!(shield.value, Some(10.0));
    }

    #[test]
    fn non_object_top_level_is_rejected() {
        let err = GameSnapshot::from_json("\"hello\"").unwrap_err();
        assert_eq!(err, SnapshotError::not_an_object("string"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = GameSnapshot::from_json("{\"player\": ").unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
    }
}
