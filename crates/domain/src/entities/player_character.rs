//! Player character snapshot - stats, attributes and inventory

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::item::InventoryItem;

/// An attribute score: either a number ("STR": 14) or text ("Alignment": "CG")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Attribute name → score
pub type AttributeMap = BTreeMap<String, AttributeValue>;

/// Progression details; unknown upstream fields are kept in `extra`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerDetails {
    #[serde(
        default,
        deserialize_with = "crate::common::lenient::optional_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub level: Option<u32>,
    #[serde(
        default,
        deserialize_with = "crate::common::lenient::optional_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub xp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// The player character as last reported by the game master
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub character_class: Option<String>,
    /// Current hit points; the panel measures them against a fixed ceiling.
    /// `null` or a non-number reads as 0.
    #[serde(default, deserialize_with = "crate::common::lenient::f64_or_zero")]
    pub hp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Vec<InventoryItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<PlayerDetails>,
}

impl PlayerState {
    /// Stand-in shown before the game master has reported a character
    ///
    /// # Examples
    ///
    /// ```
    /// use gmvoice_domain::PlayerState;
    ///
    /// let player = PlayerState::placeholder();
    /// assert_eq!(player.name, "Adventurer");
    /// assert_eq!(player.hp, 0.0);
    /// assert!(player.inventory().is_empty());
    /// ```
    pub fn placeholder() -> Self {
        Self {
            name: "Adventurer".to_string(),
            character_class: None,
            hp: 0.0,
            status: Some("Unknown".to_string()),
            attributes: Some(AttributeMap::new()),
            inventory: Some(Vec::new()),
            details: Some(PlayerDetails::default()),
        }
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        self.inventory.as_deref().unwrap_or(&[])
    }

    pub fn level(&self) -> Option<u32> {
        self.details.as_ref().and_then(|d| d.level)
    }

    pub fn xp(&self) -> Option<u64> {
        self.details.as_ref().and_then(|d| d.xp)
    }

    pub fn bio(&self) -> Option<&str> {
        self.details.as_ref().and_then(|d| d.bio.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_player() {
        let player: PlayerState = serde_json::from_str(
            r#"{
                "name": "Rook",
                "class": "Rogue",
                "hp": 20,
                "status": "Wounded",
                "attributes": {"STR": 10, "DEX": 16, "Alignment": "CN"},
                "inventory": [{"name": "Torch", "qty": 2}],
                "details": {"level": 3, "xp": 0, "bio": "Raised by thieves", "hometown": "Eastmarch"}
            }"#,
        )
        .unwrap();

        assert_eq!(player.character_class.as_deref(), Some("Rogue"));
        assert_eq!(player.hp, 20.0);
        assert_eq!(player.inventory().len(), 1);
        assert_eq!(player.level(), Some(3));
        assert_eq!(player.xp(), Some(0));
        assert_eq!(player.bio(), Some("Raised by thieves"));

        let details = player.details.as_ref().unwrap();
        assert_eq!(details.extra.get("hometown"), Some(&serde_json::json!("Eastmarch")));

        let attributes = player.attributes.as_ref().unwrap();
        assert_eq!(attributes.get("DEX").map(ToString::to_string).as_deref(), Some("16"));
        assert_eq!(attributes.get("Alignment"), Some(&AttributeValue::from("CN")));
    }

    #[test]
    fn missing_hp_defaults_to_zero() {
        let player: PlayerState = serde_json::from_str(r#"{"name": "Rook"}"#).unwrap();
        assert_eq!(player.hp, 0.0);
        assert!(player.inventory().is_empty());
        assert_eq!(player.level(), None);
    }

    #[test]
    fn class_is_serialized_under_its_wire_name() {
        let mut player = PlayerState::placeholder();
        player.character_class = Some("Bard".to_string());
        let value = serde_json::to_value(&player).unwrap();
        assert_eq!(value["class"], serde_json::json!("Bard"));
    }

    #[test]
    fn fractional_attribute_keeps_its_text() {
        let value: AttributeValue = serde_json::from_str("1.5").unwrap();
        assert_eq!(value.to_string(), "1.5");
    }
}
