//! NPC entity - a non-player character the party has met

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How an NPC currently regards the party
///
/// The three known words are matched exactly. Anything else is kept verbatim
/// in `Other` so the panel can still show it, just without a color treatment.
///
/// # Examples
///
/// ```
/// use gmvoice_domain::Attitude;
///
/// assert_eq!(Attitude::from("hostile"), Attitude::Hostile);
/// assert_eq!(Attitude::from("wary"), Attitude::Other("wary".to_string()));
/// assert_eq!(Attitude::from("wary").as_str(), "wary");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Attitude {
    Friendly,
    Hostile,
    Neutral,
    Other(String),
}

impl Attitude {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Friendly => "friendly",
            Self::Hostile => "hostile",
            Self::Neutral => "neutral",
            Self::Other(raw) => raw,
        }
    }

    /// Returns true for the three attitudes the panel knows how to color
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Attitude {
    fn from(value: &str) -> Self {
        match value {
            "friendly" => Self::Friendly,
            "hostile" => Self::Hostile,
            "neutral" => Self::Neutral,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Attitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Attitude {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Attitude {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

/// A non-player character, keyed by unique name in the snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Npc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attitude: Option<Attitude>,
    /// Absent means alive; only an explicit `false` marks the NPC as fallen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Npc {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive != Some(false)
    }
}
