//! Location entity - a place the party knows about

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A known location, keyed by its unique name in the snapshot
///
/// Extra upstream fields are kept in `extra` so nothing is lost when a
/// snapshot is re-serialized.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Names of locations reachable from here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovered: Option<bool>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Location {
    /// Paths out of this location, empty when none are known
    pub fn paths(&self) -> &[String] {
        self.paths.as_deref().unwrap_or(&[])
    }
}
