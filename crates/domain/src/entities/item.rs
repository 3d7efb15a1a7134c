//! Inventory item carried by the player
//!
//! Every field except `name` is optional. A missing field means "not known",
//! which is different from a zero: an item with `weight: 0` still shows a
//! weight row, an item without `weight` does not. A numeric field holding
//! something that is not a number reads as missing.

use serde::{Deserialize, Serialize};

/// One entry of the player's inventory list
///
/// Names are not unique; the list position is the item's identity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    #[serde(
        default,
        alias = "quantity",
        deserialize_with = "crate::common::lenient::optional_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub qty: Option<u32>,
    #[serde(default, alias = "description", skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Condition in percent, 0 (broken) to 100 (pristine)
    #[serde(
        default,
        deserialize_with = "crate::common::lenient::optional_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub durability: Option<f64>,
    /// Weight in pounds
    #[serde(
        default,
        deserialize_with = "crate::common::lenient::optional_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<f64>,
    /// Value in gold pieces
    #[serde(
        default,
        deserialize_with = "crate::common::lenient::optional_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<f64>,
    /// Free-form category (e.g. "weapon", "potion")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    /// Damage expression (e.g. "1d8 slashing")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::common::lenient::optional_i32",
        skip_serializing_if = "Option::is_none"
    )]
    pub armor_class: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<String>>,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_qty(mut self, qty: u32) -> Self {
        self.qty = Some(qty);
        self
    }

    pub fn with_durability(mut self, durability: f64) -> Self {
        self.durability = Some(durability);
        self
    }
}
