//! Character panel helper functions
//!
//! Pure functions deriving what the character sheet shows from a
//! [`PlayerState`] snapshot, testable without a renderer.
//!
//! Optional item fields are checked for presence, never for truthiness: an
//! item with `value: 0` shows a "0 GP" row, an item without `value` shows none.

use gmvoice_domain::{AttributeMap, InventoryItem};

/// Fixed hit-point ceiling; snapshots carry no maximum of their own
pub const MAX_HP: f64 = 100.0;

/// At or below this many hit points the HP readout switches to its warning style
pub const LOW_HP_THRESHOLD: f64 = 25.0;

/// Fill of the experience bar; snapshots carry no XP-to-next-level figure
pub const XP_BAR_FILL_PERCENT: f64 = 60.0;

/// Status text that gets the healthy color treatment
pub const HEALTHY_STATUS: &str = "Healthy";

/// Hit points as a percentage of [`MAX_HP`], unclamped
///
/// # Examples
/// ```
/// use gmvoice_player::ui::presentation::helpers::character_helpers::hp_percentage;
///
/// assert_eq!(hp_percentage(20.0), 20.0);
/// assert_eq!(hp_percentage(150.0), 150.0);
/// ```
pub fn hp_percentage(hp: f64) -> f64 {
    hp / MAX_HP * 100.0
}

/// Width of the HP bar in percent, clamped to `0..=100`
pub fn hp_bar_width(hp: f64) -> f64 {
    clamp_percent(hp_percentage(hp))
}

pub fn is_low_hp(hp: f64) -> bool {
    hp <= LOW_HP_THRESHOLD
}

/// HP readout, e.g. "20 / 100"
pub fn hp_label(hp: f64) -> String {
    format!("{} / {}", hp, MAX_HP)
}

/// Color treatment of the status line under the HP bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Healthy,
    Afflicted,
}

impl StatusTone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Healthy => "text-green-400",
            Self::Afflicted => "text-red-400",
        }
    }
}

pub fn status_tone(status: Option<&str>) -> StatusTone {
    if status == Some(HEALTHY_STATUS) {
        StatusTone::Healthy
    } else {
        StatusTone::Afflicted
    }
}

/// Attribute grid entries as `(name, display value)`, sorted by name
///
/// The map is ordered by key already; entries come out lexicographically.
pub fn sorted_attributes(attributes: Option<&AttributeMap>) -> Vec<(String, String)> {
    attributes
        .map(|map| {
            map.iter()
                .map(|(name, value)| (name.clone(), value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Inventory row quantity, e.g. "×2"; a missing or zero quantity reads "×1"
///
/// # Examples
/// ```
/// use gmvoice_domain::InventoryItem;
/// use gmvoice_player::ui::presentation::helpers::character_helpers::quantity_label;
///
/// assert_eq!(quantity_label(&InventoryItem::new("Torch").with_qty(2)), "×2");
/// assert_eq!(quantity_label(&InventoryItem::new("Torch")), "×1");
/// ```
pub fn quantity_label(item: &InventoryItem) -> String {
    let qty = item.qty.filter(|q| *q > 0).unwrap_or(1);
    format!("×{qty}")
}

/// Color band of a durability bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurabilityTone {
    Good,
    Worn,
    Broken,
}

impl DurabilityTone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Good => "bg-green-500",
            Self::Worn => "bg-yellow-500",
            Self::Broken => "bg-red-500",
        }
    }
}

pub fn durability_tone(durability: f64) -> DurabilityTone {
    if durability > 50.0 {
        DurabilityTone::Good
    } else if durability > 25.0 {
        DurabilityTone::Worn
    } else {
        DurabilityTone::Broken
    }
}

/// Inventory rows only show a durability bar for damaged items
pub fn shows_durability_bar(item: &InventoryItem) -> bool {
    item.durability.is_some_and(|d| d < 100.0)
}

pub fn durability_bar_width(durability: f64) -> f64 {
    clamp_percent(durability)
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// One labelled row of the item detail overlay
#[derive(Debug, Clone, PartialEq)]
pub enum ItemDetailRow {
    Quantity(u32),
    Durability(f64),
    Weight(f64),
    Value(f64),
    Damage(String),
    ArmorClass(i32),
    Properties(Vec<String>),
}

impl ItemDetailRow {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Quantity(_) => "Quantity",
            Self::Durability(_) => "Durability",
            Self::Weight(_) => "Weight",
            Self::Value(_) => "Value",
            Self::Damage(_) => "Damage",
            Self::ArmorClass(_) => "Armor Class",
            Self::Properties(_) => "Properties",
        }
    }

    pub fn value_text(&self) -> String {
        match self {
            Self::Quantity(qty) => qty.to_string(),
            Self::Durability(durability) => format!("{durability}%"),
            Self::Weight(weight) => format!("{weight} lbs"),
            Self::Value(value) => format!("{value} GP"),
            Self::Damage(damage) => damage.clone(),
            Self::ArmorClass(ac) => format!("{ac:+}"),
            Self::Properties(properties) => properties.join(", "),
        }
    }
}

/// Detail rows for the item overlay, one per optional field that is present
///
/// Rows come out in a fixed order: quantity, durability, weight, value,
/// damage, armor class, properties. An empty property list has no row.
pub fn item_detail_rows(item: &InventoryItem) -> Vec<ItemDetailRow> {
    let mut rows = Vec::new();

    if let Some(qty) = item.qty {
        rows.push(ItemDetailRow::Quantity(qty));
    }
    if let Some(durability) = item.durability {
        rows.push(ItemDetailRow::Durability(durability));
    }
    if let Some(weight) = item.weight {
        rows.push(ItemDetailRow::Weight(weight));
    }
    if let Some(value) = item.value {
        rows.push(ItemDetailRow::Value(value));
    }
    if let Some(damage) = &item.damage {
        rows.push(ItemDetailRow::Damage(damage.clone()));
    }
    if let Some(ac) = item.armor_class {
        rows.push(ItemDetailRow::ArmorClass(ac));
    }
    if let Some(properties) = item.properties.as_ref().filter(|p| !p.is_empty()) {
        rows.push(ItemDetailRow::Properties(properties.clone()));
    }

    rows
}

/// The inventory entry the detail overlay is open for
///
/// Both the position and the item are kept: names repeat, and a replaced
/// inventory must not silently retarget the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSelection {
    pub index: usize,
    pub item: InventoryItem,
}

/// The selected item, if it is still at the selected position
pub fn selected_item<'a>(
    inventory: &'a [InventoryItem],
    selection: Option<&ItemSelection>,
) -> Option<&'a InventoryItem> {
    let selection = selection?;
    inventory
        .get(selection.index)
        .filter(|item| **item == selection.item)
}
