//! Locations panel helper functions

use gmvoice_domain::{Location, NamedEntries};

/// Location keys use underscores; the panel shows spaces instead
///
/// # Examples
/// ```
/// use gmvoice_player::ui::presentation::helpers::location_helpers::display_name;
///
/// assert_eq!(display_name("dark_forest"), "dark forest");
/// assert_eq!(display_name("village"), "village");
/// ```
pub fn display_name(key: &str) -> String {
    key.replace('_', " ")
}

/// One row of the locations panel
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRow {
    /// Unmodified key from the snapshot
    pub key: String,
    pub display_name: String,
    pub is_current: bool,
    pub description: Option<String>,
    /// Reachable locations, already converted for display
    pub paths: Vec<String>,
}

/// Rows in snapshot order; the row whose key equals `current` is marked current
pub fn location_rows(
    locations: Option<&NamedEntries<Location>>,
    current: &str,
) -> Vec<LocationRow> {
    let Some(locations) = locations else {
        return Vec::new();
    };

    locations
        .iter()
        .map(|(key, location)| LocationRow {
            key: key.to_string(),
            display_name: display_name(key),
            is_current: key == current,
            description: location.description.clone(),
            paths: location.paths().iter().map(|p| display_name(p)).collect(),
        })
        .collect()
}

/// Header count, e.g. "3 known"
pub fn known_label(count: usize) -> String {
    format!("{count} known")
}
