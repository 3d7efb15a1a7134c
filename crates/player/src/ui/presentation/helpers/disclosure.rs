//! Per-key expand/collapse state for list panels

use std::collections::HashSet;

/// Set of expanded keys
///
/// Every key starts collapsed. Toggling one key never affects another.
///
/// # Examples
/// ```
/// use gmvoice_player::ui::presentation::helpers::disclosure::ExpandedKeys;
///
/// let mut expanded = ExpandedKeys::default();
/// assert!(expanded.toggle("Mira"));
/// assert!(expanded.is_expanded("Mira"));
/// assert!(!expanded.toggle("Mira"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpandedKeys {
    open: HashSet<String>,
}

impl ExpandedKeys {
    /// Flip `key` and return whether it is now expanded
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.open.remove(key) {
            false
        } else {
            self.open.insert(key.to_string());
            true
        }
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.open.contains(key)
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}
