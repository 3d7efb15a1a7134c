//! Insertion-ordered name → record mapping.
//!
//! Upstream sends NPCs and locations as JSON objects keyed by name. Panels list
//! them in the order the object was written, so a sorted or hashed map would
//! reorder the roster between renders. This type keeps the object's order; a
//! duplicated key keeps its first position and its last value.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Name-keyed records in the order they were received
///
/// # Examples
///
/// ```
/// use gmvoice_domain::NamedEntries;
///
/// let entries: NamedEntries<u32> =
///     serde_json::from_str(r#"{"zeta": 1, "alpha": 2}"#).unwrap();
/// let names: Vec<&str> = entries.names().collect();
/// assert_eq!(names, vec!["zeta", "alpha"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NamedEntries<T> {
    entries: Vec<(String, T)>,
}

impl<T> NamedEntries<T> {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a record, replacing any record already stored under `name`
    ///
    /// A replaced record keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: T) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Look up a record by name
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Iterate `(name, record)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Iterate names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for NamedEntries<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(String, T)> for NamedEntries<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let mut entries = Self::new();
        for (name, value) in iter {
            entries.insert(name, value);
        }
        entries
    }
}

impl<T> IntoIterator for NamedEntries<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T: Serialize> Serialize for NamedEntries<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct NamedEntriesVisitor<T> {
    marker: PhantomData<fn() -> T>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for NamedEntriesVisitor<T> {
    type Value = NamedEntries<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object mapping names to records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = NamedEntries {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };
        while let Some((name, value)) = access.next_entry::<String, T>()? {
            entries.insert(name, value);
        }
        Ok(entries)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NamedEntries<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(NamedEntriesVisitor {
            marker: PhantomData,
        })
    }
}
