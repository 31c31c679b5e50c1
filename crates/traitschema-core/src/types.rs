//! Core data structures for the generated schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::Result;

/// A JSON Schema primitive type name
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    /// Catch-all for values with no narrower representation
    Object,
    Bool,
    String,
    Number,
    Array,
    /// Only ever appended for nullable traits
    Null,
}

/// Schema for a single configurable attribute.
///
/// Field order matches sorted key order so the serialized entry is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    pub description: String,

    #[serde(rename = "type")]
    pub types: Vec<Primitive>,
}

impl SchemaEntry {
    /// Create an entry from resolved primitives, appending `null` when the
    /// attribute accepts `None`.
    pub fn new(mut types: Vec<Primitive>, allow_none: bool, description: impl Into<String>) -> Self {
        if allow_none {
            types.push(Primitive::Null);
        }
        Self {
            description: description.into(),
            types,
        }
    }

    /// Whether `null` is an accepted value.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.types.last() == Some(&Primitive::Null)
    }
}

/// Attribute name to entry mapping, always serialized with sorted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    entries: BTreeMap<String, SchemaEntry>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the previous entry for that name if any.
    pub fn insert(&mut self, name: impl Into<String>, entry: SchemaEntry) -> Option<SchemaEntry> {
        self.entries.insert(name.into(), entry)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemaEntry> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attribute names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SchemaEntry)> {
        self.entries.iter()
    }

    /// Render as pretty-printed JSON with 2-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
