//! Domain records shared by every stage of the engine.
//!
//! These are plain snapshots handed in by the caller. The engine only
//! reads them; guest display attributes are carried through untouched.

use std::fmt;

use crate::weights::RelationshipCategory;

/// Unique identifier of a guest within one roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GuestId(String);

impl GuestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GuestId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for GuestId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier of a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TableId(String);

impl TableId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TableId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for TableId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A guest to be seated.
///
/// Only `id` is meaningful to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dietary: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub note: String,
}

impl Guest {
    /// Creates a guest with empty dietary and note attributes.
    pub fn new(id: impl Into<GuestId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dietary: String::new(),
            note: String::new(),
        }
    }

    pub fn with_dietary(mut self, dietary: impl Into<String>) -> Self {
        self.dietary = dietary.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// A capacitated group guests are assigned into.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    pub id: TableId,
    /// Number of seats. Must be positive.
    pub capacity: usize,
}

impl Table {
    pub fn new(id: impl Into<TableId>, capacity: usize) -> Self {
        Self {
            id: id.into(),
            capacity,
        }
    }
}

/// A soft affinity between two guests. The pair is unordered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationshipEdge {
    pub a: GuestId,
    pub b: GuestId,
    pub category: RelationshipCategory,
}

impl RelationshipEdge {
    pub fn new(
        a: impl Into<GuestId>,
        b: impl Into<GuestId>,
        category: RelationshipCategory,
    ) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            category,
        }
    }
}

/// A pairing that should not share a table. The pair is unordered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlacklistEdge {
    pub a: GuestId,
    pub b: GuestId,
}

impl BlacklistEdge {
    pub fn new(a: impl Into<GuestId>, b: impl Into<GuestId>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}
