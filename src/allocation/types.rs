//! Allocation inputs and outputs.

use crate::affinity::BuildStats;
use crate::types::{BlacklistEdge, Guest, GuestId, RelationshipEdge, Table, TableId};

/// A full snapshot of one seating problem.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatingProblem {
    /// Roster. Order defines matrix indices and tie-breaking.
    pub guests: Vec<Guest>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub relationships: Vec<RelationshipEdge>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub blacklist: Vec<BlacklistEdge>,

    /// Tables in scan order. Earlier tables win score ties.
    pub tables: Vec<Table>,
}

impl SeatingProblem {
    pub fn new(guests: Vec<Guest>, tables: Vec<Table>) -> Self {
        Self {
            guests,
            relationships: Vec::new(),
            blacklist: Vec::new(),
            tables,
        }
    }

    pub fn with_relationships(mut self, relationships: Vec<RelationshipEdge>) -> Self {
        self.relationships = relationships;
        self
    }

    pub fn with_blacklist(mut self, blacklist: Vec<BlacklistEdge>) -> Self {
        self.blacklist = blacklist;
        self
    }

    /// Sum of all table capacities, saturating at `usize::MAX`.
    pub fn total_capacity(&self) -> usize {
        self.tables
            .iter()
            .fold(0usize, |acc, t| acc.saturating_add(t.capacity))
    }
}

/// A roster entry tagged with the table it was seated at.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatedGuest {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub guest: Guest,
    pub table_id: TableId,
}

/// Guests assigned to one table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableAssignment {
    pub table_id: TableId,
    pub capacity: usize,
    /// Guests in the order they were seated.
    pub guests: Vec<SeatedGuest>,
}

impl TableAssignment {
    /// Ids of the seated guests, in seating order.
    pub fn guest_ids(&self) -> impl Iterator<Item = &GuestId> {
        self.guests.iter().map(|s| &s.guest.id)
    }

    pub fn free_seats(&self) -> usize {
        self.capacity.saturating_sub(self.guests.len())
    }

    pub fn is_full(&self) -> bool {
        self.guests.len() >= self.capacity
    }
}

/// Result of a seating run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatingPlan {
    /// One entry per input table, in input order.
    pub tables: Vec<TableAssignment>,

    /// Sum of pairwise weights over guests sharing a table.
    pub affinity_score: f64,

    /// Blacklisted pairs that capacity forced onto the same table.
    pub forced_exclusions: Vec<(GuestId, GuestId)>,

    /// How the input edges were resolved.
    pub build_stats: BuildStats,
}

impl SeatingPlan {
    /// Table a guest was assigned to.
    pub fn table_of(&self, guest: &GuestId) -> Option<&TableId> {
        self.tables
            .iter()
            .find(|t| t.guest_ids().any(|id| id == guest))
            .map(|t| &t.table_id)
    }

    /// Assignment for a table id.
    pub fn assignment(&self, table: &TableId) -> Option<&TableAssignment> {
        self.tables.iter().find(|t| &t.table_id == table)
    }

    /// Total number of seated guests.
    pub fn assigned_count(&self) -> usize {
        self.tables.iter().map(|t| t.guests.len()).sum()
    }

    /// Returns `true` if both guests share a table.
    pub fn seated_together(&self, a: &GuestId, b: &GuestId) -> bool {
        match (self.table_of(a), self.table_of(b)) {
            (Some(ta), Some(tb)) => ta == tb,
            _ => false,
        }
    }
}
