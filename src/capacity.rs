//! Capacity planning.
//!
//! Works out how many generic tables must be added so that every guest
//! has a seat. Placement, shape, and position of the new tables belong to
//! the layout layer; the planner only decides how many and their ids.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{Result, SeatingError};
use crate::types::{Table, TableId};

/// Seats per generated table when nothing else is specified.
pub const DEFAULT_TABLE_CAPACITY: usize = 8;

/// Minimum number of `default_capacity` tables to add so that total
/// capacity covers `guest_count`.
///
/// Returns zero when existing capacity already suffices.
///
/// # Examples
///
/// ```
/// use u_seating::capacity::additional_tables_needed;
///
/// assert_eq!(additional_tables_needed(20, 10, 8).unwrap(), 2);
/// assert_eq!(additional_tables_needed(10, 16, 8).unwrap(), 0);
/// ```
pub fn additional_tables_needed(
    guest_count: usize,
    existing_capacity: usize,
    default_capacity: usize,
) -> Result<usize> {
    if existing_capacity >= guest_count {
        return Ok(0);
    }
    if default_capacity == 0 {
        return Err(SeatingError::InvalidConfig(
            "default table capacity must be positive".into(),
        ));
    }
    Ok((guest_count - existing_capacity).div_ceil(default_capacity))
}

/// Generates generic tables to cover a guest count.
///
/// # Examples
///
/// ```
/// use u_seating::capacity::CapacityPlanner;
/// use u_seating::types::Table;
///
/// let existing = vec![Table::new("head", 6)];
/// let tables = CapacityPlanner::default().expand(&existing, 20).unwrap();
///
/// assert_eq!(tables.len(), 3);
/// assert_eq!(tables[1].id.as_str(), "auto-table-1");
/// assert_eq!(tables[2].capacity, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CapacityPlanner {
    /// Seats per generated table. Must be positive.
    pub default_capacity: usize,

    /// Prefix of generated table ids, followed by `-<n>`.
    pub id_prefix: String,
}

impl Default for CapacityPlanner {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_TABLE_CAPACITY,
            id_prefix: "auto-table".into(),
        }
    }
}

impl CapacityPlanner {
    pub fn with_default_capacity(mut self, capacity: usize) -> Self {
        self.default_capacity = capacity;
        self
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Number of tables to add for `guest_count` given `existing` tables.
    pub fn additional_tables(&self, guest_count: usize, existing: &[Table]) -> Result<usize> {
        let existing_capacity = existing
            .iter()
            .fold(0usize, |acc, t| acc.saturating_add(t.capacity));
        additional_tables_needed(guest_count, existing_capacity, self.default_capacity)
    }

    /// The new tables only. Ids never collide with `existing`.
    pub fn plan(&self, guest_count: usize, existing: &[Table]) -> Result<Vec<Table>> {
        let count = self.additional_tables(guest_count, existing)?;
        let taken: HashSet<&TableId> = existing.iter().map(|t| &t.id).collect();

        let mut tables = Vec::with_capacity(count);
        let mut n = 1usize;
        while tables.len() < count {
            let id = TableId::new(format!("{}-{n}", self.id_prefix));
            if !taken.contains(&id) {
                tables.push(Table::new(id, self.default_capacity));
            }
            n += 1;
        }

        if count > 0 {
            debug!(
                guest_count,
                added = count,
                capacity = self.default_capacity,
                "planned additional tables"
            );
        }
        Ok(tables)
    }

    /// `existing` followed by the planned tables.
    pub fn expand(&self, existing: &[Table], guest_count: usize) -> Result<Vec<Table>> {
        let mut tables = existing.to_vec();
        tables.extend(self.plan(guest_count, existing)?);
        Ok(tables)
    }
}
