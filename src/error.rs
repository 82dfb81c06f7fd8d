//! Error types for seating operations.

use thiserror::Error;

use crate::types::TableId;

/// Errors raised by the allocator and the capacity planner.
///
/// Every variant is detected before any assignment is made, so a returned
/// error never comes with a partially filled plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    /// Total seat count is smaller than the number of guests.
    #[error("not enough seats: {guests} guests but only {seats} seats")]
    InsufficientCapacity { guests: usize, seats: usize },

    /// A table was supplied with zero seats.
    #[error("table {table} has no seats")]
    ZeroCapacity { table: TableId },

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for seating operations.
pub type Result<T> = std::result::Result<T, SeatingError>;
