//! Capacitated greedy allocation.
//!
//! Seats every guest at exactly one table in a single linear pass:
//!
//! 1. Reject the problem if total capacity is below the guest count.
//! 2. Build the affinity matrix and rank guests.
//! 3. For each guest in rank order, score every table with a free seat
//!    and take the strictly best one; ties go to the lowest table index.
//!
//! The pass never backtracks. It is a heuristic: blacklisted pairs are
//! only kept apart when another table has room.

mod config;
mod runner;
mod types;

pub use config::AllocationConfig;
pub use runner::{allocate, Allocator};
pub use types::{SeatedGuest, SeatingPlan, SeatingProblem, TableAssignment};
