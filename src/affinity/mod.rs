//! Affinity matrix construction.
//!
//! Turns a guest roster plus relationship and blacklist edges into a
//! symmetric N×N weight matrix. Matrix indices follow roster order.
//!
//! # Edge resolution
//!
//! - Edges naming a guest id absent from the roster are dropped.
//! - Edges pairing a guest with itself are dropped.
//! - When a pair has several relationship edges, the first one wins.
//! - Blacklist edges are applied last and overwrite any relationship
//!   weight for the same pair.
//!
//! Dropped edges are counted in [`BuildStats`] and logged at `warn`.

mod builder;
mod matrix;

pub use builder::{AffinityBuilder, BuildStats};
pub use matrix::AffinityMatrix;
