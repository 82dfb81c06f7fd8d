//! Constraint-aware seating assignment.
//!
//! Places guests at capacitated tables so that related guests sit
//! together while blacklisted pairs are kept apart whenever capacity
//! allows. The engine is a pure, deterministic greedy heuristic:
//!
//! - **Weights**: relationship categories and preference modes mapped to
//!   signed weights, plus the hard-exclusion sentinel for blacklisted pairs.
//! - **Affinity**: symmetric guest × guest weight matrix built from
//!   relationship and blacklist edges.
//! - **Ranking**: guest ordering by connection degree with deterministic
//!   tie-breaking; extensible through composable rules.
//! - **Scoring**: desirability of a table for a candidate guest, with a
//!   shared-connection bonus.
//! - **Allocation**: single-pass capacitated greedy assignment producing a
//!   [`SeatingPlan`](allocation::SeatingPlan).
//! - **Capacity**: how many generic tables to add before allocating.
//!
//! # Example
//!
//! ```
//! use u_seating::allocation::{allocate, AllocationConfig, SeatingProblem};
//! use u_seating::capacity::CapacityPlanner;
//! use u_seating::types::{BlacklistEdge, Guest, RelationshipEdge, Table};
//! use u_seating::weights::{PreferenceMode, RelationshipCategory};
//!
//! let guests: Vec<Guest> = ["ana", "ben", "cy", "dee", "eli"]
//!     .into_iter()
//!     .map(|n| Guest::new(n, n))
//!     .collect();
//! let tables = CapacityPlanner::default()
//!     .with_default_capacity(3)
//!     .expand(&[Table::new("head", 2)], guests.len())
//!     .unwrap();
//!
//! let problem = SeatingProblem::new(guests, tables)
//!     .with_relationships(vec![
//!         RelationshipEdge::new("ana", "ben", RelationshipCategory::SignificantOther),
//!         RelationshipEdge::new("cy", "dee", RelationshipCategory::Family),
//!     ])
//!     .with_blacklist(vec![BlacklistEdge::new("ana", "eli")]);
//!
//! let config = AllocationConfig::default().with_mode(PreferenceMode::FamilyFirst);
//! let plan = allocate(&problem, &config).unwrap();
//!
//! assert!(plan.seated_together(&"ana".into(), &"ben".into()));
//! assert!(!plan.seated_together(&"ana".into(), &"eli".into()));
//! assert_eq!(plan.assigned_count(), 5);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for all inputs, outputs and configs.
//! - `parallel`: [`Allocator::run_batch`](allocation::Allocator::run_batch)
//!   solves independent problems on the rayon pool.
//! - `wasm`: JavaScript bindings (`optimizeSeating`, `requiredTables`).

pub mod affinity;
pub mod allocation;
pub mod capacity;
pub mod error;
pub mod ranking;
pub mod scoring;
pub mod types;
pub mod weights;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Result, SeatingError};
