//! Guest priority ranking.
//!
//! Decides the order in which the allocator seats guests. Highly connected
//! guests go first so that tables build up affinity before capacity
//! pressure pushes isolated guests into whatever space remains.
//!
//! Rankings are composed from [`RankingRule`]s evaluated sequentially:
//! a later rule is only consulted when earlier rules tie (within epsilon).
//! Remaining ties are broken by ascending roster index, which keeps the
//! ordering fully deterministic.

mod engine;
mod rules;
mod types;

pub use engine::GuestRanker;
pub use rules::{ConnectionDegree, TotalAffinity};
pub use types::RankingRule;
