//! Table desirability scoring.
//!
//! Scores how well a candidate guest fits a table given the guests already
//! seated there:
//!
//! ```text
//! score = Σ over seated s of
//!           w(c, s) + bonus · shared(c, s)   if w(c, s) > 0
//!           w(c, s)                          if (c, s) is excluded
//!           0                                otherwise
//! ```
//!
//! `shared(c, s)` counts guests positively connected to both. An empty
//! table scores zero for everyone.

mod scorer;

pub use scorer::{table_score, IndirectBonus, TableScorer, SHARED_CONNECTION_BONUS};
