//! Relationship weight model.
//!
//! Maps a relationship category and the active preference mode to a signed
//! weight, and supplies the hard-exclusion sentinel used for blacklisted
//! pairs.
//!
//! | Category          | Base weight |
//! |-------------------|-------------|
//! | Significant other | 10          |
//! | Close friend      | 4           |
//! | Family            | 3           |
//! | Friend            | 2           |
//! | Acquaintance      | 1           |
//! | None              | 0           |
//!
//! `FamilyFirst` scales Family and `RelationshipsFirst` scales Close friend
//! by the preference multiplier (1.5 by default). Nothing else is affected
//! by the mode.

mod config;
mod types;

pub use config::{WeightModel, HARD_EXCLUSION_WEIGHT, PREFERENCE_MULTIPLIER};
pub use types::{PreferenceMode, RelationshipCategory};
