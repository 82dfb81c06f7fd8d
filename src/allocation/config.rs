//! Allocation configuration.

use crate::error::{Result, SeatingError};
use crate::scoring::{IndirectBonus, TableScorer};
use crate::weights::{PreferenceMode, WeightModel};

/// Configuration for a seating run.
///
/// # Examples
///
/// ```
/// use u_seating::allocation::AllocationConfig;
/// use u_seating::weights::PreferenceMode;
///
/// let config = AllocationConfig::default()
///     .with_mode(PreferenceMode::FamilyFirst)
///     .with_preference_multiplier(2.0)
///     .with_shared_bonus(0.25);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AllocationConfig {
    /// Preference mode applied while building the affinity matrix.
    pub mode: PreferenceMode,

    /// Category weights and the exclusion sentinel.
    pub weights: WeightModel,

    /// Table scoring parameters.
    pub scorer: TableScorer,
}

impl AllocationConfig {
    pub fn with_mode(mut self, mode: PreferenceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_weights(mut self, weights: WeightModel) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_scorer(mut self, scorer: TableScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_preference_multiplier(mut self, multiplier: f64) -> Self {
        self.weights.preference_multiplier = multiplier;
        self
    }

    pub fn with_exclusion_weight(mut self, weight: f64) -> Self {
        self.weights.exclusion_weight = weight;
        self
    }

    pub fn with_shared_bonus(mut self, bonus: f64) -> Self {
        self.scorer.shared_bonus = bonus;
        self
    }

    pub fn with_indirect_bonus(mut self, policy: IndirectBonus) -> Self {
        self.scorer.indirect_bonus = policy;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.weights.validate().map_err(SeatingError::InvalidConfig)?;
        self.scorer.validate().map_err(SeatingError::InvalidConfig)?;
        Ok(())
    }
}
