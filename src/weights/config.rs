//! Weight model configuration.

use super::types::{PreferenceMode, RelationshipCategory};

/// Scale applied to the category a preference mode favours.
pub const PREFERENCE_MULTIPLIER: f64 = 1.5;

/// Weight of a blacklisted pair.
///
/// Its magnitude exceeds any positive affinity a realistic table can
/// accumulate, so it dominates scoring unless capacity leaves no choice.
pub const HARD_EXCLUSION_WEIGHT: f64 = -1000.0;

/// Maps relationship categories to signed weights.
///
/// # Examples
///
/// ```
/// use u_seating::weights::{PreferenceMode, RelationshipCategory, WeightModel};
///
/// let model = WeightModel::default();
/// let balanced = model.weight_of(RelationshipCategory::Family, PreferenceMode::Balanced);
/// let family = model.weight_of(RelationshipCategory::Family, PreferenceMode::FamilyFirst);
/// assert!((balanced - 3.0).abs() < 1e-10);
/// assert!((family - 4.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeightModel {
    /// Multiplier for the category favoured by the active mode. Must be positive.
    pub preference_multiplier: f64,

    /// Sentinel weight for blacklisted pairs. Must be negative and larger
    /// in magnitude than [`strongest_weight`](Self::strongest_weight).
    ///
    /// Only one excluded pair is weighed against a whole table of positive
    /// edges, so a sentinel near that floor may still be outvoted by a
    /// crowded table. The default keeps a wide margin.
    pub exclusion_weight: f64,
}

impl Default for WeightModel {
    fn default() -> Self {
        Self {
            preference_multiplier: PREFERENCE_MULTIPLIER,
            exclusion_weight: HARD_EXCLUSION_WEIGHT,
        }
    }
}

impl WeightModel {
    pub fn with_preference_multiplier(mut self, multiplier: f64) -> Self {
        self.preference_multiplier = multiplier;
        self
    }

    pub fn with_exclusion_weight(mut self, weight: f64) -> Self {
        self.exclusion_weight = weight;
        self
    }

    /// Effective weight of a relationship under the given mode.
    pub fn weight_of(&self, category: RelationshipCategory, mode: PreferenceMode) -> f64 {
        let base = category.base_weight();
        if mode.boosts(category) {
            base * self.preference_multiplier
        } else {
            base
        }
    }

    /// Largest weight any single relationship can carry under any mode.
    pub fn strongest_weight(&self) -> f64 {
        RelationshipCategory::ALL
            .iter()
            .flat_map(|&c| PreferenceMode::ALL.iter().map(move |&m| self.weight_of(c, m)))
            .fold(0.0, f64::max)
    }

    /// The hard-exclusion sentinel.
    pub fn exclusion_weight(&self) -> f64 {
        self.exclusion_weight
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.preference_multiplier.is_finite() || self.preference_multiplier <= 0.0 {
            return Err(format!(
                "preference_multiplier must be positive, got {}",
                self.preference_multiplier
            ));
        }
        if !self.exclusion_weight.is_finite() || self.exclusion_weight >= 0.0 {
            return Err(format!(
                "exclusion_weight must be negative, got {}",
                self.exclusion_weight
            ));
        }
        let floor = self.strongest_weight();
        if -self.exclusion_weight <= floor {
            return Err(format!(
                "exclusion_weight must be below -{floor}, got {}",
                self.exclusion_weight
            ));
        }
        Ok(())
    }
}
