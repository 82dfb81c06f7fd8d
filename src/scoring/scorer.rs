//! Table score evaluator.

use crate::affinity::AffinityMatrix;

/// Bonus per shared connection between candidate and a seated guest.
pub const SHARED_CONNECTION_BONUS: f64 = 0.5;

/// When the shared-connection bonus is granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IndirectBonus {
    /// Only when candidate and seated guest are directly connected.
    #[default]
    DirectEdgeOnly,

    /// Also for unrelated pairs (friends of friends). Never for excluded pairs.
    Always,
}

/// Computes the desirability of seating a guest at a table.
///
/// # Examples
///
/// ```
/// use u_seating::affinity::AffinityBuilder;
/// use u_seating::scoring::TableScorer;
/// use u_seating::types::{Guest, RelationshipEdge};
/// use u_seating::weights::RelationshipCategory;
///
/// let guests = vec![Guest::new("a", "A"), Guest::new("b", "B")];
/// let rels = vec![RelationshipEdge::new("a", "b", RelationshipCategory::SignificantOther)];
/// let matrix = AffinityBuilder::new(&guests).with_relationships(&rels).build();
///
/// let scorer = TableScorer::default();
/// assert_eq!(scorer.score(&matrix, 1, &[]), 0.0);
/// assert_eq!(scorer.score(&matrix, 1, &[0]), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableScorer {
    /// Score added per shared connection. Must be non-negative.
    pub shared_bonus: f64,

    /// When the shared bonus applies.
    pub indirect_bonus: IndirectBonus,
}

impl Default for TableScorer {
    fn default() -> Self {
        Self {
            shared_bonus: SHARED_CONNECTION_BONUS,
            indirect_bonus: IndirectBonus::DirectEdgeOnly,
        }
    }
}

impl TableScorer {
    pub fn with_shared_bonus(mut self, bonus: f64) -> Self {
        self.shared_bonus = bonus;
        self
    }

    pub fn with_indirect_bonus(mut self, policy: IndirectBonus) -> Self {
        self.indirect_bonus = policy;
        self
    }

    /// Scores `candidate` against the guests in `seated` (roster indices).
    pub fn score(&self, matrix: &AffinityMatrix, candidate: usize, seated: &[usize]) -> f64 {
        let mut score = 0.0;
        for &s in seated {
            let w = matrix.get(candidate, s);
            if w > 0.0 {
                score += w + self.bonus(matrix, candidate, s);
            } else if matrix.is_excluded(candidate, s) {
                score += w;
            } else if w == 0.0 && self.indirect_bonus == IndirectBonus::Always {
                score += self.bonus(matrix, candidate, s);
            }
        }
        score
    }

    fn bonus(&self, matrix: &AffinityMatrix, candidate: usize, seated: usize) -> f64 {
        self.shared_bonus * matrix.shared_connections(candidate, seated) as f64
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.shared_bonus.is_finite() || self.shared_bonus < 0.0 {
            return Err(format!(
                "shared_bonus must be non-negative, got {}",
                self.shared_bonus
            ));
        }
        Ok(())
    }
}

/// Scores with the default [`TableScorer`].
pub fn table_score(matrix: &AffinityMatrix, candidate: usize, seated: &[usize]) -> f64 {
    TableScorer::default().score(matrix, candidate, seated)
}
