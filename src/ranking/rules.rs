//! Built-in ranking rules.

use super::types::RankingRule;
use crate::affinity::AffinityMatrix;

/// Most positive connections first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectionDegree;

impl RankingRule for ConnectionDegree {
    fn name(&self) -> &str {
        "ConnectionDegree"
    }

    fn score(&self, guest: usize, matrix: &AffinityMatrix) -> f64 {
        -(matrix.degree(guest) as f64)
    }
}

/// Largest sum of positive weights first.
///
/// Useful as a secondary rule: among guests with the same degree, those
/// with stronger ties are seated earlier.
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalAffinity;

impl RankingRule for TotalAffinity {
    fn name(&self) -> &str {
        "TotalAffinity"
    }

    fn score(&self, guest: usize, matrix: &AffinityMatrix) -> f64 {
        -matrix.row(guest).iter().filter(|&&w| w > 0.0).sum::<f64>()
    }
}
