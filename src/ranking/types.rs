//! Core trait for ranking rules.

use crate::affinity::AffinityMatrix;

/// A rule that assigns a priority value to a guest.
///
/// Rules return `f64` scores where **lower is higher priority**.
///
/// # Examples
///
/// ```
/// use u_seating::affinity::AffinityMatrix;
/// use u_seating::ranking::RankingRule;
///
/// // Seat guests with fewer exclusions first.
/// struct FewestExclusions;
///
/// impl RankingRule for FewestExclusions {
///     fn name(&self) -> &str { "FewestExclusions" }
///     fn score(&self, guest: usize, matrix: &AffinityMatrix) -> f64 {
///         (0..matrix.len()).filter(|&k| matrix.is_excluded(guest, k)).count() as f64
///     }
/// }
/// ```
pub trait RankingRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes a priority score for the guest at roster index `guest`.
    ///
    /// Lower scores indicate higher priority.
    fn score(&self, guest: usize, matrix: &AffinityMatrix) -> f64;
}
