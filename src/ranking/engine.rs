//! Rule composition engine for guest ordering.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::rules::ConnectionDegree;
use super::types::RankingRule;
use crate::affinity::AffinityMatrix;

/// Orders guests for the allocator.
///
/// # Examples
///
/// ```
/// use u_seating::affinity::AffinityBuilder;
/// use u_seating::ranking::{GuestRanker, TotalAffinity};
/// use u_seating::types::{Guest, RelationshipEdge};
/// use u_seating::weights::RelationshipCategory;
///
/// let guests = vec![Guest::new("a", "A"), Guest::new("b", "B"), Guest::new("c", "C")];
/// let rels = vec![RelationshipEdge::new("b", "c", RelationshipCategory::Friend)];
/// let matrix = AffinityBuilder::new(&guests).with_relationships(&rels).build();
///
/// let ranker = GuestRanker::default().with_rule(TotalAffinity);
/// assert_eq!(ranker.rank(&matrix), vec![1, 2, 0]);
/// ```
#[derive(Clone)]
pub struct GuestRanker {
    rules: Vec<Arc<dyn RankingRule>>,
    epsilon: f64,
}

impl GuestRanker {
    /// Creates a ranker with no rules (roster order).
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// Appends a rule. Rules added later only break ties of earlier ones.
    pub fn with_rule<R: RankingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the epsilon for floating-point comparison.
    pub fn with_epsilon(mut self, eps: f64) -> Self {
        self.epsilon = eps;
        self
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns roster indices in seating order.
    pub fn rank(&self, matrix: &AffinityMatrix) -> Vec<usize> {
        let n = matrix.len();
        if self.rules.is_empty() {
            return (0..n).collect();
        }

        let scores: Vec<Vec<f64>> = (0..n)
            .map(|guest| self.rules.iter().map(|r| r.score(guest, matrix)).collect())
            .collect();

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            for (va, vb) in scores[a].iter().zip(&scores[b]) {
                if (va - vb).abs() > self.epsilon {
                    return va.partial_cmp(vb).unwrap_or(Ordering::Equal);
                }
            }
            a.cmp(&b)
        });
        order
    }
}

impl Default for GuestRanker {
    /// Ranks by [`ConnectionDegree`].
    fn default() -> Self {
        Self::new().with_rule(ConnectionDegree)
    }
}

impl fmt::Debug for GuestRanker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuestRanker")
            .field("rules", &self.rule_names())
            .field("epsilon", &self.epsilon)
            .finish()
    }
}
