//! Matrix builder.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::matrix::AffinityMatrix;
use crate::types::{BlacklistEdge, Guest, GuestId, RelationshipEdge};
use crate::weights::{PreferenceMode, WeightModel};

/// Counters describing how edges were resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildStats {
    /// Relationship edges written into the matrix.
    pub relationships_applied: usize,

    /// Blacklist edges written into the matrix.
    pub blacklist_applied: usize,

    /// Edges dropped because an endpoint is not in the roster.
    pub unresolved_edges: usize,

    /// Edges dropped because both endpoints are the same guest.
    pub self_pairs: usize,

    /// Relationship edges ignored because the pair already had one.
    pub duplicate_relationships: usize,
}

impl BuildStats {
    /// Total number of edges that did not make it into the matrix.
    pub fn dropped(&self) -> usize {
        self.unresolved_edges + self.self_pairs + self.duplicate_relationships
    }
}

/// Builds an [`AffinityMatrix`] from a roster and edge lists.
///
/// # Examples
///
/// ```
/// use u_seating::affinity::AffinityBuilder;
/// use u_seating::types::{BlacklistEdge, Guest, RelationshipEdge};
/// use u_seating::weights::{PreferenceMode, RelationshipCategory};
///
/// let guests = vec![Guest::new("a", "A"), Guest::new("b", "B"), Guest::new("c", "C")];
/// let relationships = vec![RelationshipEdge::new("a", "b", RelationshipCategory::Family)];
/// let blacklist = vec![BlacklistEdge::new("b", "c")];
///
/// let matrix = AffinityBuilder::new(&guests)
///     .with_relationships(&relationships)
///     .with_blacklist(&blacklist)
///     .with_mode(PreferenceMode::FamilyFirst)
///     .build();
///
/// assert!((matrix.get(0, 1) - 4.5).abs() < 1e-10);
/// assert!(matrix.is_excluded(1, 2));
/// ```
#[derive(Debug, Clone)]
pub struct AffinityBuilder<'a> {
    guests: &'a [Guest],
    relationships: &'a [RelationshipEdge],
    blacklist: &'a [BlacklistEdge],
    mode: PreferenceMode,
    weights: WeightModel,
}

impl<'a> AffinityBuilder<'a> {
    /// Creates a builder for the given roster with no edges.
    pub fn new(guests: &'a [Guest]) -> Self {
        Self {
            guests,
            relationships: &[],
            blacklist: &[],
            mode: PreferenceMode::default(),
            weights: WeightModel::default(),
        }
    }

    pub fn with_relationships(mut self, relationships: &'a [RelationshipEdge]) -> Self {
        self.relationships = relationships;
        self
    }

    pub fn with_blacklist(mut self, blacklist: &'a [BlacklistEdge]) -> Self {
        self.blacklist = blacklist;
        self
    }

    pub fn with_mode(mut self, mode: PreferenceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_weights(mut self, weights: WeightModel) -> Self {
        self.weights = weights;
        self
    }

    /// Builds the matrix. Never fails; unusable edges are counted and skipped.
    pub fn build(self) -> AffinityMatrix {
        let ids = self.guests.iter().map(|g| g.id.clone()).collect();
        let mut matrix = AffinityMatrix::zeros(ids, self.weights.exclusion_weight());
        let mut stats = BuildStats::default();

        let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(self.relationships.len());
        for edge in self.relationships {
            let Some((i, j)) = resolve(&matrix, &edge.a, &edge.b, &mut stats) else {
                continue;
            };
            if !seen.insert((i.min(j), i.max(j))) {
                stats.duplicate_relationships += 1;
                debug!(a = %edge.a, b = %edge.b, "duplicate relationship ignored");
                continue;
            }
            matrix.set_pair(i, j, self.weights.weight_of(edge.category, self.mode));
            stats.relationships_applied += 1;
        }

        for edge in self.blacklist {
            let Some((i, j)) = resolve(&matrix, &edge.a, &edge.b, &mut stats) else {
                continue;
            };
            matrix.set_pair(i, j, self.weights.exclusion_weight());
            stats.blacklist_applied += 1;
        }

        debug!(
            guests = matrix.len(),
            mode = ?self.mode,
            relationships = stats.relationships_applied,
            blacklist = stats.blacklist_applied,
            dropped = stats.dropped(),
            "affinity matrix built"
        );

        matrix.set_stats(stats);
        matrix
    }
}

/// Maps an edge to matrix indices, recording why it was dropped otherwise.
fn resolve(
    matrix: &AffinityMatrix,
    a: &GuestId,
    b: &GuestId,
    stats: &mut BuildStats,
) -> Option<(usize, usize)> {
    let (Some(i), Some(j)) = (matrix.index_of(a), matrix.index_of(b)) else {
        stats.unresolved_edges += 1;
        warn!(a = %a, b = %b, "edge references unknown guest, dropped");
        return None;
    };
    if i == j {
        stats.self_pairs += 1;
        warn!(guest = %a, "edge pairs a guest with itself, dropped");
        return None;
    }
    Some((i, j))
}
