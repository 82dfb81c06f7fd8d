//! Dense symmetric affinity matrix.

use std::collections::HashMap;

use super::builder::BuildStats;
use crate::types::GuestId;

/// Pairwise guest weights, indexed by roster position.
///
/// Built by [`AffinityBuilder`](super::AffinityBuilder). Entries are zero
/// unless an edge sets them; the diagonal is always zero.
#[derive(Debug, Clone, PartialEq)]
pub struct AffinityMatrix {
    ids: Vec<GuestId>,
    index: HashMap<GuestId, usize>,
    /// Row-major, `n * n`.
    weights: Vec<f64>,
    exclusion_weight: f64,
    stats: BuildStats,
}

impl AffinityMatrix {
    pub(crate) fn zeros(ids: Vec<GuestId>, exclusion_weight: f64) -> Self {
        let n = ids.len();
        let mut index = HashMap::with_capacity(n);
        for (i, id) in ids.iter().enumerate() {
            index.entry(id.clone()).or_insert(i);
        }
        Self {
            ids,
            index,
            weights: vec![0.0; n * n],
            exclusion_weight,
            stats: BuildStats::default(),
        }
    }

    pub(crate) fn set_pair(&mut self, i: usize, j: usize, weight: f64) {
        let n = self.ids.len();
        self.weights[i * n + j] = weight;
        self.weights[j * n + i] = weight;
    }

    pub(crate) fn set_stats(&mut self, stats: BuildStats) {
        self.stats = stats;
    }

    /// Number of guests.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Weight between guest `i` and guest `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.ids.len() + j]
    }

    /// All weights of guest `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        let n = self.ids.len();
        &self.weights[i * n..(i + 1) * n]
    }

    /// Connection degree: number of strictly positive entries in row `i`.
    pub fn degree(&self, i: usize) -> usize {
        self.row(i).iter().filter(|&&w| w > 0.0).count()
    }

    /// Number of guests positively connected to both `i` and `j`.
    pub fn shared_connections(&self, i: usize, j: usize) -> usize {
        self.row(i)
            .iter()
            .zip(self.row(j))
            .filter(|&(&wi, &wj)| wi > 0.0 && wj > 0.0)
            .count()
    }

    /// Returns `true` if the pair carries the hard-exclusion weight.
    pub fn is_excluded(&self, i: usize, j: usize) -> bool {
        self.get(i, j) == self.exclusion_weight
    }

    /// The hard-exclusion sentinel this matrix was built with.
    pub fn exclusion_weight(&self) -> f64 {
        self.exclusion_weight
    }

    /// Roster position of a guest id.
    pub fn index_of(&self, id: &GuestId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Guest id at roster position `i`.
    pub fn guest_id(&self, i: usize) -> &GuestId {
        &self.ids[i]
    }

    /// Edge resolution counters gathered while building.
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.ids.len();
        (0..n).all(|i| (i + 1..n).all(|j| self.get(i, j) == self.get(j, i)))
    }
}
