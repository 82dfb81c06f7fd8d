//! Greedy allocation loop.

use tracing::{debug, info, warn};

use super::config::AllocationConfig;
use super::types::{SeatedGuest, SeatingPlan, SeatingProblem, TableAssignment};
use crate::affinity::{AffinityBuilder, AffinityMatrix};
use crate::error::{Result, SeatingError};
use crate::ranking::GuestRanker;
use crate::types::GuestId;

/// Executes the capacitated greedy allocation.
///
/// Holds only configuration; every call to [`run`](Allocator::run) is
/// independent and leaves its input untouched.
///
/// # Examples
///
/// ```
/// use u_seating::allocation::{AllocationConfig, Allocator, SeatingProblem};
/// use u_seating::types::{Guest, RelationshipEdge, Table};
/// use u_seating::weights::RelationshipCategory;
///
/// let problem = SeatingProblem::new(
///     vec![Guest::new("a", "A"), Guest::new("b", "B"), Guest::new("c", "C")],
///     vec![Table::new("t1", 2), Table::new("t2", 2)],
/// )
/// .with_relationships(vec![RelationshipEdge::new("a", "c", RelationshipCategory::Family)]);
///
/// let plan = Allocator::new(AllocationConfig::default()).run(&problem).unwrap();
/// assert!(plan.seated_together(&"a".into(), &"c".into()));
/// assert_eq!(plan.assigned_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Allocator {
    config: AllocationConfig,
    ranker: GuestRanker,
}

impl Allocator {
    /// Creates an allocator that ranks guests by connection degree.
    pub fn new(config: AllocationConfig) -> Self {
        Self {
            config,
            ranker: GuestRanker::default(),
        }
    }

    /// Replaces the guest ranker.
    pub fn with_ranker(mut self, ranker: GuestRanker) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Seats every guest of `problem`.
    ///
    /// Fails before any assignment when the configuration is invalid, a
    /// table has no seats, or total capacity is below the guest count.
    pub fn run(&self, problem: &SeatingProblem) -> Result<SeatingPlan> {
        self.config.validate()?;

        if let Some(table) = problem.tables.iter().find(|t| t.capacity == 0) {
            return Err(SeatingError::ZeroCapacity {
                table: table.id.clone(),
            });
        }

        let guests = problem.guests.len();
        let seats = problem.total_capacity();
        if guests > seats {
            return Err(SeatingError::InsufficientCapacity { guests, seats });
        }

        let matrix = AffinityBuilder::new(&problem.guests)
            .with_relationships(&problem.relationships)
            .with_blacklist(&problem.blacklist)
            .with_mode(self.config.mode)
            .with_weights(self.config.weights)
            .build();

        let order = self.ranker.rank(&matrix);
        let mut seated: Vec<Vec<usize>> = vec![Vec::new(); problem.tables.len()];

        for guest in order {
            let mut best: Option<(usize, f64)> = None;
            for (t, table) in problem.tables.iter().enumerate() {
                if seated[t].len() >= table.capacity {
                    continue;
                }
                let score = self.config.scorer.score(&matrix, guest, &seated[t]);
                // Strict comparison: the first table seen wins ties.
                if best.is_none_or(|(_, best_score)| score > best_score) {
                    best = Some((t, score));
                }
            }

            let (t, score) = best.ok_or(SeatingError::InsufficientCapacity { guests, seats })?;
            debug!(
                guest = %matrix.guest_id(guest),
                table = %problem.tables[t].id,
                score,
                "guest seated"
            );
            seated[t].push(guest);
        }

        let plan = summarize(problem, &matrix, &seated);
        for (a, b) in &plan.forced_exclusions {
            warn!(a = %a, b = %b, "blacklisted pair seated together: no other table had room");
        }
        info!(
            guests,
            tables = problem.tables.len(),
            affinity_score = plan.affinity_score,
            forced_exclusions = plan.forced_exclusions.len(),
            "seating plan complete"
        );
        Ok(plan)
    }

    /// Runs several independent problems with the same configuration.
    ///
    /// With the `parallel` feature the problems are solved concurrently;
    /// results keep the input order either way.
    pub fn run_batch(&self, problems: &[SeatingProblem]) -> Vec<Result<SeatingPlan>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            problems.par_iter().map(|p| self.run(p)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            problems.iter().map(|p| self.run(p)).collect()
        }
    }
}

/// Seats `problem` with the default ranker.
pub fn allocate(problem: &SeatingProblem, config: &AllocationConfig) -> Result<SeatingPlan> {
    Allocator::new(*config).run(problem)
}

/// Converts index lists into the public plan and scores it.
fn summarize(
    problem: &SeatingProblem,
    matrix: &AffinityMatrix,
    seated: &[Vec<usize>],
) -> SeatingPlan {
    let mut affinity_score = 0.0;
    let mut forced_exclusions: Vec<(GuestId, GuestId)> = Vec::new();

    for members in seated {
        for (pos, &i) in members.iter().enumerate() {
            for &j in &members[pos + 1..] {
                affinity_score += matrix.get(i, j);
                if matrix.is_excluded(i, j) {
                    forced_exclusions
                        .push((matrix.guest_id(i).clone(), matrix.guest_id(j).clone()));
                }
            }
        }
    }

    let tables = problem
        .tables
        .iter()
        .zip(seated)
        .map(|(table, members)| TableAssignment {
            table_id: table.id.clone(),
            capacity: table.capacity,
            guests: members
                .iter()
                .map(|&i| SeatedGuest {
                    guest: problem.guests[i].clone(),
                    table_id: table.id.clone(),
                })
                .collect(),
        })
        .collect();

    SeatingPlan {
        tables,
        affinity_score,
        forced_exclusions,
        build_stats: *matrix.stats(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{RankingRule, TotalAffinity};
    use crate::scoring::IndirectBonus;
    use crate::types::{BlacklistEdge, Guest, RelationshipEdge, Table, TableId};
    use crate::weights::{PreferenceMode, RelationshipCategory};
    use proptest::prelude::*;

    fn guests(names: &[&str]) -> Vec<Guest> {
        names.iter().map(|&n| Guest::new(n, n)).collect()
    }

    fn id(s: &str) -> GuestId {
        GuestId::from(s)
    }

    fn members<'a>(plan: &'a SeatingPlan, table: &str) -> Vec<&'a str> {
        plan.assignment(&TableId::from(table))
            .map(|t| t.guest_ids().map(|g| g.as_str()).collect())
            .unwrap_or_default()
    }

    // ---- Reference scenarios ----

    #[test]
    fn test_no_edges_single_table() {
        let problem = SeatingProblem::new(
            guests(&["a", "b", "c", "d"]),
            vec![Table::new("t1", 4)],
        );
        let plan = allocate(&problem, &AllocationConfig::default()).unwrap();

        assert_eq!(members(&plan, "t1"), vec!["a", "b", "c", "d"]);
        assert_eq!(plan.affinity_score, 0.0);
    }

    #[test]
    fn test_couples_share_tables() {
        let problem = SeatingProblem::new(
            guests(&["a", "b", "c", "d"]),
            vec![Table::new("t1", 2), Table::new("t2", 2)],
        )
        .with_relationships(vec![
            RelationshipEdge::new("a", "b", RelationshipCategory::SignificantOther),
            RelationshipEdge::new("c", "d", RelationshipCategory::SignificantOther),
        ]);
        let plan = allocate(&problem, &AllocationConfig::default()).unwrap();

        assert_eq!(members(&plan, "t1"), vec!["a", "b"]);
        assert_eq!(members(&plan, "t2"), vec!["c", "d"]);
        assert!((plan.affinity_score - 20.0).abs() < 1e-10);
        assert!(plan.forced_exclusions.is_empty());
    }

    #[test]
    fn test_blacklisted_pair_forced_together_without_room() {
        // Only one table exists, so the heuristic has no way to separate
        // X and Y. This is the documented limitation, not a bug.
        let problem = SeatingProblem::new(guests(&["x", "y", "z"]), vec![Table::new("t1", 3)])
            .with_blacklist(vec![BlacklistEdge::new("x", "y")]);
        let plan = allocate(&problem, &AllocationConfig::default()).unwrap();

        assert_eq!(members(&plan, "t1"), vec!["x", "y", "z"]);
        assert!(plan.seated_together(&id("x"), &id("y")));
        assert_eq!(plan.forced_exclusions, vec![(id("x"), id("y"))]);
        assert!((plan.affinity_score + 1000.0).abs() < 1e-10);
    }

    #[test]
    fn test_insufficient_capacity_leaves_input_untouched() {
        let names: Vec<String> = (0..10).map(|i| format!("g{i}")).collect();
        let roster: Vec<Guest> = names.iter().map(|n| Guest::new(n.as_str(), n.as_str())).collect();
        let problem = SeatingProblem::new(roster, vec![Table::new("t1", 4), Table::new("t2", 4)]);
        let snapshot = problem.clone();

        let result = allocate(&problem, &AllocationConfig::default());

        assert_eq!(
            result,
            Err(SeatingError::InsufficientCapacity {
                guests: 10,
                seats: 8
            })
        );
        assert_eq!(problem, snapshot);
    }

    #[test]
    fn test_huge_capacities_do_not_overflow() {
        let problem = SeatingProblem::new(
            guests(&["a"]),
            vec![Table::new("big", usize::MAX), Table::new("t2", 1)],
        );
        assert_eq!(problem.total_capacity(), usize::MAX);

        let plan = allocate(&problem, &AllocationConfig::default()).unwrap();
        assert_eq!(members(&plan, "big"), vec!["a"]);
    }

    #[test]
    fn test_plan_carries_full_guest_records() {
        let roster = vec![
            Guest::new("a", "Ana Ruiz").with_dietary("vegan"),
            Guest::new("b", "Ben Ito").with_note("wheelchair access"),
        ];
        let problem = SeatingProblem::new(roster.clone(), vec![Table::new("t1", 2)]);
        let plan = allocate(&problem, &AllocationConfig::default()).unwrap();

        let seated = &plan.tables[0].guests;
        assert_eq!(seated.len(), 2);
        assert_eq!(seated[0].guest, roster[0]);
        assert_eq!(seated[1].guest, roster[1]);
        assert!(seated.iter().all(|s| s.table_id == TableId::from("t1")));
    }

    // ---- Allocation behavior ----

    #[test]
    fn test_blacklisted_pair_separated_when_room() {
        let problem = SeatingProblem::new(
            guests(&["x", "y", "z"]),
            vec![Table::new("t1", 2), Table::new("t2", 2)],
        )
        .with_blacklist(vec![BlacklistEdge::new("x", "y")]);
        let plan = allocate(&problem, &AllocationConfig::default()).unwrap();

        assert_eq!(members(&plan, "t1"), vec!["x", "z"]);
        assert_eq!(members(&plan, "t2"), vec!["y"]);
        assert!(plan.forced_exclusions.is_empty());
    }

    #[test]
    fn test_highly_connected_guest_seated_first() {
        // Hub h knows everyone else; it is ranked first and claims t1.
        let problem = SeatingProblem::new(
            guests(&["a", "b", "h"]),
            vec![Table::new("t1", 2), Table::new("t2", 2)],
        )
        .with_relationships(vec![
            RelationshipEdge::new("h", "a", RelationshipCategory::Friend),
            RelationshipEdge::new("h", "b", RelationshipCategory::Family),
        ]);
        let plan = allocate(&problem, &AllocationConfig::default()).unwrap();

        // Order: h, a, b. a joins h (2 > 0); b finds t1 full.
        assert_eq!(members(&plan, "t1"), vec!["h", "a"]);
        assert_eq!(members(&plan, "t2"), vec!["b"]);
    }

    #[test]
    fn test_family_first_changes_assignment() {
        // h has a close friend c (4) and a relative b (3). Only one of them
        // fits next to h. FamilyFirst lifts b to 4.5, past c.
        let problem = SeatingProblem::new(
            guests(&["h", "c", "b"]),
            vec![Table::new("t1", 2), Table::new("t2", 2)],
        )
        .with_relationships(vec![
            RelationshipEdge::new("h", "c", RelationshipCategory::CloseFriend),
            RelationshipEdge::new("h", "b", RelationshipCategory::Family),
        ]);
        let ranker = GuestRanker::default().with_rule(TotalAffinity);

        let balanced = Allocator::new(AllocationConfig::default())
            .with_ranker(ranker.clone())
            .run(&problem)
            .unwrap();
        assert!(balanced.seated_together(&id("h"), &id("c")));

        let config = AllocationConfig::default().with_mode(PreferenceMode::FamilyFirst);
        let family = Allocator::new(config)
            .with_ranker(ranker)
            .run(&problem)
            .unwrap();
        assert!(family.seated_together(&id("h"), &id("b")));
    }

    #[test]
    fn test_score_tie_goes_to_first_table() {
        let problem = SeatingProblem::new(
            guests(&["a"]),
            vec![Table::new("t1", 1), Table::new("t2", 1), Table::new("t3", 1)],
        );
        let plan = allocate(&problem, &AllocationConfig::default()).unwrap();
        assert_eq!(members(&plan, "t1"), vec!["a"]);
    }

    #[test]
    fn test_full_tables_are_skipped() {
        let problem = SeatingProblem::new(
            guests(&["a", "b", "c"]),
            vec![Table::new("t1", 1), Table::new("t2", 5)],
        )
        .with_relationships(vec![
            RelationshipEdge::new("a", "b", RelationshipCategory::SignificantOther),
            RelationshipEdge::new("a", "c", RelationshipCategory::SignificantOther),
        ]);
        let plan = allocate(&problem, &AllocationConfig::default()).unwrap();

        // a (degree 2) takes t1 alone; b and c can only go to t2.
        assert_eq!(members(&plan, "t1"), vec!["a"]);
        assert_eq!(members(&plan, "t2"), vec!["b", "c"]);
    }

    #[test]
    fn test_indirect_bonus_policy_pulls_friends_of_friends() {
        // Seated in roster order: f fills t0, x takes t1, y avoids x and
        // takes t2. c knows neither x nor y directly but shares friend f
        // with y. Only the `Always` policy rewards that.
        let problem = SeatingProblem::new(
            guests(&["f", "x", "y", "c"]),
            vec![Table::new("t0", 1), Table::new("t1", 2), Table::new("t2", 2)],
        )
        .with_relationships(vec![
            RelationshipEdge::new("f", "y", RelationshipCategory::Friend),
            RelationshipEdge::new("f", "c", RelationshipCategory::Friend),
        ])
        .with_blacklist(vec![BlacklistEdge::new("x", "y")]);

        let direct = Allocator::new(AllocationConfig::default())
            .with_ranker(GuestRanker::new())
            .run(&problem)
            .unwrap();
        assert_eq!(members(&direct, "t1"), vec!["x", "c"]);
        assert_eq!(members(&direct, "t2"), vec!["y"]);

        let config = AllocationConfig::default().with_indirect_bonus(IndirectBonus::Always);
        let always = Allocator::new(config)
            .with_ranker(GuestRanker::new())
            .run(&problem)
            .unwrap();
        assert_eq!(members(&always, "t1"), vec!["x"]);
        assert_eq!(members(&always, "t2"), vec!["y", "c"]);
    }

    #[test]
    fn test_empty_roster() {
        let problem = SeatingProblem::new(Vec::new(), vec![Table::new("t1", 4)]);
        let plan = allocate(&problem, &AllocationConfig::default()).unwrap();
        assert_eq!(plan.assigned_count(), 0);
        assert_eq!(plan.tables.len(), 1);
    }

    #[test]
    fn test_zero_capacity_table_rejected() {
        let problem = SeatingProblem::new(
            guests(&["a"]),
            vec![Table::new("t1", 4), Table::new("broken", 0)],
        );
        assert_eq!(
            allocate(&problem, &AllocationConfig::default()),
            Err(SeatingError::ZeroCapacity {
                table: TableId::from("broken")
            })
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = SeatingProblem::new(guests(&["a"]), vec![Table::new("t1", 1)]);
        let config = AllocationConfig::default().with_preference_multiplier(-1.0);
        assert!(matches!(
            allocate(&problem, &config),
            Err(SeatingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_unknown_edges_reported() {
        let problem = SeatingProblem::new(guests(&["a", "b"]), vec![Table::new("t1", 2)])
            .with_relationships(vec![RelationshipEdge::new(
                "a",
                "ghost",
                RelationshipCategory::Friend,
            )]);
        let plan = allocate(&problem, &AllocationConfig::default()).unwrap();
        assert_eq!(plan.build_stats.unresolved_edges, 1);
        assert_eq!(plan.assigned_count(), 2);
    }

    struct ReverseRoster;

    impl RankingRule for ReverseRoster {
        fn name(&self) -> &str {
            "ReverseRoster"
        }
        fn score(&self, guest: usize, _matrix: &AffinityMatrix) -> f64 {
            -(guest as f64)
        }
    }

    #[test]
    fn test_custom_ranker() {
        let problem = SeatingProblem::new(
            guests(&["a", "b", "c"]),
            vec![Table::new("t1", 1), Table::new("t2", 1), Table::new("t3", 1)],
        );
        let plan = Allocator::new(AllocationConfig::default())
            .with_ranker(GuestRanker::new().with_rule(ReverseRoster))
            .run(&problem)
            .unwrap();
        assert_eq!(members(&plan, "t1"), vec!["c"]);
        assert_eq!(members(&plan, "t3"), vec!["a"]);
    }

    #[test]
    fn test_run_batch_keeps_order() {
        let ok = SeatingProblem::new(guests(&["a"]), vec![Table::new("t1", 1)]);
        let short = SeatingProblem::new(guests(&["a", "b"]), vec![Table::new("t1", 1)]);
        let results = Allocator::default().run_batch(&[ok, short]);

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(SeatingError::InsufficientCapacity { .. })
        ));
    }

    // ---- Properties ----

    fn problem_strategy() -> impl Strategy<Value = SeatingProblem> {
        (0usize..16)
            .prop_flat_map(|n| {
                let pair = (0..n.max(1), 0..n.max(1));
                (
                    Just(n),
                    prop::collection::vec((pair.clone(), 0usize..6), 0..24),
                    prop::collection::vec(pair, 0..6),
                    prop::collection::vec(1usize..6, 1..6),
                )
            })
            .prop_map(|(n, rels, blacklist, capacities)| {
                let name = |i: usize| format!("g{i}");
                let guests = (0..n).map(|i| Guest::new(name(i), name(i))).collect();
                let relationships = rels
                    .into_iter()
                    .map(|((a, b), c)| {
                        RelationshipEdge::new(name(a), name(b), RelationshipCategory::ALL[c])
                    })
                    .collect();
                let blacklist = blacklist
                    .into_iter()
                    .map(|(a, b)| BlacklistEdge::new(name(a), name(b)))
                    .collect();
                let tables = capacities
                    .into_iter()
                    .enumerate()
                    .map(|(i, c)| Table::new(format!("t{i}"), c))
                    .collect();
                SeatingProblem::new(guests, tables)
                    .with_relationships(relationships)
                    .with_blacklist(blacklist)
            })
    }

    proptest! {
        #[test]
        fn prop_capacity_respected_and_everyone_seated_once(problem in problem_strategy()) {
            let result = allocate(&problem, &AllocationConfig::default());
            if problem.guests.len() > problem.total_capacity() {
                let is_insufficient = matches!(result, Err(SeatingError::InsufficientCapacity { .. }));
                prop_assert!(is_insufficient);
            } else {
                let plan = result.expect("capacity is sufficient");
                for table in &plan.tables {
                    prop_assert!(table.guests.len() <= table.capacity);
                }
                for guest in &problem.guests {
                    let count = plan
                        .tables
                        .iter()
                        .flat_map(|t| t.guest_ids())
                        .filter(|g| **g == guest.id)
                        .count();
                    prop_assert_eq!(count, 1);
                }
                prop_assert_eq!(plan.assigned_count(), problem.guests.len());
            }
        }

        #[test]
        fn prop_deterministic(problem in problem_strategy()) {
            let config = AllocationConfig::default();
            prop_assert_eq!(allocate(&problem, &config), allocate(&problem, &config));
        }

        #[test]
        fn prop_matrix_symmetric(problem in problem_strategy()) {
            for mode in PreferenceMode::ALL {
                let matrix = AffinityBuilder::new(&problem.guests)
                    .with_relationships(&problem.relationships)
                    .with_blacklist(&problem.blacklist)
                    .with_mode(mode)
                    .build();
                prop_assert!(matrix.is_symmetric());
            }
        }

        #[test]
        fn prop_input_never_mutated(problem in problem_strategy()) {
            let snapshot = problem.clone();
            let _ = allocate(&problem, &AllocationConfig::default());
            prop_assert_eq!(problem, snapshot);
        }
    }
}
