//! Search coordination: run one or two engines and reconcile their results.

use std::collections::HashSet;

use gridpath_core::Point;

use crate::config::SearchMode;
use crate::distance::path_cost;
use crate::engine::{Exploration, Termination, explore};
use crate::reconcile::{fallback_target, meeting_point, reconstruct};
use crate::request::PathRequest;
use crate::traits::Obstacles;

/// How the returned path relates to the requested goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The path ends at the goal.
    Reached,
    /// The goal was not reached; the path ends at the best explored cell.
    Fallback,
    /// The path is just the start: start equals goal, or start is blocked.
    Degenerate,
}

/// Bookkeeping for one engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    pub termination: Termination,
    pub iterations: usize,
    /// Number of closed cells.
    pub explored: usize,
}

impl From<&Exploration> for SearchStats {
    fn from(ex: &Exploration) -> Self {
        Self {
            termination: ex.termination(),
            iterations: ex.iterations(),
            explored: ex.len(),
        }
    }
}

/// The answer to a [`PathRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Start→end cells; never empty, no repeated consecutive cells.
    pub path: Vec<Point>,
    pub outcome: Outcome,
    /// Every closed cell, start side first, for external rendering.
    pub explored: Vec<Point>,
    /// The start→goal search.
    pub forward: SearchStats,
    /// The goal→start search, in dual mode only.
    pub backward: Option<SearchStats>,
}

impl PathResult {
    /// Whether the path ends at the goal.
    pub fn reached_goal(&self) -> bool {
        self.outcome == Outcome::Reached
    }

    /// Last cell of the path.
    pub fn end(&self) -> Option<Point> {
        self.path.last().copied()
    }

    /// Euclidean length of the path.
    pub fn cost(&self) -> f32 {
        path_cost(&self.path)
    }
}

/// Find a path for `request` through `obstacles`.
///
/// In [`SearchMode::Single`] one engine runs on the calling thread. In
/// [`SearchMode::Dual`] a start→goal and a goal→start engine run
/// concurrently and both finish before their results are combined; when
/// neither reaches the goal the path leads, over the start side's explored
/// cells, to the start-side cell closest to anything the goal side explored.
///
/// Every request produces a path: unreachable goals and exhausted budgets
/// degrade to [`Outcome::Fallback`] instead of failing.
pub fn find_path<O: Obstacles + Sync + ?Sized>(request: &PathRequest, obstacles: &O) -> PathResult {
    let config = request.config();
    let (start, goal, bounds) = (request.start(), request.goal(), request.bounds());
    let budget = config.iteration_budget;

    let (forward, backward) = match config.mode {
        SearchMode::Single => (explore(start, goal, bounds, obstacles, budget), None),
        SearchMode::Dual => {
            let (f, b) = rayon::join(
                || explore(start, goal, bounds, obstacles, budget),
                || explore(goal, start, bounds, obstacles, budget),
            );
            (f, Some(b))
        }
    };

    let (path, outcome) = if forward.reached_target() {
        let outcome = if start == goal {
            Outcome::Degenerate
        } else {
            Outcome::Reached
        };
        (reconstruct(&forward, goal), outcome)
    } else if forward.is_empty() {
        (vec![start], Outcome::Degenerate)
    } else {
        let end = match &backward {
            Some(b) if !b.is_empty() => meeting_point(&forward, b).map(|(a, _)| a),
            _ => fallback_target(&forward, config.fallback),
        };
        let path = end.map_or_else(|| vec![start], |p| reconstruct(&forward, p));
        (path, Outcome::Fallback)
    };

    let explored = match &backward {
        None => forward.order().to_vec(),
        Some(b) => {
            let seen: HashSet<Point> = forward.order().iter().copied().collect();
            let mut all = forward.order().to_vec();
            all.extend(b.order().iter().copied().filter(|p| !seen.contains(p)));
            all
        }
    };

    log::debug!(
        "path {} -> {} ({:?}): {:?}, {} cells, cost {:.3}",
        start,
        goal,
        config.mode,
        outcome,
        path.len(),
        path_cost(&path)
    );

    PathResult {
        path,
        outcome,
        explored,
        forward: SearchStats::from(&forward),
        backward: backward.as_ref().map(SearchStats::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::distance::chebyshev;
    use gridpath_core::{ObstacleMap, Range};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn request(w: i32, h: i32, start: (i32, i32), goal: (i32, i32)) -> PathRequest {
        PathRequest::with_size(w, h, start.into(), goal.into()).unwrap()
    }

    fn obstacles(points: &[(i32, i32)]) -> HashSet<Point> {
        points.iter().map(|&p| Point::from(p)).collect()
    }

    fn assert_steps_are_adjacent(path: &[Point]) {
        for w in path.windows(2) {
            assert_eq!(chebyshev(w[0], w[1]), 1, "bad step {} -> {}", w[0], w[1]);
        }
    }

    fn assert_no_corner_cutting(path: &[Point], obstacles: &HashSet<Point>) {
        for w in path.windows(2) {
            let d = w[1] - w[0];
            if d.is_diagonal() {
                let pinched = obstacles.contains(&w[0].shift(d.x, 0))
                    && obstacles.contains(&w[0].shift(0, d.y));
                assert!(!pinched, "corner cut {} -> {}", w[0], w[1]);
            }
        }
    }

    fn random_field(seed: u64, size: i32, density: f64) -> HashSet<Point> {
        let mut rng = StdRng::seed_from_u64(seed);
        Range::sized(size, size)
            .iter()
            .filter(|_| rng.random_bool(density))
            .collect()
    }

    #[test]
    fn open_grid_paths_connect_start_and_goal() {
        let empty: HashSet<Point> = HashSet::new();
        for (start, goal) in [((0, 0), (9, 9)), ((9, 0), (0, 7)), ((3, 5), (3, 0)), ((0, 4), (8, 4))] {
            let r = request(10, 10, start, goal).search(&empty);
            assert_eq!(r.outcome, Outcome::Reached);
            assert_eq!(r.path.first(), Some(&Point::from(start)));
            assert_eq!(r.end(), Some(Point::from(goal)));
            assert_steps_are_adjacent(&r.path);
        }
    }

    #[test]
    fn five_by_five_diagonal() {
        let r = request(5, 5, (0, 0), (4, 4)).search(&HashSet::<Point>::new());
        assert_eq!(r.outcome, Outcome::Reached);
        assert_eq!(r.path.len(), 5);
        assert_eq!(r.path, (0..5).map(|i| Point::new(i, i)).collect::<Vec<_>>());
    }

    #[test]
    fn start_on_obstacle_returns_start() {
        let blocked = obstacles(&[(2, 2)]);
        for config in [SearchConfig::single(), SearchConfig::dual()] {
            let r = request(5, 5, (2, 2), (4, 0))
                .with_config(config)
                .unwrap()
                .search(&blocked);
            assert_eq!(r.path, vec![Point::new(2, 2)]);
            assert_eq!(r.outcome, Outcome::Degenerate);
            assert_eq!(r.forward.termination, Termination::StartBlocked);
        }
    }

    #[test]
    fn start_equal_goal_returns_start() {
        for config in [SearchConfig::single(), SearchConfig::dual()] {
            let r = request(5, 5, (3, 1), (3, 1))
                .with_config(config)
                .unwrap()
                .search(&HashSet::<Point>::new());
            assert_eq!(r.path, vec![Point::new(3, 1)]);
            assert_eq!(r.outcome, Outcome::Degenerate);
        }
    }

    #[test]
    fn pinched_diagonal_is_not_taken() {
        // 3x3, (1,0) and (0,1) flank the diagonal out of (0,0): the start is
        // sealed in, so the result is a fallback that never leaves it.
        let blocked = obstacles(&[(1, 0), (0, 1)]);
        let r = request(3, 3, (0, 0), (1, 1)).search(&blocked);
        assert_eq!(r.outcome, Outcome::Fallback);
        assert_eq!(r.path, vec![Point::new(0, 0)]);
        assert_eq!(r.forward.termination, Termination::FrontierExhausted);
    }

    #[test]
    fn pinched_diagonal_is_routed_around() {
        let blocked = obstacles(&[(2, 1), (1, 2)]);
        let r = request(4, 4, (1, 1), (2, 2)).search(&blocked);
        assert_eq!(r.outcome, Outcome::Reached);
        assert!(r.path.len() > 2);
        assert_steps_are_adjacent(&r.path);
        assert_no_corner_cutting(&r.path, &blocked);
    }

    #[test]
    fn solid_wall_falls_back_within_budget() {
        let wall: HashSet<Point> = (0..20).map(|y| Point::new(10, y)).collect();
        for config in [SearchConfig::single(), SearchConfig::dual()] {
            let config = config.with_budget(500);
            let r = request(20, 20, (2, 10), (17, 10))
                .with_config(config)
                .unwrap()
                .search(&wall);
            assert_eq!(r.outcome, Outcome::Fallback);
            assert!(!r.path.is_empty());
            assert_eq!(r.path[0], Point::new(2, 10));
            let end = r.end().unwrap();
            assert_ne!(end, Point::new(17, 10));
            assert!(r.explored.contains(&end));
            assert!(r.forward.iterations <= 501);
            assert_eq!(end.x, 9, "fallback should hug the wall, got {end}");
            assert_steps_are_adjacent(&r.path);
        }
    }

    #[test]
    fn budget_exhaustion_still_returns_a_path() {
        let r = request(200, 200, (0, 0), (199, 199))
            .with_config(SearchConfig::single().with_budget(10))
            .unwrap()
            .search(&HashSet::<Point>::new());
        assert_eq!(r.forward.termination, Termination::BudgetExhausted);
        assert_eq!(r.outcome, Outcome::Fallback);
        assert_eq!(r.path[0], Point::ZERO);
        assert!(r.path.len() > 1);
        assert_steps_are_adjacent(&r.path);
    }

    #[test]
    fn dual_and_single_agree_on_open_grid_cost() {
        let empty: HashSet<Point> = HashSet::new();
        for (start, goal) in [((0, 0), (4, 4)), ((1, 7), (14, 2)), ((12, 0), (0, 3))] {
            let single = request(16, 16, start, goal).search(&empty);
            let dual = request(16, 16, start, goal)
                .with_config(SearchConfig::dual())
                .unwrap()
                .search(&empty);
            assert_eq!(single.outcome, Outcome::Reached);
            assert_eq!(dual.outcome, Outcome::Reached);
            assert!((single.cost() - dual.cost()).abs() < 1e-4);
            assert!(dual.backward.is_some());
            assert!(single.backward.is_none());
        }
    }

    #[test]
    fn dual_meets_at_closest_approach() {
        let map = ObstacleMap::parse(
            "\
.......#.......
.S.....#.......
.......#.......
.......#.....G.
.......#.......",
        )
        .unwrap();
        let (s, g) = (map.start().unwrap(), map.goal().unwrap());
        let r = PathRequest::new(map.bounds(), s, g)
            .unwrap()
            .with_config(SearchConfig::dual())
            .unwrap()
            .search(&map);
        assert_eq!(r.outcome, Outcome::Fallback);
        let end = r.end().unwrap();
        assert_eq!(end.x, 6);
        assert_eq!(r.path[0], s);
        assert_steps_are_adjacent(&r.path);
        let backward = r.backward.unwrap();
        assert_eq!(backward.termination, Termination::FrontierExhausted);
        assert_eq!(r.explored.len(), r.forward.explored + backward.explored);
    }

    #[test]
    fn dual_with_blocked_goal_uses_score_fallback() {
        let blocked = obstacles(&[(4, 4)]);
        let r = request(5, 5, (0, 0), (4, 4))
            .with_config(SearchConfig::dual())
            .unwrap()
            .search(&blocked);
        assert_eq!(r.outcome, Outcome::Fallback);
        assert_eq!(r.backward.map(|b| b.termination), Some(Termination::StartBlocked));
        let end = r.end().unwrap();
        assert_eq!(chebyshev(end, Point::new(4, 4)), 1);
    }

    #[test]
    fn random_fields_respect_path_invariants() {
        for seed in 0..24 {
            let field = random_field(seed, 24, 0.3);
            let mut endpoints = Range::sized(24, 24).iter().filter(|p| !field.contains(p));
            let (Some(start), Some(goal)) = (endpoints.next(), endpoints.last()) else {
                continue;
            };
            for config in [SearchConfig::single(), SearchConfig::dual()] {
                let r = PathRequest::with_size(24, 24, start, goal)
                    .unwrap()
                    .with_config(config)
                    .unwrap()
                    .search(&field);
                assert_eq!(r.path[0], start);
                assert!(r.path[1..].iter().all(|p| !field.contains(p)));
                assert_steps_are_adjacent(&r.path);
                assert_no_corner_cutting(&r.path, &field);
                if r.outcome == Outcome::Reached {
                    assert_eq!(r.end(), Some(goal));
                }
            }
        }
    }

    #[test]
    fn repeated_searches_are_identical() {
        let field = random_field(7, 30, 0.35);
        for config in [SearchConfig::single(), SearchConfig::dual()] {
            let req = PathRequest::with_size(30, 30, Point::new(0, 15), Point::new(29, 15))
                .unwrap()
                .with_config(config.with_budget(300))
                .unwrap();
            let first = req.search(&field);
            for _ in 0..5 {
                assert_eq!(req.search(&field), first);
            }
        }
    }
}
