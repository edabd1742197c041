//! Single-direction budgeted A* expansion.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use gridpath_core::{Point, Range};

use crate::distance::euclidean;
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::node::Node;
use crate::traits::Obstacles;

/// Why an expansion loop stopped. None of these is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The target was closed.
    GoalReached,
    /// Every reachable cell was closed without meeting the target.
    FrontierExhausted,
    /// The iteration budget ran out first.
    BudgetExhausted,
    /// The origin itself is an obstacle; nothing was explored.
    StartBlocked,
}

/// The closed set produced by one call to [`explore`].
///
/// Nodes are kept together with the order in which they were closed, so
/// anything that scans the explored cells does so deterministically.
#[derive(Debug, Clone)]
pub struct Exploration {
    origin: Point,
    target: Point,
    closed: HashMap<Point, Node>,
    order: Vec<Point>,
    iterations: usize,
    termination: Termination,
}

impl Exploration {
    fn new(origin: Point, target: Point) -> Self {
        Self {
            origin,
            target,
            closed: HashMap::new(),
            order: Vec::new(),
            iterations: 0,
            termination: Termination::FrontierExhausted,
        }
    }

    /// Where this search started.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// What this search was heading for.
    pub fn target(&self) -> Point {
        self.target
    }

    /// The finalized node at `p`, if `p` was closed.
    pub fn get(&self, p: Point) -> Option<&Node> {
        self.closed.get(&p)
    }

    /// Whether `p` was closed.
    pub fn contains(&self, p: Point) -> bool {
        self.closed.contains_key(&p)
    }

    /// Whether the target was closed.
    pub fn reached_target(&self) -> bool {
        self.contains(self.target)
    }

    /// Closed coordinates in expansion order.
    pub fn order(&self) -> &[Point] {
        &self.order
    }

    /// Closed nodes in expansion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.order.iter().filter_map(|p| self.closed.get(p))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Expansions counted against the budget.
    ///
    /// Closing the target ends the search before it is counted, so on
    /// [`Termination::GoalReached`] this is one less than [`len`](Self::len).
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    fn close(&mut self, node: Node) {
        self.order.push(node.coord);
        self.closed.insert(node.coord, node);
    }
}

/// Run an 8-way A* search from `origin` towards `target`.
///
/// Cells outside `bounds` and cells in `obstacles` are never entered, and a
/// diagonal step is refused when both orthogonal cells it passes are blocked.
/// Step costs and the heuristic are both Euclidean.
///
/// The loop ends when the target is closed, when the frontier empties, or
/// when more than `budget` nodes have been expanded. Whatever was closed up
/// to that point is returned; reconstructing a path from it is up to
/// [`reconcile`](crate::reconcile).
///
/// An `origin` that is itself an obstacle yields an empty exploration with
/// [`Termination::StartBlocked`].
pub fn explore<O: Obstacles + ?Sized>(
    origin: Point,
    target: Point,
    bounds: Range,
    obstacles: &O,
    budget: usize,
) -> Exploration {
    let mut out = Exploration::new(origin, target);

    if obstacles.is_blocked(origin) {
        log::warn!("search origin {origin} is an obstacle");
        out.termination = Termination::StartBlocked;
        return out;
    }

    let mut open: HashMap<Point, Node> = HashMap::new();
    let mut frontier = Frontier::new();
    let mut neighbors = Neighbors::new();

    let root = Node::root(origin, target);
    open.insert(origin, root);
    frontier.insert(root);

    out.termination = loop {
        let Some(popped) = frontier.pop() else {
            break Termination::FrontierExhausted;
        };

        // Skip stale entries left behind by relaxation.
        if out.contains(popped.coord) {
            continue;
        }
        let Some(current) = open.remove(&popped.coord) else {
            continue;
        };

        log::trace!(
            "close {} g={:.3} f={:.3} (frontier {})",
            current.coord,
            current.g,
            current.f(),
            frontier.len()
        );
        out.close(current);

        if current.coord == target {
            break Termination::GoalReached;
        }

        for &np in neighbors.walkable(current.coord, bounds, obstacles) {
            if out.contains(np) {
                continue;
            }
            let tentative_g = current.g + euclidean(current.coord, np);

            match open.entry(np) {
                Entry::Occupied(mut e) => {
                    let n = e.get_mut();
                    if tentative_g < n.g {
                        n.g = tentative_g;
                        n.parent = current.coord;
                        frontier.insert(*n);
                    }
                }
                Entry::Vacant(e) => {
                    let n = Node {
                        coord: np,
                        parent: current.coord,
                        g: tentative_g,
                        h: euclidean(np, target),
                    };
                    e.insert(n);
                    frontier.insert(n);
                }
            }
        }

        out.iterations += 1;
        if out.iterations > budget {
            break Termination::BudgetExhausted;
        }
    };

    log::debug!(
        "search {} -> {}: {:?} after {} iterations, {} closed",
        origin,
        target,
        out.termination,
        out.iterations,
        out.len()
    );
    out
}
