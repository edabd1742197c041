//! Turning explored-node maps into paths.
//!
//! A search that closed its target yields the direct path. One that did not
//! is steered to the most promising explored cell instead, chosen either by
//! the fallback score ([`fallback_target`]) or, with two searches, by the
//! closest approach of their explored sets ([`meeting_point`]).

use std::collections::HashMap;

use gridpath_core::Point;

use crate::config::FallbackWeights;
use crate::distance::euclidean_sq;
use crate::engine::Exploration;

/// Walk parent links from `to` back to the exploration's origin and return
/// the path in origin→`to` order, ending with `to`.
///
/// If `to` was not closed the result is just `[to]`.
pub fn reconstruct(exploration: &Exploration, to: Point) -> Vec<Point> {
    let mut path = vec![to];
    let mut cur = to;
    while let Some(node) = exploration.get(cur) {
        if node.is_root() || path.len() > exploration.len() {
            break;
        }
        cur = node.parent;
        path.push(cur);
    }
    path.reverse();
    path
}

/// Number of parent links between every closed node and the origin.
pub fn parent_hops(exploration: &Exploration) -> HashMap<Point, usize> {
    let mut hops: HashMap<Point, usize> = HashMap::with_capacity(exploration.len());
    // Parents are always closed before their children.
    for node in exploration.nodes() {
        let n = if node.is_root() {
            0
        } else {
            hops.get(&node.parent).map_or(0, |h| h + 1)
        };
        hops.insert(node.coord, n);
    }
    hops
}

/// Pick the explored cell to head for when the target was never closed.
///
/// Each closed node is scored `h * h_weight - hops * parent_weight`, where
/// `hops` is its distance in parent links from the origin; the lowest score
/// wins, earliest expansion first on ties. Returns `None` only for an empty
/// exploration.
pub fn fallback_target(exploration: &Exploration, weights: FallbackWeights) -> Option<Point> {
    let hops = parent_hops(exploration);
    let mut best: Option<(Point, f32)> = None;
    for node in exploration.nodes() {
        let depth = hops.get(&node.coord).copied().unwrap_or(0);
        let score = node.h * weights.h_weight - depth as f32 * weights.parent_weight;
        if best.is_none_or(|(_, s)| score < s) {
            best = Some((node.coord, score));
        }
    }
    best.map(|(p, _)| p)
}

/// The pair `(a, b)` with `a` closed by `forward` and `b` closed by
/// `backward` that lie closest together.
///
/// The first minimum in expansion order wins. Returns `None` if either
/// exploration is empty.
pub fn meeting_point(forward: &Exploration, backward: &Exploration) -> Option<(Point, Point)> {
    let mut best: Option<(Point, Point, i64)> = None;
    for &a in forward.order() {
        for &b in backward.order() {
            let d = euclidean_sq(a, b);
            if best.is_none_or(|(_, _, bd)| d < bd) {
                best = Some((a, b, d));
                if d == 0 {
                    return Some((a, b));
                }
            }
        }
    }
    best.map(|(a, b, _)| (a, b))
}
