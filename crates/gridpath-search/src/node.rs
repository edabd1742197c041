use gridpath_core::Point;

use crate::distance::euclidean;

/// Search state at one grid cell.
///
/// `h` is fixed when the node is first opened; `g` may only decrease while
/// the node is still open. The root of a search is its own parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub coord: Point,
    pub parent: Point,
    /// Accumulated cost from the search origin.
    pub g: f32,
    /// Estimated remaining cost to the target.
    pub h: f32,
}

impl Node {
    /// The origin node of a search from `coord` towards `target`.
    pub fn root(coord: Point, target: Point) -> Self {
        Self {
            coord,
            parent: coord,
            g: 0.0,
            h: euclidean(coord, target),
        }
    }

    /// Total estimated cost through this node.
    #[inline]
    pub fn f(&self) -> f32 {
        self.g + self.h
    }

    /// Whether this node is the origin of its search.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent == self.coord
    }
}
