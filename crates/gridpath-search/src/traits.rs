use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use gridpath_core::{ObstacleMap, Point};

/// Read-only obstacle membership, queried by the search for every candidate
/// cell.
///
/// Dual-direction searches share one obstacle set between two workers, so
/// [`find_path`](crate::find_path) additionally requires `Sync`.
pub trait Obstacles {
    /// Whether `p` is blocked.
    fn is_blocked(&self, p: Point) -> bool;
}

impl<S: BuildHasher> Obstacles for HashSet<Point, S> {
    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        self.contains(&p)
    }
}

impl Obstacles for BTreeSet<Point> {
    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        self.contains(&p)
    }
}

impl Obstacles for [Point] {
    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        self.contains(&p)
    }
}

impl Obstacles for ObstacleMap {
    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        ObstacleMap::is_blocked(self, p)
    }
}

impl<T: Obstacles + ?Sized> Obstacles for &T {
    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        (**self).is_blocked(p)
    }
}
