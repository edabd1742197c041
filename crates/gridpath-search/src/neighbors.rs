use gridpath_core::{Point, Range};

use crate::traits::Obstacles;

/// The eight step offsets, clockwise starting north: four orthogonal and
/// four diagonal moves.
pub const OFFSETS: [Point; 8] = [
    Point::new(0, 1),
    Point::new(1, 1),
    Point::new(1, 0),
    Point::new(1, -1),
    Point::new(0, -1),
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
];

/// Cached neighbor computation helper.
///
/// Enumerates the cells reachable in one step from a grid point, reusing an
/// internal buffer between calls.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the 8-directional neighbors of `p` that a single step may
    /// enter: inside `bounds`, not blocked, and not a diagonal squeezing
    /// between two blocked orthogonal cells.
    pub fn walkable<O: Obstacles + ?Sized>(
        &mut self,
        p: Point,
        bounds: Range,
        obstacles: &O,
    ) -> &[Point] {
        self.buf.clear();
        for d in OFFSETS {
            let n = p + d;
            if !bounds.contains(n) || obstacles.is_blocked(n) {
                continue;
            }
            if d.is_diagonal()
                && obstacles.is_blocked(p.shift(d.x, 0))
                && obstacles.is_blocked(p.shift(0, d.y))
            {
                continue;
            }
            self.buf.push(n);
        }
        &self.buf
    }
}
