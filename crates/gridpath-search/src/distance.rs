use gridpath_core::Point;

/// Euclidean (L2) distance between two points.
///
/// Used both for step costs and for the heuristic, so estimates never
/// exceed the true remaining cost.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f32 {
    let dx = (a.x - b.x) as f32;
    let dy = (a.y - b.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Squared Euclidean distance, exact in integers.
#[inline]
pub(crate) fn euclidean_sq(a: Point, b: Point) -> i64 {
    let dx = i64::from(a.x - b.x);
    let dy = i64::from(a.y - b.y);
    dx * dx + dy * dy
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Total Euclidean length of a path.
pub fn path_cost(path: &[Point]) -> f32 {
    path.windows(2).map(|w| euclidean(w[0], w[1])).sum()
}
