//! Obstacle maps built from text.
//!
//! An [`ObstacleMap`] parses an ASCII picture of a grid into a set of
//! blocked cells, with optional start and goal markers:
//!
//! | Char | Meaning |
//! |---|---|
//! | `#` | obstacle |
//! | `.` | free cell |
//! | `S` | free cell, search start |
//! | `G` | free cell, search goal |
//!
//! Row 0 is the first line of the text.

use crate::geom::{Point, Range};
use std::collections::HashSet;
use std::fmt;

/// Character drawn for path cells by [`ObstacleMap::render`].
pub const PATH_RUNE: char = '*';
/// Character drawn for explored, non-path cells by [`ObstacleMap::render`].
pub const EXPLORED_RUNE: char = ',';

/// A rectangular map of blocked cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleMap {
    size: Point,
    blocked: HashSet<Point>,
    start: Option<Point>,
    goal: Option<Point>,
}

impl ObstacleMap {
    /// Create an obstacle-free map of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Point::new(width.max(0), height.max(0)),
            ..Self::default()
        }
    }

    /// Parse a map from text.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines. All lines must have the same width.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }
        let mut map = Self::default();
        let mut width: Option<i32> = None;
        let mut y = 0;
        for line in s.lines() {
            let mut x = 0;
            for ch in line.chars() {
                let p = Point::new(x, y);
                match ch {
                    '#' => {
                        map.blocked.insert(p);
                    }
                    '.' => {}
                    'S' => set_marker(&mut map.start, ch, p)?,
                    'G' => set_marker(&mut map.goal, ch, p)?,
                    _ => return Err(MapError::InvalidRune { ch, pos: p }),
                }
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => return Err(MapError::InconsistentWidth { line: y }),
                Some(_) => {}
            }
            y += 1;
        }
        map.size = Point::new(width.unwrap_or(0), y);
        Ok(map)
    }

    /// Width and height of the map.
    pub fn size(&self) -> Point {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// The range of valid cells.
    pub fn bounds(&self) -> Range {
        Range::sized(self.size.x, self.size.y)
    }

    /// Start marker, if the text contained an `S`.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Goal marker, if the text contained a `G`.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// The set of blocked cells.
    pub fn blocked(&self) -> &HashSet<Point> {
        &self.blocked
    }

    /// Whether `p` is an obstacle.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.blocked.contains(&p)
    }

    /// Mark `p` as blocked. Points outside the map are ignored.
    pub fn block(&mut self, p: Point) {
        if self.bounds().contains(p) {
            self.blocked.insert(p);
        }
    }

    /// Clear the obstacle at `p`, if any.
    pub fn unblock(&mut self, p: Point) {
        self.blocked.remove(&p);
    }

    /// Draw the map back to text, overlaying explored cells and a path.
    ///
    /// Path cells take precedence over explored cells; obstacles and the
    /// `S`/`G` markers take precedence over both.
    pub fn render(&self, path: &[Point], explored: &[Point]) -> String {
        let path: HashSet<Point> = path.iter().copied().collect();
        let explored: HashSet<Point> = explored.iter().copied().collect();
        let mut out = String::with_capacity(self.bounds().len() + self.size.y as usize);
        for p in self.bounds() {
            let ch = if self.blocked.contains(&p) {
                '#'
            } else if Some(p) == self.start {
                'S'
            } else if Some(p) == self.goal {
                'G'
            } else if path.contains(&p) {
                PATH_RUNE
            } else if explored.contains(&p) {
                EXPLORED_RUNE
            } else {
                '.'
            };
            out.push(ch);
            if p.x == self.size.x - 1 && p.y != self.size.y - 1 {
                out.push('\n');
            }
        }
        out
    }
}

fn set_marker(slot: &mut Option<Point>, ch: char, pos: Point) -> Result<(), MapError> {
    if let Some(first) = *slot {
        return Err(MapError::DuplicateMarker { ch, first, pos });
    }
    *slot = Some(pos);
    Ok(())
}

/// Errors that can occur when parsing an obstacle map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The text contains no cells.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth { line: i32 },
    /// A character outside `#.SG` was found.
    InvalidRune { ch: char, pos: Point },
    /// An `S` or `G` marker appears more than once.
    DuplicateMarker { ch: char, first: Point, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: empty"),
            Self::InconsistentWidth { line } => {
                write!(f, "map: line {line} has inconsistent width")
            }
            Self::InvalidRune { ch, pos } => {
                write!(f, "map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, first, pos } => {
                write!(f, "map: second '{ch}' marker at {pos} (first at {first})")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
S...
.##.
...G";

    #[test]
    fn parse_size_and_markers() {
        let m = ObstacleMap::parse(ROOM).unwrap();
        assert_eq!(m.size(), Point::new(4, 3));
        assert_eq!(m.start(), Some(Point::new(0, 0)));
        assert_eq!(m.goal(), Some(Point::new(3, 2)));
        assert_eq!(m.blocked().len(), 2);
        assert!(m.is_blocked(Point::new(1, 1)));
        assert!(m.is_blocked(Point::new(2, 1)));
        assert!(!m.is_blocked(Point::new(0, 1)));
    }

    #[test]
    fn inconsistent_width_error() {
        assert_eq!(
            ObstacleMap::parse("..\n..."),
            Err(MapError::InconsistentWidth { line: 1 })
        );
    }

    #[test]
    fn invalid_rune_error() {
        let err = ObstacleMap::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn duplicate_marker_error() {
        let err = ObstacleMap::parse("S.S\n..G").unwrap_err();
        assert_eq!(
            err,
            MapError::DuplicateMarker {
                ch: 'S',
                first: Point::new(0, 0),
                pos: Point::new(2, 0)
            }
        );
        assert!(err.to_string().contains("(2, 0)"));
        assert!(matches!(
            ObstacleMap::parse("SG.\n..G"),
            Err(MapError::DuplicateMarker { ch: 'G', .. })
        ));
    }

    #[test]
    fn empty_text_error() {
        assert_eq!(ObstacleMap::parse("  \n "), Err(MapError::Empty));
    }

    #[test]
    fn block_ignores_out_of_range() {
        let mut m = ObstacleMap::new(3, 3);
        m.block(Point::new(1, 1));
        m.block(Point::new(5, 1));
        assert_eq!(m.blocked().len(), 1);
        m.unblock(Point::new(1, 1));
        assert!(m.blocked().is_empty());
    }

    #[test]
    fn render_overlays_path_and_explored() {
        let m = ObstacleMap::parse(ROOM).unwrap();
        let path = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(3, 1),
            Point::new(3, 2),
        ];
        let explored = [Point::new(0, 1), Point::new(1, 0)];
        assert_eq!(m.render(&path, &explored), "S**.\n,##*\n...G");
    }

    #[test]
    fn render_round_trips_plain_map() {
        let m = ObstacleMap::parse(ROOM).unwrap();
        assert_eq!(m.render(&[], &[]), ROOM);
    }
}
