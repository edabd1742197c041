use std::fmt;

use gridpath_core::{Grid, Point, Range};

use crate::config::{FallbackWeights, SearchConfig};
use crate::search::{PathResult, find_path};
use crate::traits::Obstacles;

/// A validated search request: grid bounds, endpoints and configuration.
///
/// All structural checks happen here, so a constructed request can always
/// be searched and always yields a non-empty path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathRequest {
    bounds: Range,
    start: Point,
    goal: Point,
    config: SearchConfig,
}

impl PathRequest {
    /// Create a request within `bounds` using the default configuration.
    ///
    /// `bounds` must be a grid range `[0, width) × [0, height)`.
    pub fn new(bounds: Range, start: Point, goal: Point) -> Result<Self, RequestError> {
        if bounds.is_empty() {
            return Err(RequestError::EmptyBounds(bounds));
        }
        if bounds.min != Point::ZERO {
            return Err(RequestError::UnanchoredBounds(bounds));
        }
        if !bounds.contains(start) {
            return Err(RequestError::StartOutOfBounds { start, bounds });
        }
        if !bounds.contains(goal) {
            return Err(RequestError::GoalOutOfBounds { goal, bounds });
        }
        Ok(Self {
            bounds,
            start,
            goal,
            config: SearchConfig::default(),
        })
    }

    /// Create a request on a `width × height` grid.
    pub fn with_size(width: i32, height: i32, start: Point, goal: Point) -> Result<Self, RequestError> {
        if width <= 0 || height <= 0 {
            return Err(RequestError::InvalidDimensions { width, height });
        }
        Self::new(Range::sized(width, height), start, goal)
    }

    /// Create a request covering all cells of `grid`.
    pub fn on_grid(grid: &Grid, start: Point, goal: Point) -> Result<Self, RequestError> {
        Self::new(grid.bounds(), start, goal)
    }

    /// Replace the configuration, rejecting negative or non-finite fallback
    /// weights.
    pub fn with_config(self, config: SearchConfig) -> Result<Self, RequestError> {
        check_weights(config.fallback)?;
        Ok(Self { config, ..self })
    }

    pub fn bounds(&self) -> Range {
        self.bounds
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the search against `obstacles`. See [`find_path`].
    pub fn search<O: Obstacles + Sync + ?Sized>(&self, obstacles: &O) -> PathResult {
        find_path(self, obstacles)
    }
}

fn check_weights(w: FallbackWeights) -> Result<(), RequestError> {
    for (name, value) in [("h_weight", w.h_weight), ("parent_weight", w.parent_weight)] {
        if !value.is_finite() || value < 0.0 {
            return Err(RequestError::InvalidWeight { name, value });
        }
    }
    Ok(())
}

/// Structurally invalid search input.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Width or height is zero or negative.
    InvalidDimensions { width: i32, height: i32 },
    /// The search bounds contain no cells.
    EmptyBounds(Range),
    /// The search bounds do not start at cell (0, 0).
    UnanchoredBounds(Range),
    /// The start cell lies outside the bounds.
    StartOutOfBounds { start: Point, bounds: Range },
    /// The goal cell lies outside the bounds.
    GoalOutOfBounds { goal: Point, bounds: Range },
    /// A fallback weight is negative or not finite.
    InvalidWeight { name: &'static str, value: f32 },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid argument: grid dimensions {width}x{height}")
            }
            Self::EmptyBounds(bounds) => write!(f, "invalid argument: empty bounds {bounds}"),
            Self::UnanchoredBounds(bounds) => {
                write!(f, "invalid argument: bounds {bounds} do not start at (0, 0)")
            }
            Self::StartOutOfBounds { start, bounds } => {
                write!(f, "invalid argument: start {start} outside {bounds}")
            }
            Self::GoalOutOfBounds { goal, bounds } => {
                write!(f, "invalid argument: goal {goal} outside {bounds}")
            }
            Self::InvalidWeight { name, value } => {
                write!(f, "invalid argument: fallback {name} = {value}")
            }
        }
    }
}

impl std::error::Error for RequestError {}
