//! The uniform cell grid: dimensions, bounds and cell↔world mapping.
//!
//! A [`Grid`] is built from [`GridSettings`] and validated once, so that
//! everything downstream can rely on positive dimensions and a usable cell
//! size.

use crate::geom::{Point, Range};
use std::fmt;

/// Construction parameters for a [`Grid`].
///
/// World positions are planar `(x, y)` pairs; cell `(0, 0)` starts at
/// `origin` and cells extend towards positive x and y.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSettings {
    pub width: i32,
    pub height: i32,
    pub cell_size: f32,
    pub origin: (f32, f32),
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            cell_size: 1.0,
            origin: (0.0, 0.0),
        }
    }
}

/// A validated, fixed-size uniform grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    settings: GridSettings,
}

impl Grid {
    /// Create a grid of `width × height` unit cells anchored at the world
    /// origin.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        Self::with_settings(GridSettings {
            width,
            height,
            ..GridSettings::default()
        })
    }

    /// Create a grid from full settings, rejecting non-positive dimensions
    /// and non-positive or non-finite cell sizes.
    pub fn with_settings(settings: GridSettings) -> Result<Self, GridError> {
        if settings.width <= 0 || settings.height <= 0 {
            return Err(GridError::InvalidDimensions {
                width: settings.width,
                height: settings.height,
            });
        }
        if !settings.cell_size.is_finite() || settings.cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize(settings.cell_size));
        }
        Ok(Self { settings })
    }

    /// The settings this grid was built from.
    pub fn settings(&self) -> GridSettings {
        self.settings
    }

    pub fn width(&self) -> i32 {
        self.settings.width
    }

    pub fn height(&self) -> i32 {
        self.settings.height
    }

    pub fn cell_size(&self) -> f32 {
        self.settings.cell_size
    }

    /// The `[0, width) × [0, height)` range of valid cells.
    pub fn bounds(&self) -> Range {
        Range::sized(self.settings.width, self.settings.height)
    }

    /// Whether `p` is a valid cell of this grid.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Clamp `p` to the nearest valid cell.
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(0, self.settings.width - 1),
            p.y.clamp(0, self.settings.height - 1),
        )
    }

    /// World position of the centre of cell `p` (clamped into the grid).
    pub fn cell_to_world(&self, p: Point) -> (f32, f32) {
        let p = self.clamp(p);
        let size = self.settings.cell_size;
        let (ox, oy) = self.settings.origin;
        (
            (p.x as f32 + 0.5) * size + ox,
            (p.y as f32 + 0.5) * size + oy,
        )
    }

    /// The cell containing a world position, clamped into the grid.
    pub fn world_to_cell(&self, pos: (f32, f32)) -> Point {
        let size = self.settings.cell_size;
        let (ox, oy) = self.settings.origin;
        let x = ((pos.0 - ox) / size).floor() as i32;
        let y = ((pos.1 - oy) / size).floor() as i32;
        self.clamp(Point::new(x, y))
    }

    /// Snap a world position to the centre of the cell containing it.
    pub fn snap_to_cell(&self, pos: (f32, f32)) -> (f32, f32) {
        self.cell_to_world(self.world_to_cell(pos))
    }
}

/// Errors that can occur when building a [`Grid`].
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Width or height is zero or negative.
    InvalidDimensions { width: i32, height: i32 },
    /// Cell size is zero, negative, or not finite.
    InvalidCellSize(f32),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid: invalid dimensions {width}x{height}")
            }
            Self::InvalidCellSize(size) => write!(f, "grid: invalid cell size {size}"),
        }
    }
}

impl std::error::Error for GridError {}
