//! **gridpath-core** — grid primitives for the *gridpath* search crates.
//!
//! This crate provides the types every search shares: cell coordinates and
//! bounds ([`Point`], [`Range`]), the validated uniform grid with its
//! cell↔world mapping ([`Grid`]), and text-defined obstacle maps
//! ([`ObstacleMap`]).

pub mod geom;
pub mod grid;
pub mod map;

pub use geom::{Point, Range};
pub use grid::{Grid, GridError, GridSettings};
pub use map::{MapError, ObstacleMap};
