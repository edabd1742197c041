//! Budgeted A* pathfinding on obstacle grids.
//!
//! This crate finds a route between two cells of a fixed-size grid while
//! avoiding static obstacles:
//!
//! - **8-way A\*** with Euclidean step costs ([`explore`])
//! - **Corner-cutting prevention**: a diagonal step may not squeeze between
//!   two blocked orthogonal cells ([`Neighbors::walkable`])
//! - **Bounded work**: every search stops after a fixed number of expansions
//!   ([`SearchConfig::iteration_budget`])
//! - **Graceful fallback**: when the goal is not reached, the path leads to
//!   the most promising explored cell instead ([`reconcile`])
//! - **Dual-direction mode**: two concurrent searches from each endpoint,
//!   reconciled at their closest approach ([`SearchMode::Dual`])
//!
//! Searches are described by a validated [`PathRequest`] and run through
//! [`find_path`]. Every valid request yields a non-empty path.
//!
//! ```
//! use std::collections::HashSet;
//! use gridpath_core::Point;
//! use gridpath_search::{PathRequest, Outcome};
//!
//! let start = Point::new(0, 0);
//! let goal = Point::new(4, 4);
//! let request = PathRequest::with_size(5, 5, start, goal).unwrap();
//! let result = request.search(&HashSet::<Point>::new());
//! assert_eq!(result.outcome, Outcome::Reached);
//! assert_eq!(result.path.len(), 5);
//! ```

mod config;
mod distance;
mod engine;
mod frontier;
mod neighbors;
mod node;
pub mod reconcile;
mod request;
mod search;
mod traits;

pub use config::{DEFAULT_ITERATION_BUDGET, FallbackWeights, SearchConfig, SearchMode};
pub use distance::{chebyshev, euclidean, path_cost};
pub use engine::{Exploration, Termination, explore};
pub use frontier::Frontier;
pub use neighbors::{Neighbors, OFFSETS};
pub use node::Node;
pub use request::{PathRequest, RequestError};
pub use search::{Outcome, PathResult, SearchStats, find_path};
pub use traits::Obstacles;
