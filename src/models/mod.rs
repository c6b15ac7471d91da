//! Domain model types for load dispatching.
//!
//! Provides the core abstractions: planar points, point-to-point loads,
//! driver routes as ordered load sequences, solutions as sets of routes,
//! and a validated problem instance.

mod load;
mod point;
mod problem;
pub(crate) mod route;
mod solution;

pub use load::Load;
pub use point::{distance, Point};
pub use problem::Problem;
pub use route::Route;
pub use solution::{Solution, SolutionSummary};
