//! Solutions: a set of driver routes.

use serde::Serialize;

use crate::config::SolveConfig;

use super::Route;

/// A complete assignment of loads to drivers.
///
/// Route order does not affect cost but is preserved for reporting.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::SolveConfig;
/// use u_dispatch::models::{Load, Point, Route, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::with_load(
///     Point::origin(),
///     Load::new(1, Point::new(3.0, 4.0), Point::new(3.0, 0.0)),
/// ));
/// assert_eq!(sol.num_routes(), 1);
/// assert!((sol.cost(&SolveConfig::default()) - 512.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates a solution with no routes.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Creates a solution from a list of routes.
    pub fn from_routes(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Adds a route to this solution.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Returns the routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes, i.e. drivers used.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of loads served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Total distance across all routes.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(Route::total_distance).sum()
    }

    /// Total empty-leg distance across all routes.
    pub fn empty_leg_distance(&self) -> f64 {
        self.routes.iter().map(Route::empty_leg_distance).sum()
    }

    /// Fixed driver cost plus distance driven.
    pub fn cost(&self, config: &SolveConfig) -> f64 {
        config.fixed_cost_per_driver * self.routes.len() as f64 + self.total_distance()
    }

    /// Load ids per route, in visiting order.
    pub fn load_ids(&self) -> Vec<Vec<usize>> {
        self.routes.iter().map(Route::load_ids).collect()
    }

    /// A serializable view for reporting.
    pub fn summary(&self, config: &SolveConfig) -> SolutionSummary {
        SolutionSummary {
            routes: self.load_ids(),
            drivers: self.num_routes(),
            total_distance: self.total_distance(),
            cost: self.cost(config),
        }
    }
}

/// What a reporter needs to print a solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionSummary {
    /// Load ids per route.
    pub routes: Vec<Vec<usize>>,
    /// Number of drivers.
    pub drivers: usize,
    /// Distance driven by all drivers.
    pub total_distance: f64,
    /// Scalar cost.
    pub cost: f64,
}
