//! Cost and time-budget parameters shared by every strategy.

use serde::{Deserialize, Serialize};

use crate::models::Point;

/// Default fixed cost charged for each driver used.
pub const FIXED_COST_PER_DRIVER: f64 = 500.0;

/// Default length of a driver's day in minutes (12 hours).
pub const DAILY_TIME_BUDGET: f64 = 12.0 * 60.0;

/// Default minutes consumed per unit of distance.
pub const TIME_PER_DISTANCE: f64 = 1.0;

/// Parameters of the cost function and the per-driver time limit.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::SolveConfig;
///
/// let config = SolveConfig::default().with_daily_time_budget(480.0);
/// assert_eq!(config.fixed_cost_per_driver, 500.0);
/// assert_eq!(config.daily_time_budget, 480.0);
/// assert_eq!(config.travel_time(10.0), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveConfig {
    /// Cost added once per route in a solution.
    pub fixed_cost_per_driver: f64,
    /// Minutes a driver may spend on the road in one day.
    pub daily_time_budget: f64,
    /// Minutes consumed by one unit of distance.
    pub time_per_distance: f64,
    /// Start and end point of every route.
    pub depot: Point,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            fixed_cost_per_driver: FIXED_COST_PER_DRIVER,
            daily_time_budget: DAILY_TIME_BUDGET,
            time_per_distance: TIME_PER_DISTANCE,
            depot: Point::origin(),
        }
    }
}

impl SolveConfig {
    /// Sets the per-driver fixed cost.
    pub fn with_fixed_cost_per_driver(mut self, cost: f64) -> Self {
        self.fixed_cost_per_driver = cost;
        self
    }

    /// Sets the daily time budget in minutes.
    pub fn with_daily_time_budget(mut self, minutes: f64) -> Self {
        self.daily_time_budget = minutes;
        self
    }

    /// Sets minutes per unit distance.
    pub fn with_time_per_distance(mut self, ratio: f64) -> Self {
        self.time_per_distance = ratio;
        self
    }

    /// Moves the depot.
    pub fn with_depot(mut self, depot: Point) -> Self {
        self.depot = depot;
        self
    }

    /// Minutes needed to drive `distance`.
    pub fn travel_time(&self, distance: f64) -> f64 {
        distance * self.time_per_distance
    }

    /// Returns `true` if a route of this length fits in one day.
    pub fn fits_budget(&self, distance: f64) -> bool {
        self.travel_time(distance) <= self.daily_time_budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SolveConfig::default();
        assert_eq!(c.fixed_cost_per_driver, 500.0);
        assert_eq!(c.daily_time_budget, 720.0);
        assert_eq!(c.time_per_distance, 1.0);
        assert_eq!(c.depot, Point::origin());
    }

    #[test]
    fn test_fits_budget_with_ratio() {
        let c = SolveConfig::default().with_time_per_distance(2.0);
        assert!(c.fits_budget(360.0));
        assert!(!c.fits_budget(360.5));
    }

    #[test]
    fn test_deserialize_partial() {
        let c: SolveConfig =
            serde_json::from_str(r#"{"daily_time_budget": 600.0}"#).expect("valid json");
        assert_eq!(c.daily_time_budget, 600.0);
        assert_eq!(c.fixed_cost_per_driver, 500.0);
        assert_eq!(c.depot, Point::origin());
    }
}
