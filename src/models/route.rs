//! Driver routes.

use std::iter;

use crate::config::SolveConfig;

use super::{Load, Point};

/// The loads one driver services in one day, in visiting order.
///
/// A route starts and ends at its depot (not stored in `stops`). The total
/// distance is kept in step with the stop sequence: [`Route::push`] is the
/// only mutator and recomputes it.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point, Route};
///
/// let mut route = Route::new(Point::origin());
/// route.push(Load::new(1, Point::new(3.0, 4.0), Point::new(3.0, 0.0)));
/// assert_eq!(route.len(), 1);
/// // 5 to the pickup, 4 loaded, 3 back home
/// assert!((route.total_distance() - 12.0).abs() < 1e-10);
/// assert!((route.empty_leg_distance() - 8.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    depot: Point,
    stops: Vec<Load>,
    total_distance: f64,
}

impl Route {
    /// Creates an empty route based at `depot`.
    pub fn new(depot: Point) -> Self {
        Self {
            depot,
            stops: Vec::new(),
            total_distance: 0.0,
        }
    }

    /// Creates a route holding a single load.
    pub fn with_load(depot: Point, load: Load) -> Self {
        let mut route = Self::new(depot);
        route.push(load);
        route
    }

    /// Creates a route visiting `loads` in order.
    pub fn from_loads(depot: Point, loads: Vec<Load>) -> Self {
        let total_distance = route_distance(&depot, &loads);
        Self {
            depot,
            stops: loads,
            total_distance,
        }
    }

    /// Appends a load to the end of this route.
    pub fn push(&mut self, load: Load) {
        self.stops.push(load);
        self.total_distance = route_distance(&self.depot, &self.stops);
    }

    /// Start and end point of this route.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// Loads in visiting order.
    pub fn stops(&self) -> &[Load] {
        &self.stops
    }

    /// Number of loads on this route.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route services no loads.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Load ids in visiting order.
    pub fn load_ids(&self) -> Vec<usize> {
        self.stops.iter().map(Load::id).collect()
    }

    /// Where the driver currently stands: the last dropoff, or the depot.
    pub fn position(&self) -> Point {
        self.stops.last().map_or(self.depot, Load::dropoff)
    }

    /// Distance driven over the whole day, depot to depot.
    ///
    /// Zero for an empty route.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Distance driven without cargo: the depot legs plus every
    /// dropoff → next pickup repositioning leg.
    pub fn empty_leg_distance(&self) -> f64 {
        let loaded: f64 = self.stops.iter().map(Load::transport_distance).sum();
        self.total_distance - loaded
    }

    /// Distance from the current position to the pickup of `load`.
    pub fn arrival_cost(&self, load: &Load) -> f64 {
        self.position().distance_to(&load.pickup())
    }

    /// Total distance this route would have with `load` appended.
    ///
    /// Sums the legs in the same order as [`Route::push`], so a load
    /// accepted at the budget boundary stays within it once pushed. The
    /// route itself is untouched.
    pub fn distance_with(&self, load: &Load) -> f64 {
        route_distance(&self.depot, self.stops.iter().chain(iter::once(load)))
    }

    /// Minutes left in the driver's day; negative once over budget.
    pub fn time_remaining(&self, config: &SolveConfig) -> f64 {
        config.daily_time_budget - config.travel_time(self.total_distance)
    }

    /// Returns `true` if appending `load` keeps this route within budget.
    pub fn can_accept(&self, load: &Load, config: &SolveConfig) -> bool {
        config.fits_budget(self.distance_with(load))
    }
}

fn route_distance<'a>(depot: &Point, stops: impl IntoIterator<Item = &'a Load>) -> f64 {
    let mut total = 0.0;
    let mut position = *depot;
    for load in stops {
        total += position.distance_to(&load.pickup()) + load.transport_distance();
        position = load.dropoff();
    }
    total + position.distance_to(depot)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Three loads with transport legs of 165.5, 174.7 and 250.0 whose
    /// empty legs add up to 575.48.
    pub(crate) fn reference_loads() -> Vec<Load> {
        vec![
            Load::new(1, Point::new(142.64, 0.0), Point::new(308.14, 0.0)),
            Load::new(2, Point::new(308.14, 100.0), Point::new(482.84, 100.0)),
            Load::new(3, Point::new(482.84, 0.0), Point::new(232.84, 0.0)),
        ]
    }

    #[test]
    fn test_route_empty() {
        let r = Route::new(Point::origin());
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.total_distance(), 0.0);
        assert_eq!(r.empty_leg_distance(), 0.0);
        assert_eq!(r.position(), Point::origin());
    }

    #[test]
    fn test_transport_legs() {
        let expected = [165.5, 174.7, 250.0];
        for (load, want) in reference_loads().iter().zip(expected) {
            assert!((load.transport_distance() - want).abs() < 0.05);
        }
    }

    #[test]
    fn test_three_load_total_distance() {
        let r = Route::from_loads(Point::origin(), reference_loads());
        assert!((r.total_distance() - 1165.68).abs() < 0.05);
        assert_eq!(r.load_ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_three_load_empty_legs() {
        let r = Route::from_loads(Point::origin(), reference_loads());
        assert!((r.empty_leg_distance() - 575.48).abs() < 0.05);
    }

    #[test]
    fn test_zero_transport_load() {
        let p = Point::new(30.0, 40.0);
        let r = Route::with_load(Point::origin(), Load::new(9, p, p));
        assert!((r.total_distance() - 100.0).abs() < 1e-10);
        assert!((r.empty_leg_distance() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_push_matches_from_loads() {
        let mut pushed = Route::new(Point::origin());
        for load in reference_loads() {
            pushed.push(load);
        }
        let built = Route::from_loads(Point::origin(), reference_loads());
        assert!((pushed.total_distance() - built.total_distance()).abs() < 1e-9);
    }

    #[test]
    fn test_distance_with_matches_push() {
        let loads = reference_loads();
        let mut r = Route::with_load(Point::origin(), loads[0].clone());
        let predicted = r.distance_with(&loads[1]);
        let before = r.clone();
        r.push(loads[1].clone());
        assert!((predicted - r.total_distance()).abs() < 1e-9);
        // Predicting did not change the original.
        assert_eq!(before.len(), 1);
    }

    #[test]
    fn test_arrival_cost() {
        let loads = reference_loads();
        let empty = Route::new(Point::origin());
        assert!((empty.arrival_cost(&loads[0]) - 142.64).abs() < 1e-9);
        let r = Route::with_load(Point::origin(), loads[0].clone());
        assert!((r.arrival_cost(&loads[1]) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_accept_at_exact_budget_stays_within_after_push() {
        let mut route = Route::new(Point::origin());
        for i in 1..=40 {
            let a = i as f64 * 1.7;
            let load = Load::new(
                i,
                Point::new(a.cos() * 97.3, a.sin() * 61.9),
                Point::new(a.sin() * 83.1, a.cos() * -45.7),
            );
            let boundary = SolveConfig::default().with_daily_time_budget(route.distance_with(&load));
            assert!(route.can_accept(&load, &boundary));
            route.push(load);
            assert!(boundary.fits_budget(route.total_distance()));
            assert_eq!(route.time_remaining(&boundary), 0.0);
        }
    }

    #[test]
    fn test_time_remaining_and_can_accept() {
        let config = SolveConfig::default();
        let loads = reference_loads();
        let r = Route::with_load(Point::origin(), loads[0].clone());
        // 142.64 + 165.5 + 308.14
        assert!((r.time_remaining(&config) - (720.0 - 616.28)).abs() < 1e-9);
        assert!(!r.can_accept(&loads[1], &config));

        let roomy = config.with_daily_time_budget(2000.0);
        assert!(r.can_accept(&loads[1], &roomy));
    }

    #[test]
    fn test_over_budget_is_negative() {
        let config = SolveConfig::default();
        let r = Route::from_loads(Point::origin(), reference_loads());
        assert!(r.time_remaining(&config) < 0.0);
    }
}
