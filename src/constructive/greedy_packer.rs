//! Greedy bin-packing baseline.
//!
//! # Algorithm
//!
//! Sorts loads by their own pickup → dropoff distance, longest first, then
//! places each one on the open route whose driver is closest to its pickup
//! and can still make it home in time. A new route is opened whenever no
//! open route can take the load.
//!
//! Decisions are never revisited: this is a single forward pass, kept as a
//! comparison baseline for the nearest-neighbor constructor.
//!
//! # Complexity
//!
//! O(n · R log R) where n = number of loads, R = number of routes.

use tracing::debug;

use crate::config::SolveConfig;
use crate::models::{Load, Route, Solution};

/// Packs loads into routes, largest hauls first.
///
/// Ties between equally long hauls go to the lower id; ties between equally
/// close routes go to the route opened first.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::SolveConfig;
/// use u_dispatch::constructive::greedy_packer;
/// use u_dispatch::models::{Load, Point};
///
/// let loads = vec![
///     Load::new(1, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
///     Load::new(2, Point::new(20.0, 0.0), Point::new(50.0, 0.0)),
/// ];
/// let solution = greedy_packer(&loads, &SolveConfig::default());
/// assert_eq!(solution.num_routes(), 1);
/// // Longest haul first.
/// assert_eq!(solution.load_ids(), vec![vec![2, 1]]);
/// ```
pub fn greedy_packer(loads: &[Load], config: &SolveConfig) -> Solution {
    let mut by_haul: Vec<&Load> = loads.iter().collect();
    by_haul.sort_by(|a, b| {
        b.transport_distance()
            .total_cmp(&a.transport_distance())
            .then_with(|| a.id().cmp(&b.id()))
    });

    let mut routes = vec![Route::new(config.depot)];
    for load in by_haul {
        let mut order: Vec<usize> = (0..routes.len()).collect();
        order.sort_by(|&a, &b| {
            routes[a]
                .arrival_cost(load)
                .total_cmp(&routes[b].arrival_cost(load))
        });

        match order.into_iter().find(|&i| routes[i].can_accept(load, config)) {
            Some(i) => routes[i].push(load.clone()),
            None => routes.push(Route::with_load(config.depot, load.clone())),
        }
    }

    // The seed route stays empty when the first load cannot fit on it.
    routes.retain(|route| !route.is_empty());

    let solution = Solution::from_routes(routes);
    debug!(
        routes = solution.num_routes(),
        cost = solution.cost(config),
        "greedy packer finished"
    );
    solution
}
