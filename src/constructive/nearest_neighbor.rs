//! Nearest-neighbor route constructor.
//!
//! Builds routes greedily: each route starts from the load closest to the
//! depot that is still unallocated, then repeatedly continues with the
//! closest unallocated load that still lets the driver get home in time.
//! When no candidate fits, the route is closed and the next one starts.
//!
//! # Complexity
//!
//! O(n²) table build plus O(n²) candidate scans, n = number of loads.
//!
//! The constructor reads candidates from a [`NeighborRanking`], so the
//! stochastic search can rerun it over perturbed rankings without
//! rebuilding the distance table.

use tracing::debug;

use crate::config::SolveConfig;
use crate::distance::{DistanceTable, NeighborRanking, DEPOT_SLOT};
use crate::models::{Load, Route, Solution};

/// Constructs a solution using the nearest-neighbor heuristic.
///
/// Builds the distance table and ranking for `loads`, then delegates to
/// [`nearest_neighbor_ranked`].
///
/// # Examples
///
/// ```
/// use u_dispatch::config::SolveConfig;
/// use u_dispatch::constructive::nearest_neighbor;
/// use u_dispatch::models::{Load, Point};
///
/// let loads = vec![
///     Load::new(1, Point::new(30.0, 0.0), Point::new(40.0, 0.0)),
///     Load::new(2, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
///     Load::new(3, Point::new(50.0, 0.0), Point::new(60.0, 0.0)),
/// ];
/// let solution = nearest_neighbor(&loads, &SolveConfig::default());
/// assert_eq!(solution.load_ids(), vec![vec![2, 1, 3]]);
/// ```
pub fn nearest_neighbor(loads: &[Load], config: &SolveConfig) -> Solution {
    let table = DistanceTable::build(loads, config.depot);
    let ranking = NeighborRanking::from_table(&table);
    nearest_neighbor_ranked(&table, &ranking, config)
}

/// Constructs a solution from a precomputed table and ranking.
///
/// The depot's candidate list gives the order in which routes are started.
/// A load that cannot fit in a day even on its own still gets its own
/// route.
pub fn nearest_neighbor_ranked(
    table: &DistanceTable,
    ranking: &NeighborRanking,
    config: &SolveConfig,
) -> Solution {
    let mut allocated = vec![false; table.size()];
    allocated[DEPOT_SLOT] = true;

    let mut solution = Solution::new();
    for &start in ranking.candidates(DEPOT_SLOT) {
        if allocated[start] {
            continue;
        }
        allocated[start] = true;

        let mut route = Route::with_load(table.depot(), table.node(start).clone());
        let mut current = start;
        loop {
            let next = ranking.candidates(current).iter().copied().find(|&slot| {
                slot != DEPOT_SLOT
                    && !allocated[slot]
                    && route.can_accept(table.node(slot), config)
            });

            match next {
                Some(slot) => {
                    allocated[slot] = true;
                    route.push(table.node(slot).clone());
                    current = slot;
                }
                None => break,
            }
        }

        solution.add_route(route);
    }

    debug!(
        routes = solution.num_routes(),
        cost = solution.cost(config),
        "nearest-neighbor construction finished"
    );
    solution
}
