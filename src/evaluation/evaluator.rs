//! Solution cost and invariant checks.

use std::collections::HashMap;

use crate::config::SolveConfig;
use crate::models::{Load, Solution};

/// A type of invariant violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// An input load appears on no route.
    MissingLoad {
        /// The load left out.
        load_id: usize,
    },
    /// A load appears more than once across the routes.
    DuplicateLoad {
        /// The repeated load.
        load_id: usize,
        /// How many times it was seen.
        occurrences: usize,
    },
    /// A route carries a load that is not part of the input.
    UnknownLoad {
        /// Route index in the solution.
        route_index: usize,
        /// The foreign load.
        load_id: usize,
    },
    /// A route with several loads takes longer than the daily budget.
    BudgetExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Minutes the route takes.
        duration: f64,
        /// Daily budget in minutes.
        budget: f64,
    },
    /// A single load whose round trip alone exceeds the daily budget.
    ///
    /// Such loads are placed on their own route rather than rejected.
    InfeasibleLoad {
        /// Route index in the solution.
        route_index: usize,
        /// The load.
        load_id: usize,
        /// Minutes the route takes.
        duration: f64,
    },
}

/// An invariant violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }

    /// Returns `true` for violations a constructor is allowed to produce.
    pub fn is_tolerated(&self) -> bool {
        matches!(self.kind, ViolationType::InfeasibleLoad { .. })
    }
}

/// Total cost of a solution: fixed cost per driver plus distance driven.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::SolveConfig;
/// use u_dispatch::evaluation::evaluate;
/// use u_dispatch::models::Solution;
///
/// assert_eq!(evaluate(&Solution::new(), &SolveConfig::default()), 0.0);
/// ```
pub fn evaluate(solution: &Solution, config: &SolveConfig) -> f64 {
    solution.cost(config)
}

/// Checks that `solution` covers `loads` exactly once each and that every
/// route fits in the daily budget.
///
/// A route holding one load that cannot fit even alone is reported as
/// [`ViolationType::InfeasibleLoad`] instead of
/// [`ViolationType::BudgetExceeded`].
///
/// # Examples
///
/// ```
/// use u_dispatch::config::SolveConfig;
/// use u_dispatch::constructive::nearest_neighbor;
/// use u_dispatch::evaluation::audit;
/// use u_dispatch::models::{Load, Point};
///
/// let loads = vec![
///     Load::new(1, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
///     Load::new(2, Point::new(0.0, 10.0), Point::new(0.0, 20.0)),
/// ];
/// let config = SolveConfig::default();
/// let solution = nearest_neighbor(&loads, &config);
/// assert!(audit(&solution, &loads, &config).is_empty());
/// ```
pub fn audit(solution: &Solution, loads: &[Load], config: &SolveConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut seen: HashMap<usize, usize> = loads.iter().map(|l| (l.id(), 0)).collect();
    for (route_index, route) in solution.routes().iter().enumerate() {
        for load in route.stops() {
            match seen.get_mut(&load.id()) {
                Some(count) => *count += 1,
                None => violations.push(Violation::new(ViolationType::UnknownLoad {
                    route_index,
                    load_id: load.id(),
                })),
            }
        }

        let duration = config.travel_time(route.total_distance());
        if duration <= config.daily_time_budget {
            continue;
        }
        let kind = match route.stops() {
            [only] => ViolationType::InfeasibleLoad {
                route_index,
                load_id: only.id(),
                duration,
            },
            _ => ViolationType::BudgetExceeded {
                route_index,
                duration,
                budget: config.daily_time_budget,
            },
        };
        violations.push(Violation::new(kind));
    }

    for load in loads {
        match seen.get(&load.id()).copied().unwrap_or(0) {
            0 => violations.push(Violation::new(ViolationType::MissingLoad {
                load_id: load.id(),
            })),
            1 => {}
            occurrences => violations.push(Violation::new(ViolationType::DuplicateLoad {
                load_id: load.id(),
                occurrences,
            })),
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::route::tests::reference_loads;
    use crate::models::{Point, Route};

    #[test]
    fn test_evaluate_reference_route() {
        let sol = Solution::from_routes(vec![Route::from_loads(
            Point::origin(),
            reference_loads(),
        )]);
        let config = SolveConfig::default();
        assert!((evaluate(&sol, &config) - 1665.68).abs() < 0.05);
        assert_eq!(evaluate(&sol, &config), evaluate(&sol, &config));
    }

    #[test]
    fn test_evaluate_respects_fixed_cost() {
        let sol = Solution::from_routes(vec![Route::from_loads(
            Point::origin(),
            reference_loads(),
        )]);
        let config = SolveConfig::default().with_fixed_cost_per_driver(0.0);
        assert!((evaluate(&sol, &config) - 1165.68).abs() < 0.05);
    }

    #[test]
    fn test_audit_clean() {
        let loads = reference_loads();
        let sol = Solution::from_routes(
            loads
                .iter()
                .cloned()
                .map(|l| Route::with_load(Point::origin(), l))
                .collect(),
        );
        let roomy = SolveConfig::default().with_daily_time_budget(2000.0);
        assert!(audit(&sol, &loads, &roomy).is_empty());
    }

    #[test]
    fn test_audit_missing_and_duplicate() {
        let loads = reference_loads();
        let sol = Solution::from_routes(vec![
            Route::with_load(Point::origin(), loads[0].clone()),
            Route::with_load(Point::origin(), loads[0].clone()),
        ]);
        let violations = audit(&sol, &loads, &SolveConfig::default());
        assert!(violations.contains(&Violation::new(ViolationType::DuplicateLoad {
            load_id: 1,
            occurrences: 2,
        })));
        assert!(violations.contains(&Violation::new(ViolationType::MissingLoad { load_id: 2 })));
        assert!(violations.contains(&Violation::new(ViolationType::MissingLoad { load_id: 3 })));
    }

    #[test]
    fn test_audit_unknown_load() {
        let loads = reference_loads();
        let stranger = Load::new(99, Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        let mut routes: Vec<Route> = loads
            .iter()
            .cloned()
            .map(|l| Route::with_load(Point::origin(), l))
            .collect();
        routes.push(Route::with_load(Point::origin(), stranger));
        let roomy = SolveConfig::default().with_daily_time_budget(2000.0);
        let violations = audit(&Solution::from_routes(routes), &loads, &roomy);
        assert_eq!(
            violations,
            vec![Violation::new(ViolationType::UnknownLoad {
                route_index: 3,
                load_id: 99,
            })]
        );
    }

    #[test]
    fn test_audit_budget_kinds() {
        let loads = reference_loads();
        let config = SolveConfig::default();
        let long = Solution::from_routes(vec![Route::from_loads(Point::origin(), loads.clone())]);
        let violations = audit(&long, &loads, &config);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::BudgetExceeded { route_index: 0, .. }
        ));
        assert!(!violations[0].is_tolerated());

        let far = Load::new(1, Point::new(400.0, 0.0), Point::new(400.0, 5.0));
        let alone = Solution::from_routes(vec![Route::with_load(Point::origin(), far.clone())]);
        let violations = audit(&alone, &[far], &config);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].is_tolerated());
    }
}
