//! Validated problem instances.

use std::collections::HashSet;

use crate::config::SolveConfig;
use crate::error::InputError;

use super::Load;

/// A load set that is safe to hand to the construction heuristics.
///
/// Ids are positive and unique, and every coordinate is finite.
///
/// # Examples
///
/// ```
/// use u_dispatch::error::InputError;
/// use u_dispatch::models::{Load, Point, Problem};
///
/// let a = Load::new(1, Point::new(1.0, 0.0), Point::new(2.0, 0.0));
/// let b = Load::new(1, Point::new(3.0, 0.0), Point::new(4.0, 0.0));
/// assert_eq!(
///     Problem::new(vec![a, b]).unwrap_err(),
///     InputError::DuplicateId { id: 1 },
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    loads: Vec<Load>,
}

impl Problem {
    /// Validates `loads` and wraps them.
    pub fn new(loads: Vec<Load>) -> Result<Self, InputError> {
        if loads.is_empty() {
            return Err(InputError::Empty);
        }

        let mut seen = HashSet::with_capacity(loads.len());
        for load in &loads {
            if load.id() == 0 {
                return Err(InputError::ReservedId);
            }
            if !load.pickup().is_finite() || !load.dropoff().is_finite() {
                return Err(InputError::NonFiniteCoordinate { id: load.id() });
            }
            if !seen.insert(load.id()) {
                return Err(InputError::DuplicateId { id: load.id() });
            }
        }

        Ok(Self { loads })
    }

    /// Loads in input order.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Number of loads.
    pub fn num_loads(&self) -> usize {
        self.loads.len()
    }

    /// Loads whose depot round trip alone exceeds the daily budget.
    ///
    /// These are still placed, each on its own route.
    pub fn infeasible_loads(&self, config: &SolveConfig) -> Vec<&Load> {
        self.loads
            .iter()
            .filter(|load| !config.fits_budget(load.round_trip_distance(&config.depot)))
            .collect()
    }
}
