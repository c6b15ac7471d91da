//! Strategy selection and the solve entry point.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::SolveConfig;
use crate::constructive::{greedy_packer, nearest_neighbor};
use crate::improvement::{ImproverConfig, StochasticImprover};
use crate::models::{Load, Problem, Solution, SolutionSummary};

/// The construction strategies a caller can choose from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Largest-haul-first bin packing.
    GreedyPacker,
    /// Deterministic nearest-neighbor chaining.
    NearestNeighbor,
    /// Nearest-neighbor refined by perturbed-ranking search.
    Stochastic(ImproverConfig),
}

impl Default for Strategy {
    fn default() -> Self {
        Self::Stochastic(ImproverConfig::default())
    }
}

impl Strategy {
    /// Short name used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GreedyPacker => "greedy_packer",
            Self::NearestNeighbor => "nearest_neighbor",
            Self::Stochastic(_) => "stochastic",
        }
    }

    /// Builds a solution for `loads` with this strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_dispatch::config::SolveConfig;
    /// use u_dispatch::models::{Load, Point};
    /// use u_dispatch::solver::Strategy;
    ///
    /// let loads = vec![Load::new(1, Point::new(3.0, 4.0), Point::new(3.0, 0.0))];
    /// let solution = Strategy::GreedyPacker.construct(&loads, &SolveConfig::default());
    /// assert_eq!(solution.load_ids(), vec![vec![1]]);
    /// ```
    pub fn construct(&self, loads: &[Load], config: &SolveConfig) -> Solution {
        match self {
            Self::GreedyPacker => greedy_packer(loads, config),
            Self::NearestNeighbor => nearest_neighbor(loads, config),
            Self::Stochastic(settings) => {
                StochasticImprover::new(loads, config.clone(), settings.clone())
                    .run()
                    .best
            }
        }
    }
}

/// A solved problem: the chosen solution and its cost.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The solution.
    pub solution: Solution,
    /// Its cost under the config used to build it.
    pub cost: f64,
    /// Name of the strategy that built it.
    pub strategy: &'static str,
}

impl Outcome {
    /// A serializable view for reporting.
    pub fn summary(&self, config: &SolveConfig) -> SolutionSummary {
        self.solution.summary(config)
    }
}

/// Solves a validated problem with the given strategy.
///
/// Loads that cannot fit in a day even alone are logged and placed on
/// their own routes.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::SolveConfig;
/// use u_dispatch::models::{Load, Point, Problem};
/// use u_dispatch::solver::{solve, Strategy};
///
/// let problem = Problem::new(vec![
///     Load::new(1, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
///     Load::new(2, Point::new(20.0, 0.0), Point::new(30.0, 0.0)),
/// ])
/// .unwrap();
/// let outcome = solve(&problem, &Strategy::NearestNeighbor, &SolveConfig::default());
/// assert_eq!(outcome.solution.load_ids(), vec![vec![1, 2]]);
/// assert!((outcome.cost - 560.0).abs() < 1e-10);
/// ```
pub fn solve(problem: &Problem, strategy: &Strategy, config: &SolveConfig) -> Outcome {
    for load in problem.infeasible_loads(config) {
        warn!(
            load_id = load.id(),
            round_trip = load.round_trip_distance(&config.depot),
            budget = config.daily_time_budget,
            "load cannot fit in a single day; placing it alone"
        );
    }

    let solution = strategy.construct(problem.loads(), config);
    let cost = solution.cost(config);
    info!(
        strategy = strategy.name(),
        loads = problem.num_loads(),
        drivers = solution.num_routes(),
        cost,
        "solve finished"
    );

    Outcome {
        solution,
        cost,
        strategy: strategy.name(),
    }
}
