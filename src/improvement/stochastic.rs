//! Stochastic neighbor-ranking search.
//!
//! # Algorithm
//!
//! Runs the nearest-neighbor constructor once over the true ranking, then
//! reruns it over perturbed rankings where only the closest `t` candidates
//! of every list are shuffled. The temperature `t` grows level by level
//! (2, 7, 12, ...), with `t / 2` trials per level. The best solution seen
//! is kept; a candidate replaces it only if strictly cheaper.
//!
//! Shuffling the head of each list lets a route give up its nearest
//! candidate to a later route that needs it more. Larger temperatures
//! widen that window without ever fully randomizing the construction.
//!
//! The distance table is built once and shared by every trial.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SolveConfig;
use crate::constructive::nearest_neighbor_ranked;
use crate::distance::{DistanceTable, NeighborRanking};
use crate::models::{Load, Solution};

/// Parameters of the stochastic search.
///
/// # Examples
///
/// ```
/// use u_dispatch::improvement::ImproverConfig;
///
/// let config = ImproverConfig::default().with_max_temperature(12);
/// assert_eq!(config.temperatures().collect::<Vec<_>>(), vec![2, 7, 12]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImproverConfig {
    /// Temperature of the first level.
    pub initial_temperature: usize,
    /// Increase in temperature between levels.
    pub temperature_step: usize,
    /// Highest temperature tried.
    pub max_temperature: usize,
    /// Seed for reproducible searches; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Stop after this many perturbed trials.
    pub max_trials: Option<usize>,
    /// Stop once this much wall-clock time has passed.
    pub time_limit: Option<Duration>,
}

impl Default for ImproverConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 2,
            temperature_step: 5,
            max_temperature: 47,
            seed: None,
            max_trials: None,
            time_limit: None,
        }
    }
}

impl ImproverConfig {
    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the highest temperature.
    pub fn with_max_temperature(mut self, max: usize) -> Self {
        self.max_temperature = max;
        self
    }

    /// Caps the number of perturbed trials.
    pub fn with_max_trials(mut self, max: usize) -> Self {
        self.max_trials = Some(max);
        self
    }

    /// Caps the wall-clock time of the search.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Temperature levels in the order they are searched.
    pub fn temperatures(&self) -> impl Iterator<Item = usize> {
        (self.initial_temperature..=self.max_temperature).step_by(self.temperature_step.max(1))
    }

    fn exhausted(&self, trials: usize, elapsed: Duration) -> bool {
        self.max_trials.is_some_and(|max| trials >= max)
            || self.time_limit.is_some_and(|limit| elapsed >= limit)
    }
}

/// Outcome of a stochastic search.
#[derive(Debug, Clone)]
pub struct ImprovementResult {
    /// Cheapest solution found.
    pub best: Solution,
    /// Cost of `best`.
    pub best_cost: f64,
    /// Cost of the deterministic nearest-neighbor solution.
    pub initial_cost: f64,
    /// Perturbed trials run.
    pub trials: usize,
    /// Number of times the best solution was replaced.
    pub improvements: usize,
    /// Temperature at which `best` was found, if not the initial solution.
    pub best_temperature: Option<usize>,
}

/// Searches perturbed neighbor rankings for a cheaper construction.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::SolveConfig;
/// use u_dispatch::improvement::{ImproverConfig, StochasticImprover};
/// use u_dispatch::models::{Load, Point};
///
/// let loads: Vec<Load> = (1..=6)
///     .map(|i| {
///         let x = i as f64 * 40.0;
///         Load::new(i, Point::new(x, 10.0), Point::new(x, -10.0))
///     })
///     .collect();
/// let improver = StochasticImprover::new(
///     &loads,
///     SolveConfig::default(),
///     ImproverConfig::default().with_seed(42),
/// );
/// let result = improver.run();
/// assert!(result.best_cost <= result.initial_cost);
/// assert_eq!(result.best.num_served(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct StochasticImprover {
    table: DistanceTable,
    ranking: NeighborRanking,
    config: SolveConfig,
    settings: ImproverConfig,
}

impl StochasticImprover {
    /// Builds the distance table and base ranking for `loads`.
    pub fn new(loads: &[Load], config: SolveConfig, settings: ImproverConfig) -> Self {
        let table = DistanceTable::build(loads, config.depot);
        let ranking = NeighborRanking::from_table(&table);
        Self {
            table,
            ranking,
            config,
            settings,
        }
    }

    /// The search parameters.
    pub fn settings(&self) -> &ImproverConfig {
        &self.settings
    }

    /// Runs the search with a generator seeded from the settings.
    pub fn run(&self) -> ImprovementResult {
        let mut rng = match self.settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(&mut rng)
    }

    /// Runs the search drawing all randomness from `rng`.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> ImprovementResult {
        let started = Instant::now();

        let mut best = nearest_neighbor_ranked(&self.table, &self.ranking, &self.config);
        let initial_cost = best.cost(&self.config);
        let mut best_cost = initial_cost;
        let mut best_temperature = None;
        let mut trials = 0;
        let mut improvements = 0;

        'search: for temperature in self.settings.temperatures() {
            for trial in 0..temperature / 2 {
                if self.settings.exhausted(trials, started.elapsed()) {
                    break 'search;
                }

                let ranking = self.ranking.perturbed(temperature, rng);
                let candidate = nearest_neighbor_ranked(&self.table, &ranking, &self.config);
                let cost = candidate.cost(&self.config);
                trials += 1;

                if cost < best_cost {
                    debug!(temperature, trial, cost, previous = best_cost, "improved solution");
                    best = candidate;
                    best_cost = cost;
                    best_temperature = Some(temperature);
                    improvements += 1;
                }
            }
        }

        info!(
            trials,
            improvements,
            initial_cost,
            best_cost,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "stochastic search finished"
        );

        ImprovementResult {
            best,
            best_cost,
            initial_cost,
            trials,
            improvements,
            best_temperature,
        }
    }
}
