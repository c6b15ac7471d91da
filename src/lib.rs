//! # u-dispatch
//!
//! Assigns point-to-point transport loads to single-day driver routes that
//! start and end at a common depot, minimizing
//! `fixed_cost_per_driver × drivers + total distance driven`.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Load, Route, Solution, Problem)
//! - [`distance`] — Dropoff → pickup distance table and neighbor rankings
//! - [`constructive`] — Constructive heuristics (Greedy Packer, Nearest Neighbor)
//! - [`improvement`] — Stochastic search over perturbed neighbor rankings
//! - [`evaluation`] — Solution cost and coverage/budget auditing
//! - [`solver`] — Strategy selection and the solve entry point
//! - [`config`] — Cost and time-budget parameters
//! - [`error`] — Input validation errors
//!
//! ## Example
//!
//! ```
//! use u_dispatch::config::SolveConfig;
//! use u_dispatch::improvement::ImproverConfig;
//! use u_dispatch::models::{Load, Point, Problem};
//! use u_dispatch::solver::{solve, Strategy};
//!
//! let problem = Problem::new(vec![
//!     Load::new(1, "(-50,10)".parse().unwrap(), "(-80,40)".parse().unwrap()),
//!     Load::new(2, Point::new(60.0, 5.0), Point::new(90.0, -20.0)),
//!     Load::new(3, Point::new(-75.0, 45.0), Point::new(-20.0, 5.0)),
//! ])
//! .unwrap();
//!
//! let config = SolveConfig::default();
//! let strategy = Strategy::Stochastic(ImproverConfig::default().with_seed(7));
//! let outcome = solve(&problem, &strategy, &config);
//! assert_eq!(outcome.solution.num_served(), 3);
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod improvement;
pub mod models;
pub mod solver;
