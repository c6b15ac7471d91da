//! Improvement searches over constructed solutions.
//!
//! - [`StochasticImprover`] — Reruns nearest-neighbor construction over
//!   randomly perturbed neighbor rankings and keeps the cheapest result

mod stochastic;

pub use stochastic::{ImprovementResult, ImproverConfig, StochasticImprover};
