//! Constructive heuristics for building dispatch solutions.
//!
//! - [`greedy_packer`] — Largest-haul-first bin packing onto the closest route, O(n · R log R)
//! - [`nearest_neighbor`] — Ranked nearest-neighbor route chaining, O(n²)

mod greedy_packer;
mod nearest_neighbor;

pub use greedy_packer::greedy_packer;
pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_ranked};
