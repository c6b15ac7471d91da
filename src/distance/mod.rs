//! Distance tables and neighbor rankings.
//!
//! Provides the dense dropoff → pickup table over all loads plus the depot,
//! and the per-load candidate lists derived from it.

mod ranking;
mod table;

pub use ranking::NeighborRanking;
pub use table::{DistanceTable, DEPOT_SLOT};
