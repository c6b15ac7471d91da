//! Per-load candidate lists ordered by distance.

use rand::seq::SliceRandom;
use rand::Rng;

use super::DistanceTable;

/// For every slot of a [`DistanceTable`], the other slots sorted by
/// ascending distance from it.
///
/// Ties keep slot order, which is ascending id order, so a given table
/// always produces the same ranking.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point};
/// use u_dispatch::distance::{DistanceTable, NeighborRanking, DEPOT_SLOT};
///
/// let loads = vec![
///     Load::new(1, Point::new(10.0, 0.0), Point::new(11.0, 0.0)),
///     Load::new(2, Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
/// ];
/// let table = DistanceTable::build(&loads, Point::origin());
/// let ranking = NeighborRanking::from_table(&table);
/// // From the depot, load 2 (slot 2) is closest.
/// assert_eq!(ranking.candidates(DEPOT_SLOT), &[2, 1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborRanking {
    lists: Vec<Vec<usize>>,
}

impl NeighborRanking {
    /// Ranks every slot's neighbors by the table's distances.
    pub fn from_table(table: &DistanceTable) -> Self {
        let n = table.size();
        let lists = (0..n)
            .map(|from| {
                let mut others: Vec<usize> = (0..n).filter(|&to| to != from).collect();
                others.sort_by(|&a, &b| table.get(from, a).total_cmp(&table.get(from, b)));
                others
            })
            .collect();
        Self { lists }
    }

    /// Candidates following `slot`, closest first.
    pub fn candidates(&self, slot: usize) -> &[usize] {
        &self.lists[slot]
    }

    /// Number of ranked slots.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns `true` if no slot is ranked.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Returns a copy where the first `temperature` entries of every list
    /// are randomly permuted and the rest keep their order.
    ///
    /// Lists shorter than `temperature` are shuffled whole.
    pub fn perturbed<R: Rng + ?Sized>(&self, temperature: usize, rng: &mut R) -> Self {
        let mut lists = self.lists.clone();
        for list in &mut lists {
            let k = temperature.min(list.len());
            list[..k].shuffle(rng);
        }
        Self { lists }
    }
}
