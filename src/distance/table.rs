//! Dense dropoff → pickup distance table.

use crate::models::{Load, Point};

/// Slot of the depot pseudo-load in every [`DistanceTable`].
pub const DEPOT_SLOT: usize = 0;

/// A dense n×n table of "finish load `y`, then start load `x`" distances,
/// stored in row-major order.
///
/// Slot 0 holds the depot pseudo-load (id 0, pickup = dropoff = depot); the
/// remaining slots hold the loads in ascending id order. Entry `(y, x)` is
/// the distance from the dropoff of slot `y` to the pickup of slot `x`.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point};
/// use u_dispatch::distance::{DistanceTable, DEPOT_SLOT};
///
/// let loads = vec![
///     Load::new(2, Point::new(6.0, 8.0), Point::new(6.0, 0.0)),
///     Load::new(1, Point::new(3.0, 4.0), Point::new(3.0, 0.0)),
/// ];
/// let table = DistanceTable::build(&loads, Point::origin());
/// assert_eq!(table.size(), 3);
/// assert_eq!(table.node(1).id(), 1);
/// // depot → pickup of load 1
/// assert!((table.get(DEPOT_SLOT, 1) - 5.0).abs() < 1e-10);
/// // dropoff of load 1 (3,0) → pickup of load 2 (6,8)
/// assert!((table.between(1, 2).unwrap() - 73f64.sqrt()).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceTable {
    nodes: Vec<Load>,
    data: Vec<f64>,
    size: usize,
}

impl DistanceTable {
    /// Builds the table over `loads` plus the depot pseudo-load.
    ///
    /// Load ids are expected to be positive and unique, as guaranteed by
    /// [`Problem::new`](crate::models::Problem::new).
    pub fn build(loads: &[Load], depot: Point) -> Self {
        let mut nodes = Vec::with_capacity(loads.len() + 1);
        nodes.push(Load::depot(depot));
        nodes.extend(loads.iter().cloned());
        nodes[1..].sort_by_key(Load::id);

        let size = nodes.len();
        let mut data = vec![0.0; size * size];
        for (y, from) in nodes.iter().enumerate() {
            for (x, to) in nodes.iter().enumerate() {
                if x != y {
                    data[y * size + x] = from.dropoff().distance_to(&to.pickup());
                }
            }
        }

        Self { nodes, data, size }
    }

    /// Distance from the dropoff of slot `from` to the pickup of slot `to`.
    ///
    /// # Panics
    ///
    /// Panics if either slot is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Distance between two loads addressed by id (0 = depot).
    ///
    /// Returns `None` if either id is not in the table.
    pub fn between(&self, from_id: usize, to_id: usize) -> Option<f64> {
        Some(self.get(self.slot_of(from_id)?, self.slot_of(to_id)?))
    }

    /// Slot holding the load with the given id.
    pub fn slot_of(&self, id: usize) -> Option<usize> {
        self.nodes.binary_search_by_key(&id, Load::id).ok()
    }

    /// The load (or depot pseudo-load) at `slot`.
    pub fn node(&self, slot: usize) -> &Load {
        &self.nodes[slot]
    }

    /// The depot location.
    pub fn depot(&self) -> Point {
        self.nodes[DEPOT_SLOT].pickup()
    }

    /// Number of slots, depot included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of real loads.
    pub fn num_loads(&self) -> usize {
        self.size - 1
    }
}
