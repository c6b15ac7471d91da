//! Transport jobs.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

use super::Point;

/// A point-to-point transport job.
///
/// Id 0 is reserved for the depot; real loads use positive ids that are
/// unique within a problem.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point};
///
/// let load = Load::new(1, Point::new(0.0, 3.0), Point::new(4.0, 3.0));
/// assert_eq!(load.id(), 1);
/// assert!((load.transport_distance() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    id: usize,
    pickup: Point,
    dropoff: Point,
}

impl Load {
    /// Creates a load.
    pub fn new(id: usize, pickup: Point, dropoff: Point) -> Self {
        Self {
            id,
            pickup,
            dropoff,
        }
    }

    /// Creates a load from `(x,y)` pickup and dropoff columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_dispatch::models::{Load, Point};
    ///
    /// let load = Load::parse(7, "(-9.1,10.5)", "(3.0,4.0)").unwrap();
    /// assert_eq!(load.pickup(), Point::new(-9.1, 10.5));
    /// assert!(Load::parse(8, "-9.1,10.5", "(3.0,4.0)").is_err());
    /// ```
    pub fn parse(id: usize, pickup: &str, dropoff: &str) -> Result<Self, InputError> {
        Ok(Self::new(id, pickup.parse()?, dropoff.parse()?))
    }

    /// The pseudo-load standing for the depot: id 0, pickup = dropoff = `depot`.
    pub fn depot(depot: Point) -> Self {
        Self::new(0, depot, depot)
    }

    /// Load id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Where the cargo is collected.
    pub fn pickup(&self) -> Point {
        self.pickup
    }

    /// Where the cargo is delivered.
    pub fn dropoff(&self) -> Point {
        self.dropoff
    }

    /// Loaded distance from pickup to dropoff.
    pub fn transport_distance(&self) -> f64 {
        self.pickup.distance_to(&self.dropoff)
    }

    /// Distance of driving depot → pickup → dropoff → depot with this load alone.
    pub fn round_trip_distance(&self, depot: &Point) -> f64 {
        depot.distance_to(&self.pickup) + self.transport_distance() + self.dropoff.distance_to(depot)
    }
}
