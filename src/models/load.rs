//! Load type: a pickup/dropoff transport task.

use serde::{Deserialize, Serialize};

use super::Point;

/// A single transport task: drive to `pickup`, carry to `dropoff`.
///
/// Loads are immutable once constructed. The load number is caller-assigned
/// and must be unique within a planning run.
///
/// # Examples
///
/// ```
/// use load_dispatch::models::{Load, Point};
///
/// let load = Load::new(1, Point::new(3.0, 0.0), Point::new(3.0, 4.0));
/// assert_eq!(load.number(), 1);
/// assert!((load.cost() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Load {
    number: i64,
    pickup: Point,
    dropoff: Point,
}

impl Load {
    /// Creates a load with the given number and endpoints.
    pub fn new(number: i64, pickup: Point, dropoff: Point) -> Self {
        Self {
            number,
            pickup,
            dropoff,
        }
    }

    /// Caller-assigned load number.
    pub fn number(&self) -> i64 {
        self.number
    }

    /// Pickup location.
    pub fn pickup(&self) -> Point {
        self.pickup
    }

    /// Dropoff location.
    pub fn dropoff(&self) -> Point {
        self.dropoff
    }

    /// Intrinsic travel cost: the pickup-to-dropoff distance.
    ///
    /// Fixed for the lifetime of the load; independent of where the load
    /// sits in any route.
    pub fn cost(&self) -> f64 {
        self.pickup.distance_to(self.dropoff)
    }
}
