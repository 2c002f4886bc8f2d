//! Route: an ordered sequence of loads assigned to one driver.

use super::{Load, Point};

/// An ordered sequence of loads serviced by a single driver.
///
/// Every route is anchored at a depot: the driver starts there, drives to
/// each load's pickup in order, and returns to the depot after the last
/// dropoff. Routes are append-only during planning; elapsed time is tracked
/// incrementally as loads are pushed.
///
/// The `*_with` methods are non-mutating previews: they report what the
/// route would cost if a candidate load were appended, without appending it.
///
/// # Examples
///
/// ```
/// use load_dispatch::models::{Load, Point, Route};
///
/// let mut route = Route::new(Point::new(0.0, 0.0));
/// route.push(Load::new(1, Point::new(3.0, 0.0), Point::new(3.0, 4.0)));
/// assert!((route.current_time() - 7.0).abs() < 1e-10);
/// assert!((route.completion_time() - 12.0).abs() < 1e-10);
/// assert!((route.total_cost(500.0) - 512.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    depot: Point,
    loads: Vec<Load>,
    current_time: f64,
}

impl Route {
    /// Creates an empty route anchored at the given depot.
    pub fn new(depot: Point) -> Self {
        Self {
            depot,
            loads: Vec::new(),
            current_time: 0.0,
        }
    }

    /// Appends a load to the end of this route.
    pub fn push(&mut self, load: Load) {
        self.current_time += self.distance_to(load.pickup()) + load.cost();
        self.loads.push(load);
    }

    /// The depot this route starts and ends at.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// The loads in assignment order.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Number of loads on this route.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Returns `true` if no loads have been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// The load numbers in assignment order.
    pub fn load_numbers(&self) -> Vec<i64> {
        self.loads.iter().map(|l| l.number()).collect()
    }

    /// Distance from the driver's current position to the given point.
    ///
    /// The current position is the last dropoff, or the depot for an empty
    /// route.
    pub fn distance_to(&self, point: Point) -> f64 {
        match self.loads.last() {
            Some(last) => last.dropoff().distance_to(point),
            None => self.depot.distance_to(point),
        }
    }

    /// Elapsed time through the last dropoff (excludes the return leg).
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Elapsed time including the final return leg to the depot.
    pub fn completion_time(&self) -> f64 {
        self.current_time + self.distance_to(self.depot)
    }

    /// Completion time plus the fixed per-driver base cost.
    pub fn total_cost(&self, driver_base_cost: f64) -> f64 {
        self.completion_time() + driver_base_cost
    }

    /// Elapsed time through `load`'s dropoff if it were appended.
    pub fn time_with(&self, load: &Load) -> f64 {
        self.current_time + self.distance_to(load.pickup()) + load.cost()
    }

    /// Completion time if `load` were appended and the driver then returned
    /// to the depot.
    pub fn completion_time_with(&self, load: &Load) -> f64 {
        self.time_with(load) + load.dropoff().distance_to(self.depot)
    }

    /// How much appending `load` would increase the completion time.
    pub fn completion_increase_with(&self, load: &Load) -> f64 {
        self.completion_time_with(load) - self.completion_time()
    }
}

/// Sums `total_cost` over a set of routes.
///
/// Each route contributes its own base cost, so fewer drivers means a lower
/// aggregate.
pub fn total_cost_of_routes(routes: &[Route], driver_base_cost: f64) -> f64 {
    routes.iter().map(|r| r.total_cost(driver_base_cost)).sum()
}
