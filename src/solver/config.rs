//! Planner configuration.

use crate::models::Point;

/// Default shift length budget per driver (12 hours in minute units).
pub const DEFAULT_MAX_SHIFT_TIME: f64 = 12.0 * 60.0;

/// Default fixed cost of putting one driver on the road.
pub const DEFAULT_DRIVER_BASE_COST: f64 = 500.0;

/// Configuration shared by all solvers.
///
/// # Examples
///
/// ```
/// use load_dispatch::models::Point;
/// use load_dispatch::solver::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.max_shift_time(), 720.0);
/// assert_eq!(config.driver_base_cost(), 500.0);
///
/// let config = SolverConfig::default()
///     .with_depot(Point::new(10.0, 10.0))
///     .with_max_shift_time(480.0);
/// assert_eq!(config.max_shift_time(), 480.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    depot: Point,
    max_shift_time: f64,
    driver_base_cost: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            depot: Point::new(0.0, 0.0),
            max_shift_time: DEFAULT_MAX_SHIFT_TIME,
            driver_base_cost: DEFAULT_DRIVER_BASE_COST,
        }
    }
}

impl SolverConfig {
    /// Sets the depot every shift starts and ends at.
    pub fn with_depot(mut self, depot: Point) -> Self {
        self.depot = depot;
        self
    }

    /// Sets the maximum shift length per driver.
    pub fn with_max_shift_time(mut self, max_shift_time: f64) -> Self {
        self.max_shift_time = max_shift_time;
        self
    }

    /// Sets the fixed per-driver base cost.
    pub fn with_driver_base_cost(mut self, driver_base_cost: f64) -> Self {
        self.driver_base_cost = driver_base_cost;
        self
    }

    /// The depot every shift starts and ends at.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// Maximum shift length per driver.
    pub fn max_shift_time(&self) -> f64 {
        self.max_shift_time
    }

    /// Fixed per-driver base cost.
    pub fn driver_base_cost(&self) -> f64 {
        self.driver_base_cost
    }
}
