//! Exhaustive greedy planner.
//!
//! Each pass re-evaluates every remaining load against every driver and
//! commits the cheapest feasible pairing by resulting completion time. No
//! neighbor index, no floor estimate: the fleet starts at one driver and
//! grows on demand.

use tracing::debug;

use crate::models::{total_cost_of_routes, Load, Route, Solution};

use super::{check_serviceable, SolveError, Solver, SolverConfig};

/// Plans routes by exhaustive cheapest-completion scans.
///
/// O(n³) over the load count versus the nearest-neighbor planner's O(n²)
/// passes; fine for small daily load lists, and a useful cross-check because
/// it shares none of the index machinery.
///
/// # Examples
///
/// ```
/// use load_dispatch::models::{Load, Point};
/// use load_dispatch::solver::{GreedySolver, Solver, SolverConfig};
///
/// let loads = vec![Load::new(1, Point::new(3.0, 0.0), Point::new(3.0, 4.0))];
/// let solution = GreedySolver::new(loads, SolverConfig::default()).solve().unwrap();
/// assert_eq!(solution.num_routes(), 1);
/// assert_eq!(solution.routes()[0].load_numbers(), vec![1]);
/// ```
#[derive(Debug, Clone)]
pub struct GreedySolver {
    loads: Vec<Load>,
    config: SolverConfig,
}

impl GreedySolver {
    /// Creates a solver over the given loads.
    pub fn new(loads: Vec<Load>, config: SolverConfig) -> Self {
        Self { loads, config }
    }

    /// The loads this solver plans over.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// The configuration in effect.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl Solver for GreedySolver {
    fn solve(&self) -> Result<Solution, SolveError> {
        if self.loads.is_empty() {
            return Ok(Solution::empty());
        }
        check_serviceable(&self.loads, &self.config)?;

        let depot = self.config.depot();
        let max_shift_time = self.config.max_shift_time();
        let mut routes = vec![Route::new(depot)];
        let mut assigned = vec![false; self.loads.len()];
        let mut remaining = self.loads.len();
        let mut iteration = 0usize;

        while remaining > 0 {
            iteration += 1;

            // (route, load, resulting completion time) of the cheapest
            // feasible pairing; strict < keeps the lowest route index, then
            // input order, on ties
            let mut best: Option<(usize, usize, f64)> = None;
            for (route_index, route) in routes.iter().enumerate() {
                for (load_index, load) in self.loads.iter().enumerate() {
                    if assigned[load_index] {
                        continue;
                    }
                    let completion = route.completion_time_with(load);
                    if completion > max_shift_time {
                        continue;
                    }
                    let better = match best {
                        Some((_, _, best_completion)) => completion < best_completion,
                        None => true,
                    };
                    if better {
                        best = Some((route_index, load_index, completion));
                    }
                }
            }

            match best {
                Some((route_index, load_index, completion)) => {
                    debug!(
                        iteration,
                        remaining,
                        route = route_index,
                        load = self.loads[load_index].number(),
                        completion,
                        "assigned load"
                    );
                    routes[route_index].push(self.loads[load_index]);
                    assigned[load_index] = true;
                    remaining -= 1;
                }
                None => {
                    debug!(
                        iteration,
                        remaining,
                        drivers = routes.len() + 1,
                        "no driver can take any remaining load; adding driver"
                    );
                    routes.push(Route::new(depot));
                }
            }
        }

        let total_cost = total_cost_of_routes(&routes, self.config.driver_base_cost());
        Ok(Solution::new(routes, total_cost))
    }
}
