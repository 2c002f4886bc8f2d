//! Route-planning solvers.
//!
//! Two heuristics share the [`Solver`] interface:
//!
//! - [`NearestNeighborSolver`] — the planner the CLI uses. Estimates a
//!   driver floor, then assigns loads via pre-sorted neighbor lists, O(n²)
//!   per pass.
//! - [`GreedySolver`] — exhaustive-scan variant that re-evaluates every
//!   remaining load for every driver each pass. Simpler, slower; useful as a
//!   cross-check.
//!
//! Both grow the fleet when no driver can take another load, and both refuse
//! up front any load whose solo depot round trip exceeds the shift limit.

mod config;
mod error;
mod greedy;
mod nearest_neighbor;

pub use config::{SolverConfig, DEFAULT_DRIVER_BASE_COST, DEFAULT_MAX_SHIFT_TIME};
pub use error::SolveError;
pub use greedy::GreedySolver;
pub use nearest_neighbor::NearestNeighborSolver;

use crate::models::{Load, Route, Solution};

/// A route planner over a fixed load set.
pub trait Solver {
    /// Plans one route per driver covering every load exactly once, each
    /// within the shift limit.
    ///
    /// Returns [`Solution::empty`] for zero loads. Never returns partial
    /// results: on error, no routes.
    fn solve(&self) -> Result<Solution, SolveError>;
}

/// Rejects any load that cannot be serviced by a fresh driver on its own.
///
/// Run before assignment so the fleet-growth loop is guaranteed to make
/// progress: a new empty route can always take at least one remaining load.
fn check_serviceable(loads: &[Load], config: &SolverConfig) -> Result<(), SolveError> {
    let probe = Route::new(config.depot());
    for load in loads {
        let round_trip = probe.completion_time_with(load);
        if round_trip > config.max_shift_time() {
            return Err(SolveError::UnserviceableLoad {
                number: load.number(),
                round_trip,
                max_shift_time: config.max_shift_time(),
            });
        }
    }
    Ok(())
}
