//! Solver error types.

use std::error::Error;
use std::fmt;

/// A planning failure.
///
/// Solvers never return partial results: a solve yields either a complete,
/// constraint-satisfying solution or one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// A single load's depot round trip exceeds the shift limit, so no
    /// driver can ever service it.
    UnserviceableLoad {
        /// The offending load's number.
        number: i64,
        /// Depot → pickup → dropoff → depot time for that load alone.
        round_trip: f64,
        /// The shift limit it exceeds.
        max_shift_time: f64,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnserviceableLoad {
                number,
                round_trip,
                max_shift_time,
            } => write!(
                f,
                "load {number} is too far from the depot to service within the shift limit \
                 (round trip {round_trip} exceeds {max_shift_time})"
            ),
        }
    }
}

impl Error for SolveError {}
