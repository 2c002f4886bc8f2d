//! # load-dispatch
//!
//! Single-depot load routing: assigns pickup/dropoff loads to a minimal
//! number of drivers, producing per-driver routes that respect a maximum
//! shift duration while approximately minimizing total operating cost
//! (per-driver base cost plus distance traveled).
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Load, Route, Solution)
//! - [`neighbors`] — Precomputed nearest-neighbor lists over a load set
//! - [`solver`] — Route planners (nearest-neighbor and exhaustive greedy)
//! - [`parse`] — Load-file parsing
//!
//! ## Example
//!
//! ```
//! use load_dispatch::models::{Load, Point};
//! use load_dispatch::solver::{NearestNeighborSolver, Solver, SolverConfig};
//!
//! let loads = vec![
//!     Load::new(1, Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
//!     Load::new(2, Point::new(3.0, 0.0), Point::new(4.0, 0.0)),
//! ];
//! let solution = NearestNeighborSolver::new(loads, SolverConfig::default())
//!     .solve()
//!     .expect("loads are serviceable");
//! assert_eq!(solution.num_routes(), 1);
//! ```

pub mod models;
pub mod neighbors;
pub mod parse;
pub mod solver;
