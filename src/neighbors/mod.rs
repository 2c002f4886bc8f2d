//! Nearest-neighbor index over a load set.
//!
//! Precomputes, for the depot and for every load, the other loads ordered by
//! deadhead distance, so the solver scans sorted lists instead of searching.

mod index;

pub use index::NeighborIndex;
