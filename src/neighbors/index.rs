//! Precomputed nearest-neighbor lists.

use crate::models::{Load, Point};

/// Distance-sorted neighbor lists over a load set.
///
/// For every load, holds all other loads ordered ascending by the deadhead
/// distance from this load's dropoff to the other load's pickup. A separate
/// depot-anchored list orders all loads by pickup distance from the depot, so
/// an empty route scans the same structure as a partially built one.
///
/// Loads are addressed by their index in the slice the index was built from,
/// never by load number. Ties keep input order (stable sort), which keeps the
/// planner deterministic. Built once per planning run, read-only afterward.
///
/// # Examples
///
/// ```
/// use load_dispatch::models::{Load, Point};
/// use load_dispatch::neighbors::NeighborIndex;
///
/// let depot = Point::new(0.0, 0.0);
/// let loads = vec![
///     Load::new(1, Point::new(9.0, 0.0), Point::new(9.0, 1.0)),
///     Load::new(2, Point::new(1.0, 0.0), Point::new(1.0, 1.0)),
/// ];
/// let index = NeighborIndex::build(&loads, depot);
/// // load 2's pickup is nearer the depot than load 1's
/// assert_eq!(index.from_depot(), &[1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct NeighborIndex {
    from_depot: Vec<usize>,
    from_load: Vec<Vec<usize>>,
}

impl NeighborIndex {
    /// Builds neighbor lists for the given loads and depot.
    ///
    /// O(n² log n) for n loads; n is a single depot's daily load list, so the
    /// quadratic build is not worth avoiding.
    pub fn build(loads: &[Load], depot: Point) -> Self {
        let from_depot = sorted_by_pickup_distance(loads, depot, None);
        let from_load = loads
            .iter()
            .enumerate()
            .map(|(i, load)| sorted_by_pickup_distance(loads, load.dropoff(), Some(i)))
            .collect();

        Self {
            from_depot,
            from_load,
        }
    }

    /// Load indices ordered by pickup distance from the depot.
    pub fn from_depot(&self) -> &[usize] {
        &self.from_depot
    }

    /// Load indices ordered by deadhead distance from load `index`'s dropoff.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for the load set this was built
    /// from.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.from_load[index]
    }

    /// Number of loads this index was built over.
    pub fn len(&self) -> usize {
        self.from_load.len()
    }

    /// Returns `true` if the index was built over zero loads.
    pub fn is_empty(&self) -> bool {
        self.from_load.is_empty()
    }
}

fn sorted_by_pickup_distance(loads: &[Load], origin: Point, exclude: Option<usize>) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..loads.len()).filter(|&i| Some(i) != exclude).collect();
    indices.sort_by(|&a, &b| {
        let da = origin.distance_to(loads[a].pickup());
        let db = origin.distance_to(loads[b].pickup());
        da.total_cmp(&db)
    });
    indices
}
