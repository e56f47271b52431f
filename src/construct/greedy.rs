//! Greedy construction entry point.

use tracing::debug;

use super::nearest::nearest_neighbor;
use crate::city::City;
use crate::tour::SolveResult;

/// Greedy tour construction.
///
/// Delegates to [`nearest_neighbor`] and returns an identical result.
// TODO: replace with greedy-edge matching (sort all edges, add the shortest
// ones that keep degrees <= 2 and close no early cycle).
pub fn greedy(cities: &[City]) -> SolveResult {
    debug!(
        event = "greedy_alias",
        cities = cities.len(),
        "greedy construction delegates to nearest neighbor"
    );
    nearest_neighbor(cities)
}
