//! Nearest-neighbor construction.

use crate::city::City;
use crate::geometry::distance;
use crate::tour::SolveResult;

/// Builds the open nearest-neighbor order starting at position 0.
///
/// Returns the order and the accumulated length of the chosen edges plus
/// the closing edge back to position 0. Ties go to the lowest index.
///
/// # Complexity
/// O(n²) time, O(n) space
pub fn nearest_neighbor_order(cities: &[City]) -> (Vec<usize>, f64) {
    let n = cities.len();
    if n == 0 {
        return (Vec::new(), 0.0);
    }

    let mut order = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    order.push(0);
    visited[0] = true;

    let mut current = 0;
    let mut length = 0.0;

    for _ in 1..n {
        let mut next = None;
        let mut min_dist = f64::INFINITY;

        for (j, city) in cities.iter().enumerate() {
            if visited[j] {
                continue;
            }
            let d = distance(&cities[current], city);
            if d < min_dist {
                min_dist = d;
                next = Some(j);
            }
        }

        // Every remaining distance is NaN or infinite: take the lowest
        // unvisited index so the order stays a permutation.
        let (next, step) = match next {
            Some(j) => (j, min_dist),
            None => match visited.iter().position(|&v| !v) {
                Some(j) => (j, distance(&cities[current], &cities[j])),
                None => break,
            },
        };

        order.push(next);
        visited[next] = true;
        length += step;
        current = next;
    }

    length += distance(&cities[current], &cities[0]);
    (order, length)
}

/// Nearest-neighbor tour, closed at position 0.
///
/// # Examples
///
/// ```
/// use u_tsp::city::City;
/// use u_tsp::construct::nearest_neighbor;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 10.0, 0.0),
///     City::new(2, 1.0, 0.0),
/// ];
/// let result = nearest_neighbor(&cities);
/// assert_eq!(result.tour, vec![0, 2, 1, 0]);
/// assert!((result.length - 20.0).abs() < 1e-12);
/// ```
pub fn nearest_neighbor(cities: &[City]) -> SolveResult {
    if cities.is_empty() {
        return SolveResult::empty();
    }
    let (order, length) = nearest_neighbor_order(cities);
    SolveResult::closed(order, length)
}
