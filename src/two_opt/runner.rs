//! 2-opt execution loop.
//!
//! # Algorithm
//!
//! 1. Seed with the open nearest-neighbor order and its length
//! 2. Sweep all position pairs `1 <= i < j < n` in row-major order:
//!    a. Reverse `tour[i..=j]` and recompute the full tour length
//!    b. If strictly shorter, keep the reversal and continue the sweep
//!    from the modified tour; otherwise undo it
//! 3. Repeat sweeps until one completes without an accepted move
//!
//! Position 0 is never moved, so the tour keeps starting at city 0.
//!
//! # Complexity
//!
//! O(n³) per sweep: O(n²) candidate moves, each evaluated in O(n).

use tracing::{debug, trace};

use crate::city::City;
use crate::construct::nearest_neighbor_order;
use crate::geometry::tour_length;
use crate::tour::SolveResult;

/// Result of a 2-opt run.
#[derive(Debug, Clone)]
pub struct TwoOptResult {
    /// Closed tour at the local optimum.
    pub tour: Vec<usize>,

    /// Length of `tour`.
    pub length: f64,

    /// Length of the nearest-neighbor seed.
    pub initial_length: f64,

    /// Number of full sweeps, including the final one without improvement.
    pub sweeps: usize,

    /// Number of accepted reversals.
    pub improvements: usize,

    /// Tour length after every accepted reversal, starting with the seed.
    pub length_history: Vec<f64>,
}

impl TwoOptResult {
    /// Drops the run statistics.
    pub fn into_solve_result(self) -> SolveResult {
        SolveResult {
            tour: self.tour,
            length: self.length,
        }
    }
}

/// Executes 2-opt local search.
pub struct TwoOptRunner;

impl TwoOptRunner {
    /// Runs 2-opt from the nearest-neighbor tour of `cities`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::city::City;
    /// use u_tsp::two_opt::TwoOptRunner;
    ///
    /// let cities = vec![
    ///     City::new(0, 0.0, 0.0),
    ///     City::new(1, 1.0, 1.0),
    ///     City::new(2, 2.0, 2.0),
    ///     City::new(3, 3.0, 0.0),
    ///     City::new(4, 4.0, 1.0),
    /// ];
    /// let result = TwoOptRunner::run(&cities);
    /// assert!(result.length <= result.initial_length);
    /// assert_eq!(result.tour.first(), result.tour.last());
    /// ```
    pub fn run(cities: &[City]) -> TwoOptResult {
        let n = cities.len();
        if n == 0 {
            return TwoOptResult {
                tour: Vec::new(),
                length: 0.0,
                initial_length: 0.0,
                sweeps: 0,
                improvements: 0,
                length_history: vec![0.0],
            };
        }

        let (mut tour, _) = nearest_neighbor_order(cities);
        let mut current = tour_length(&tour, cities);
        let initial_length = current;

        let mut sweeps = 0usize;
        let mut improvements = 0usize;
        let mut length_history = vec![current];

        let mut improved = true;
        while improved {
            improved = false;
            sweeps += 1;

            for i in 1..n.saturating_sub(1) {
                for j in i + 1..n {
                    tour[i..=j].reverse();
                    let candidate = tour_length(&tour, cities);

                    if candidate < current {
                        trace!(i, j, from = current, to = candidate, "2-opt move accepted");
                        current = candidate;
                        improvements += 1;
                        length_history.push(current);
                        improved = true;
                    } else {
                        tour[i..=j].reverse();
                    }
                }
            }
        }

        debug!(
            event = "two_opt_end",
            cities = n,
            sweeps,
            improvements,
            initial_length,
            length = current,
        );

        let SolveResult { tour, length } = SolveResult::closed(tour, current);
        TwoOptResult {
            tour,
            length,
            initial_length,
            sweeps,
            improvements,
            length_history,
        }
    }
}

/// 2-opt tour for `cities`, without run statistics.
pub fn two_opt(cities: &[City]) -> SolveResult {
    TwoOptRunner::run(cities).into_solve_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::nearest_neighbor;
    use crate::tour::is_permutation;
    use proptest::prelude::*;

    fn cities_from(coords: &[(f64, f64)]) -> Vec<City> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| City::new(i, x, y))
            .collect()
    }

    /// Returns true if no single reversal `1 <= i < j < n` shortens `open`.
    fn is_two_opt_optimal(open: &[usize], cities: &[City]) -> bool {
        let base = tour_length(open, cities);
        let n = open.len();
        for i in 1..n.saturating_sub(1) {
            for j in i + 1..n {
                let mut candidate = open.to_vec();
                candidate[i..=j].reverse();
                if tour_length(&candidate, cities) < base {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_fixture_uncrosses() {
        let cities = cities_from(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 0.0), (4.0, 1.0)]);
        let result = TwoOptRunner::run(&cities);

        assert_eq!(result.tour, vec![0, 1, 2, 4, 3, 0]);
        let expected = 3.0 * 2f64.sqrt() + 5f64.sqrt() + 3.0;
        assert!(
            (result.length - expected).abs() < 1e-9,
            "expected {expected}, got {}",
            result.length
        );
        assert_eq!(result.improvements, 1);
        assert_eq!(result.sweeps, 2);
    }

    #[test]
    fn test_rectangle_recovers_perimeter() {
        // NN walks 0, 1, 3, 4, 2 and crosses itself; the optimum is the 3x1 perimeter.
        let cities = cities_from(&[(0.0, 0.0), (1.0, 0.0), (3.0, 0.0), (0.0, 1.0), (3.0, 1.0)]);
        let seed = nearest_neighbor(&cities);
        assert_eq!(seed.tour, vec![0, 1, 3, 4, 2, 0]);

        let result = TwoOptRunner::run(&cities);
        assert!((result.length - 8.0).abs() < 1e-9, "got {}", result.length);
        assert_eq!(result.tour, vec![0, 3, 4, 2, 1, 0]);
        assert_eq!(result.improvements, 3);
        assert_eq!(result.sweeps, 3);
    }

    #[test]
    fn test_degenerate_sizes() {
        let empty = TwoOptRunner::run(&[]);
        assert!(empty.tour.is_empty());
        assert_eq!(empty.length, 0.0);

        let single = TwoOptRunner::run(&cities_from(&[(3.0, 3.0)]));
        assert_eq!(single.tour, vec![0, 0]);
        assert_eq!(single.length, 0.0);

        let pair = TwoOptRunner::run(&cities_from(&[(0.0, 0.0), (5.0, 0.0)]));
        assert_eq!(pair.tour, vec![0, 1, 0]);
        assert!((pair.length - 10.0).abs() < 1e-12);
        assert_eq!(pair.improvements, 0);
        assert_eq!(pair.sweeps, 1);
    }

    #[test]
    fn test_nan_coordinates_terminate() {
        let cities = cities_from(&[(0.0, 0.0), (f64::NAN, 1.0), (2.0, 2.0), (3.0, 0.0)]);
        let result = TwoOptRunner::run(&cities);
        assert!(result.length.is_nan());
        assert_eq!(result.improvements, 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_local_optimum_no_worse_than_seed(
            coords in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..14)
        ) {
            let cities = cities_from(&coords);
            let result = TwoOptRunner::run(&cities);
            let seed = nearest_neighbor(&cities);

            prop_assert!(result.length <= result.initial_length);
            prop_assert!(result.length <= seed.length + 1e-9);
            prop_assert_eq!(result.tour.first(), result.tour.last());
            prop_assert_eq!(result.tour[0], 0);

            let open = &result.tour[..result.tour.len() - 1];
            prop_assert!(is_permutation(open, cities.len()));
            prop_assert!(is_two_opt_optimal(open, &cities));

            for pair in result.length_history.windows(2) {
                prop_assert!(pair[1] < pair[0]);
            }
        }
    }
}
