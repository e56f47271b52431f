//! Simulated annealing over closed tours.

use rand::Rng;

use super::config::SaConfig;
use super::runner::{anneal, SaResult};
use super::types::SaProblem;
use crate::city::City;
use crate::construct::nearest_neighbor_order;
use crate::geometry::tour_length;
use crate::tour::{rotate_to_origin, SolveResult};

/// Tour search seeded from nearest neighbor, moving by random transpositions.
///
/// The neighbor swaps the cities at two uniformly drawn positions, drawn
/// independently, so both may coincide and leave the tour unchanged.
#[derive(Debug, Clone, Copy)]
pub struct TourSwapProblem<'a> {
    cities: &'a [City],
}

impl<'a> TourSwapProblem<'a> {
    pub fn new(cities: &'a [City]) -> Self {
        Self { cities }
    }
}

impl SaProblem for TourSwapProblem<'_> {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Vec<usize> {
        nearest_neighbor_order(self.cities).0
    }

    fn cost(&self, tour: &Vec<usize>) -> f64 {
        tour_length(tour, self.cities)
    }

    /// # Panics
    /// Panics if `tour` is empty.
    fn neighbor<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        let mut next = tour.clone();
        let i = rng.random_range(0..next.len());
        let j = rng.random_range(0..next.len());
        next.swap(i, j);
        next
    }
}

/// Runs annealing over `cities` and returns the full run record.
///
/// Returns `None` for an empty city set. `config` must be valid.
pub(crate) fn anneal_tour<R: Rng>(
    cities: &[City],
    config: &SaConfig,
    rng: &mut R,
) -> Option<SaResult<Vec<usize>>> {
    if cities.is_empty() {
        return None;
    }
    Some(anneal(&TourSwapProblem::new(cities), config, rng))
}

/// Best tour found by annealing, rotated to start at city 0 and closed.
pub(crate) fn simulated_annealing<R: Rng>(
    cities: &[City],
    config: &SaConfig,
    rng: &mut R,
) -> SolveResult {
    let Some(result) = anneal_tour(cities, config, rng) else {
        return SolveResult::empty();
    };
    let mut best = result.best;
    rotate_to_origin(&mut best);
    SolveResult::closed(best, result.best_cost)
}
