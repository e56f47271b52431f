//! SA execution loop.

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::TspError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best cost before the first iteration, then after every iteration.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`, or from fresh
    /// entropy when no seed is set.
    pub fn run<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>, TspError> {
        let mut rng = rng_for(config);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA drawing every random number from `rng`.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>, TspError> {
        config.validate()?;
        Ok(anneal(problem, config, rng))
    }
}

/// Builds the generator described by `config.seed`.
pub fn rng_for(config: &SaConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Annealing loop. `config` must already be validated.
pub(crate) fn anneal<P: SaProblem, R: Rng>(
    problem: &P,
    config: &SaConfig,
    rng: &mut R,
) -> SaResult<P::Solution> {
    let mut current = problem.initial_solution(rng);
    let mut current_cost = problem.cost(&current);
    let mut best = current.clone();
    let mut best_cost = current_cost;

    let mut temperature = config.initial_temperature;
    let mut total_iterations = 0usize;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;

    let mut cost_history = Vec::with_capacity(config.total_iterations() + 1);
    cost_history.push(best_cost);

    debug!(
        event = "sa_start",
        initial_cost = current_cost,
        initial_temperature = temperature,
        min_temperature = config.min_temperature,
        cooling_rate = config.cooling_rate,
    );

    while temperature > config.min_temperature {
        for _ in 0..config.iterations_per_temperature {
            let neighbor = problem.neighbor(&current, rng);
            let neighbor_cost = problem.cost(&neighbor);

            // Metropolis acceptance criterion
            let accept = if neighbor_cost < current_cost {
                improving_moves += 1;
                true
            } else {
                let probability = ((current_cost - neighbor_cost) / temperature).exp();
                rng.random::<f64>() < probability
            };

            if accept {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    trace!(from = best_cost, to = current_cost, temperature, "new best");
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            total_iterations += 1;
            cost_history.push(best_cost);
        }

        temperature *= config.cooling_rate;
    }

    debug!(
        event = "sa_end",
        iterations = total_iterations,
        accepted_moves,
        improving_moves,
        final_temperature = temperature,
        best_cost,
    );

    SaResult {
        best,
        best_cost,
        iterations: total_iterations,
        final_temperature: temperature,
        accepted_moves,
        improving_moves,
        cost_history,
    }
}
