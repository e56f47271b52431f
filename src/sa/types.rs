//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The implementor supplies the starting point, the cost function, and
/// neighbor generation. The runner handles temperature, the Metropolis
/// acceptance criterion, and best-solution tracking.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Creates the starting solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of the current solution.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
