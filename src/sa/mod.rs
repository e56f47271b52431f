//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! For tours, the search starts from the nearest-neighbor order, perturbs
//! it by swapping two random positions, and reports the best tour seen.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod tour;
mod types;

pub use config::SaConfig;
pub use runner::{rng_for, SaResult, SaRunner};
pub use tour::TourSwapProblem;
pub(crate) use tour::simulated_annealing;
pub use types::SaProblem;
