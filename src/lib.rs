//! Heuristics for the planar Euclidean Traveling Salesman Problem.
//!
//! Given a set of cities, computes a short closed tour with one of several
//! interchangeable strategies:
//!
//! - **Nearest Neighbor**: greedy construction from city 0, O(n²).
//! - **2-Opt**: segment-reversal local search seeded from nearest neighbor,
//!   run until no single reversal shortens the tour.
//! - **Simulated Annealing (SA)**: random-swap search with Metropolis
//!   acceptance and geometric cooling, seeded from nearest neighbor.
//! - **Greedy**: a separate entry point that currently returns the
//!   nearest-neighbor tour.
//!
//! None of these is exact. Every solve is a fresh, synchronous computation
//! over an in-memory city slice.
//!
//! # Examples
//!
//! ```
//! use u_tsp::{parse_cities, solve, Method};
//!
//! let cities = parse_cities("0,0\n1,1\n2,2\n3,0\n4,1");
//! let result = solve(&cities, Method::from_name("twoOpt"));
//!
//! assert_eq!(result.tour, vec![0, 1, 2, 4, 3, 0]);
//! assert!(result.length > 0.0);
//! ```
//!
//! # Randomness
//!
//! Simulated annealing draws from an injected [`rand::Rng`]. Use
//! [`Solver::solve_with_rng`] or set [`SaConfig::seed`] for reproducible
//! runs.

pub mod city;
pub mod construct;
pub mod error;
pub mod geometry;
pub mod sa;
pub mod solver;
pub mod tour;
pub mod two_opt;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use city::{parse_cities, City};
pub use error::TspError;
pub use geometry::{distance, tour_length};
pub use sa::SaConfig;
pub use solver::{solve, Heuristic, Method, Solver};
pub use tour::SolveResult;
