//! Tour construction heuristics.
//!
//! - [`nearest_neighbor`]: start at position 0 and repeatedly move to the
//!   closest unvisited city. O(n²), deterministic.
//! - [`greedy`]: currently the same tour as [`nearest_neighbor`]. It is kept
//!   as its own entry point so a greedy-edge construction can replace it
//!   without touching callers.
//!
//! # References
//!
//! Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//! for the Traveling Salesman Problem"

mod greedy;
mod nearest;

pub use greedy::greedy;
pub use nearest::{nearest_neighbor, nearest_neighbor_order};
