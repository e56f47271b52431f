//! 2-opt local search.
//!
//! Starting from the nearest-neighbor tour, repeatedly reverses tour
//! segments while doing so shortens the tour. The result is a fixed point
//! of the segment-reversal neighborhood: no single reversal shortens it.
//!
//! # References
//!
//! - Croes, G.A. (1958). "A method for solving traveling salesman problems",
//!   *Operations Research* 6(6), 791-812.

mod runner;

pub use runner::{two_opt, TwoOptResult, TwoOptRunner};
