//! Strategy selection and the `solve` entry point.
//!
//! Every strategy implements [`Heuristic`]; [`Method`] names them and
//! [`Solver`] dispatches a method to its heuristic.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::debug;

use crate::city::City;
use crate::construct;
use crate::error::TspError;
use crate::sa::{self, SaConfig};
use crate::tour::SolveResult;
use crate::two_opt;

/// A tour heuristic.
///
/// Deterministic heuristics ignore `rng`.
pub trait Heuristic {
    /// Short machine-readable name.
    fn name(&self) -> &'static str;

    /// Computes a closed tour over `cities`.
    fn solve<R: Rng>(&self, cities: &[City], rng: &mut R) -> SolveResult;
}

/// Nearest-neighbor construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl Heuristic for NearestNeighbor {
    fn name(&self) -> &'static str {
        "nearest-neighbor"
    }

    fn solve<R: Rng>(&self, cities: &[City], _rng: &mut R) -> SolveResult {
        construct::nearest_neighbor(cities)
    }
}

/// 2-opt local search from the nearest-neighbor tour.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoOpt;

impl Heuristic for TwoOpt {
    fn name(&self) -> &'static str {
        "two-opt"
    }

    fn solve<R: Rng>(&self, cities: &[City], _rng: &mut R) -> SolveResult {
        two_opt::two_opt(cities)
    }
}

/// Simulated annealing from the nearest-neighbor tour.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAnnealing {
    config: SaConfig,
}

impl SimulatedAnnealing {
    /// Creates the heuristic after validating `config`.
    pub fn new(config: SaConfig) -> Result<Self, TspError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }
}

impl Heuristic for SimulatedAnnealing {
    fn name(&self) -> &'static str {
        "simulated-annealing"
    }

    fn solve<R: Rng>(&self, cities: &[City], rng: &mut R) -> SolveResult {
        sa::simulated_annealing(cities, &self.config, rng)
    }
}

/// Greedy construction (currently the nearest-neighbor tour).
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Heuristic for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve<R: Rng>(&self, cities: &[City], _rng: &mut R) -> SolveResult {
        construct::greedy(cities)
    }
}

/// Available tour strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Method {
    #[default]
    NearestNeighbor,
    TwoOpt,
    SimulatedAnnealing,
    Greedy,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::NearestNeighbor,
        Method::TwoOpt,
        Method::SimulatedAnnealing,
        Method::Greedy,
    ];

    /// Resolves a method name, falling back to nearest neighbor for
    /// anything unrecognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::Method;
    ///
    /// assert_eq!(Method::from_name("twoOpt"), Method::TwoOpt);
    /// assert_eq!(Method::from_name("christofides"), Method::NearestNeighbor);
    /// ```
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Canonical kebab-case identifier.
    pub fn id(self) -> &'static str {
        match self {
            Method::NearestNeighbor => "nearest-neighbor",
            Method::TwoOpt => "two-opt",
            Method::SimulatedAnnealing => "simulated-annealing",
            Method::Greedy => "greedy",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Method::NearestNeighbor => "Nearest Neighbor",
            Method::TwoOpt => "2-Opt Local Search",
            Method::SimulatedAnnealing => "Simulated Annealing",
            Method::Greedy => "Greedy Heuristic",
        }
    }

    /// One-sentence summary of the strategy.
    pub fn description(self) -> &'static str {
        match self {
            Method::NearestNeighbor => {
                "Starts at a city and repeatedly visits the nearest unvisited city."
            }
            Method::TwoOpt => {
                "Improves an initial solution by reversing segments to remove crossing edges."
            }
            Method::SimulatedAnnealing => {
                "Probabilistic search that accepts worse tours early to escape local optima."
            }
            Method::Greedy => {
                "Makes locally optimal choices at each step; currently the nearest-neighbor tour."
            }
        }
    }

    /// Whether the method draws random numbers.
    pub fn is_stochastic(self) -> bool {
        matches!(self, Method::SimulatedAnnealing)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Method {
    type Err = TspError;

    /// Accepts kebab-case, snake_case and the camelCase names used by the
    /// browser front end.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "nearest-neighbor" | "nearest_neighbor" | "nearestNeighbor" => {
                Ok(Method::NearestNeighbor)
            }
            "two-opt" | "two_opt" | "twoOpt" | "2-opt" | "2opt" => Ok(Method::TwoOpt),
            "simulated-annealing" | "simulated_annealing" | "simulatedAnnealing" => {
                Ok(Method::SimulatedAnnealing)
            }
            "greedy" | "greedy-heuristic" | "greedy_heuristic" | "greedyHeuristic" => {
                Ok(Method::Greedy)
            }
            other => Err(TspError::UnknownMethod(other.to_string())),
        }
    }
}

/// Dispatches a [`Method`] to its heuristic.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    annealing: SimulatedAnnealing,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `config` for simulated annealing. Fails if `config` is invalid.
    pub fn with_sa_config(config: SaConfig) -> Result<Self, TspError> {
        Ok(Self {
            annealing: SimulatedAnnealing::new(config)?,
        })
    }

    pub fn sa_config(&self) -> &SaConfig {
        self.annealing.config()
    }

    /// Solves with a generator built from the annealing seed, or from
    /// fresh entropy when no seed is configured.
    pub fn solve(&self, cities: &[City], method: Method) -> SolveResult {
        let mut rng = sa::rng_for(self.annealing.config());
        self.solve_with_rng(cities, method, &mut rng)
    }

    /// Solves drawing every random number from `rng`.
    pub fn solve_with_rng<R: Rng>(
        &self,
        cities: &[City],
        method: Method,
        rng: &mut R,
    ) -> SolveResult {
        debug!(event = "solve_start", method = %method, cities = cities.len());

        let result = match method {
            Method::NearestNeighbor => NearestNeighbor.solve(cities, rng),
            Method::TwoOpt => TwoOpt.solve(cities, rng),
            Method::SimulatedAnnealing => self.annealing.solve(cities, rng),
            Method::Greedy => Greedy.solve(cities, rng),
        };

        debug!(
            event = "solve_end",
            method = %method,
            cities = cities.len(),
            length = result.length,
        );
        result
    }
}

/// Solves `cities` with `method` using the default configuration.
///
/// # Examples
///
/// ```
/// use u_tsp::{solve, City, Method};
///
/// let cities = vec![City::new(0, 0.0, 0.0), City::new(1, 5.0, 0.0)];
/// let result = solve(&cities, Method::TwoOpt);
/// assert_eq!(result.tour, vec![0, 1, 0]);
/// assert!((result.length - 10.0).abs() < 1e-12);
/// ```
pub fn solve(cities: &[City], method: Method) -> SolveResult {
    Solver::new().solve(cities, method)
}
