//! SA configuration.

use crate::error::TspError;

/// Configuration for the Simulated Annealing algorithm.
///
/// Temperature follows geometric cooling, `T_{k+1} = cooling_rate * T_k`,
/// and the search stops once `T <= min_temperature`. The defaults give a
/// fixed budget of 1838 temperature levels regardless of instance size.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.99)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// The search stops when the temperature drops to this value or below.
    pub min_temperature: f64,

    /// Multiplicative cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Number of neighbor evaluations at each temperature level.
    pub iterations_per_temperature: usize,

    /// Random seed for reproducibility. `None` draws fresh entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 0.1,
            cooling_rate: 0.995,
            iterations_per_temperature: 1,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TspError> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(invalid("initial_temperature must be positive and finite"));
        }
        if self.min_temperature.is_nan() || self.min_temperature <= 0.0 {
            return Err(invalid("min_temperature must be positive"));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(invalid(
                "min_temperature must be less than initial_temperature",
            ));
        }
        if self.cooling_rate.is_nan() || self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(TspError::InvalidConfig(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.iterations_per_temperature == 0 {
            return Err(invalid("iterations_per_temperature must be at least 1"));
        }
        Ok(())
    }

    /// Number of temperature levels visited before the stopping threshold.
    ///
    /// Returns 0 for an invalid configuration.
    pub fn temperature_levels(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let mut temperature = self.initial_temperature;
        let mut levels = 0;
        while temperature > self.min_temperature {
            levels += 1;
            temperature *= self.cooling_rate;
        }
        levels
    }

    /// Total neighbor evaluations of one run.
    pub fn total_iterations(&self) -> usize {
        self.temperature_levels() * self.iterations_per_temperature
    }
}

fn invalid(msg: &str) -> TspError {
    TspError::InvalidConfig(msg.to_string())
}
