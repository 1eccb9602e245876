use thiserror::Error;

use cable_solvers::limit;

/// Default lower slope bound shared by every component.
pub const DEFAULT_SLOPE_MIN: f64 = 1000.0;

/// How unresolved curve limits affect the overall result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Policy {
    /// Unresolved limits are stored as zero and logged; solving succeeds.
    #[default]
    Permissive,

    /// Any unresolved limit on an enabled component fails the solve.
    Strict,
}

/// Configuration for [`solve_limits`](crate::solve_limits).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    slope_min: f64,
    strain: Option<f64>,
    policy: Policy,
    search: limit::Config,
}

/// Errors that can occur when validating a limit solving config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("slope_min must be finite")]
    SlopeMin,

    #[error("strain override must be finite and non-negative")]
    Strain,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slope_min: DEFAULT_SLOPE_MIN,
            strain: None,
            policy: Policy::default(),
            search: limit::Config::default(),
        }
    }
}

impl Config {
    /// Creates a new config with validated settings.
    ///
    /// With `strain` set, every curve's limit is taken at that percent strain
    /// instead of being searched for.
    ///
    /// # Errors
    ///
    /// Returns an error if `slope_min` is non-finite, or if `strain` is
    /// negative or non-finite.
    pub fn new(slope_min: f64, strain: Option<f64>, policy: Policy) -> Result<Self, ConfigError> {
        if !slope_min.is_finite() {
            return Err(ConfigError::SlopeMin);
        }
        if let Some(strain) = strain {
            if !strain.is_finite() || strain < 0.0 {
                return Err(ConfigError::Strain);
            }
        }

        Ok(Self {
            slope_min,
            strain,
            policy,
            search: limit::Config::default(),
        })
    }

    /// Replaces the search sweeps.
    #[must_use]
    pub fn with_search(self, search: limit::Config) -> Self {
        Self { search, ..self }
    }

    /// Returns the lower slope bound.
    #[must_use]
    pub fn slope_min(&self) -> f64 {
        self.slope_min
    }

    /// Returns the strain override, if any.
    #[must_use]
    pub fn strain(&self) -> Option<f64> {
        self.strain
    }

    /// Returns the aggregation policy.
    #[must_use]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns the search sweeps.
    #[must_use]
    pub fn search(&self) -> &limit::Config {
        &self.search
    }
}
