// Configuration type definitions

use serde::Deserialize;

use crate::error::GiftError;
use crate::locale::Locale;

pub const DEFAULT_MIN_DELAY_MS: u64 = 1000;
pub const DEFAULT_MAX_DELAY_MS: u64 = 3000;
pub const DEFAULT_ERROR_RATE: f64 = 0.05;

/// Simulator tuning section
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Lower bound of the simulated latency, inclusive
    pub min_delay_ms: u64,
    /// Upper bound of the simulated latency, exclusive
    pub max_delay_ms: u64,
    /// Probability that a request is turned into a simulated failure
    pub error_rate: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        SimulatorConfig {
            min_delay_ms: DEFAULT_MIN_DELAY_MS,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
            error_rate: DEFAULT_ERROR_RATE,
        }
    }
}

impl SimulatorConfig {
    /// Check the semantic constraints serde can't express
    pub fn validate(&self) -> Result<(), GiftError> {
        if self.min_delay_ms >= self.max_delay_ms {
            return Err(GiftError::InvalidConfig(format!(
                "min_delay_ms ({}) must be less than max_delay_ms ({})",
                self.min_delay_ms, self.max_delay_ms
            )));
        }

        if !self.error_rate.is_finite() || !(0.0..=1.0).contains(&self.error_rate) {
            return Err(GiftError::InvalidConfig(format!(
                "error_rate ({}) must be within [0, 1]",
                self.error_rate
            )));
        }

        Ok(())
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Unset means "follow the environment"
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default)]
    pub simulator: SimulatorConfig,
}

impl Config {
    /// Configured locale, else the environment's (`LC_ALL`, `LANG`), else ja
    pub fn effective_locale(&self) -> Locale {
        self.locale.or_else(Locale::from_env).unwrap_or_default()
    }

    pub fn locale_with_env<F>(&self, lookup: F) -> Locale
    where
        F: Fn(&str) -> Option<String>,
    {
        self.locale
            .or_else(|| Locale::from_env_with(lookup))
            .unwrap_or_default()
    }
}
