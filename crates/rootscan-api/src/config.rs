//! Service configuration.
//!
//! Every field has a default, so a configuration file only needs the
//! settings it changes:
//!
//! ```toml
//! [defaults]
//! tolerance = 1e-8
//! max_iterations = 200
//!
//! [newton]
//! search_range = 20.0
//!
//! [secant.validation]
//! max_distance_factor = 12.0
//!
//! [plot]
//! samples = 500
//! ```

use std::path::{Path, PathBuf};

use rootscan_math::search::{NewtonSearchConfig, SecantSearchConfig};
use rootscan_math::solvers::SolverConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading or checking a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for this configuration.
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value is out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Plot sampling for the bisection service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Number of samples.
    pub samples: usize,
    /// Padding on each side, as a fraction of the bracket width.
    pub margin: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            samples: 300,
            margin: 0.1,
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Tolerance, iteration budget and exhaustion policy used when a request omits them.
    pub defaults: SolverConfig,
    /// Newton-Raphson search tuning.
    pub newton: NewtonSearchConfig,
    /// Secant search tuning.
    pub secant: SecantSearchConfig,
    /// Bisection plot sampling.
    pub plot: PlotConfig,
}

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |e: rootscan_math::MathError| ConfigError::Invalid(e.to_string());
        self.defaults.validate().map_err(invalid)?;
        self.newton.validate().map_err(invalid)?;
        self.secant.validate().map_err(invalid)?;
        if !self.plot.margin.is_finite() || self.plot.margin < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "plot.margin must be a non-negative number, got {}",
                self.plot.margin
            )));
        }
        Ok(())
    }
}
