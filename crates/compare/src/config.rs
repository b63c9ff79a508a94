use serde::{Deserialize, Serialize};
use thiserror::Error;

use odelab_core::{DEFAULT_MAX_POINTS, GridConfig, GridPolicy};

/// Configuration for the comparison engine.
///
/// Deserializes from any serde format; `from_toml_str` is provided for the
/// common case of a TOML file. Missing keys take their default values and
/// the result is validated before it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig", into = "RawConfig")]
pub struct Config {
    max_points: usize,
    grid_policy: GridPolicy,
}

/// Errors that can occur when building or loading a [`Config`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_points must be at least 2, got {0}")]
    MaxPoints(usize),

    #[error("invalid config document: {0}")]
    Parse(String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            grid_policy: GridPolicy::default(),
        }
    }
}

impl Config {
    /// Creates a new validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_points` is below 2, since every grid holds at
    /// least its start and end points.
    pub fn new(max_points: usize, grid_policy: GridPolicy) -> Result<Self, ConfigError> {
        if max_points < 2 {
            return Err(ConfigError::MaxPoints(max_points));
        }
        Ok(Self {
            max_points,
            grid_policy,
        })
    }

    /// Parses a config from a TOML document.
    ///
    /// ```
    /// use odelab_compare::Config;
    ///
    /// let config = Config::from_toml_str("max_points = 200\ngrid_policy = \"exact_count\"")?;
    /// assert_eq!(config.max_points(), 200);
    /// # Ok::<(), odelab_compare::ConfigError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        toml::from_str(document).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Returns the cap on grid points per request.
    #[must_use]
    pub fn max_points(&self) -> usize {
        self.max_points
    }

    /// Returns the grid construction policy.
    #[must_use]
    pub fn grid_policy(&self) -> GridPolicy {
        self.grid_policy
    }

    /// Returns the grid configuration derived from this config.
    #[must_use]
    pub fn grid(&self) -> GridConfig {
        GridConfig {
            max_points: self.max_points,
            policy: self.grid_policy,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    max_points: usize,
    grid_policy: GridPolicy,
}

impl Default for RawConfig {
    fn default() -> Self {
        Config::default().into()
    }
}

impl From<Config> for RawConfig {
    fn from(config: Config) -> Self {
        Self {
            max_points: config.max_points,
            grid_policy: config.grid_policy,
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.max_points, raw.grid_policy)
    }
}
