//! Configuration
//!
//! Sizing policy and logging settings, merged from defaults, an optional TOML
//! file and `TREEFS__*` environment variables.

pub mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::sizing::{FixedSize, RandomSize, SizeGenerator, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE};
use crate::types::Size;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreefsConfig {
    #[serde(default)]
    pub sizing: SizingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_min_size() -> Size {
    DEFAULT_MIN_SIZE
}

fn default_max_size() -> Size {
    DEFAULT_MAX_SIZE
}

/// File size policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizingConfig {
    /// Smallest size drawn for a new file (inclusive)
    #[serde(default = "default_min_size")]
    pub min: Size,

    /// Largest size drawn for a new file (exclusive)
    #[serde(default = "default_max_size")]
    pub max: Size,

    /// Give every file this size instead of drawing one
    #[serde(default)]
    pub fixed: Option<Size>,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            min: default_min_size(),
            max: default_max_size(),
            fixed: None,
        }
    }
}

impl SizingConfig {
    /// Build the size generator this policy describes
    pub fn build(&self) -> Result<Box<dyn SizeGenerator>, ApiError> {
        if let Some(size) = self.fixed {
            return Ok(Box::new(FixedSize(size)));
        }
        let random = RandomSize::new(self.min..self.max).ok_or_else(|| {
            ApiError::ConfigError(format!(
                "Invalid size range: min {} must be below max {}",
                self.min, self.max
            ))
        })?;
        Ok(Box::new(random))
    }
}
