//! Defaults seeded into every builder before any source is added.

use crate::sizing::{DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Start a builder holding the default sizing and logging values.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("sizing.min", DEFAULT_MIN_SIZE as i64)?
        .set_default("sizing.max", DEFAULT_MAX_SIZE as i64)?
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")?
        .set_default("logging.color", true)
}
