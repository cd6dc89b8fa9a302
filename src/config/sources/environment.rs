//! Environment variable source: TREEFS_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::Map;

/// Add environment variable overlay to builder.
/// Uses TREEFS__ prefix and __ as separator for nested keys, e.g.
/// `TREEFS__SIZING__FIXED=2048`. `source` replaces the process environment.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    source: Option<Map<String, String>>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("TREEFS")
            .separator("__")
            .try_parsing(true)
            .source(source),
    );
    Ok(builder)
}
