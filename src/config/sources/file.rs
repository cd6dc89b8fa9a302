//! Config file source

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::Path;

/// Add a required TOML file to builder.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let name = path
        .to_str()
        .ok_or_else(|| ConfigError::Message(format!("Non UTF-8 config path: {:?}", path)))?;
    Ok(builder.add_source(File::new(name, FileFormat::Toml).required(true)))
}
