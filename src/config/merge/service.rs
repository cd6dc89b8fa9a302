//! MergeService: orchestrates sources, applies merge policy, deserializes to TreefsConfig.

use super::policy;
use crate::config::sources::{environment, file};
use crate::config::TreefsConfig;
use crate::error::ApiError;
use config::Map;
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from defaults and the process environment.
    pub fn load() -> Result<TreefsConfig, ApiError> {
        Self::load_with(None, None)
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<TreefsConfig, ApiError> {
        Self::load_with(Some(path), None)
    }

    /// Precedence: defaults (lowest) -> file -> environment (highest).
    ///
    /// `env` replaces the process environment when given.
    pub fn load_with(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<TreefsConfig, ApiError> {
        let builder = policy::builder_with_defaults()?;
        let builder = match path {
            Some(path) => file::add_to_builder(builder, path)?,
            None => builder,
        };
        let builder = environment::add_to_builder(builder, env)?;

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
