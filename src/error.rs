//! Error types
//!
//! `NamespaceError` covers path-addressed tree operations. `ApiError` covers the
//! configuration, logging and CLI surface around the namespace.

use crate::types::{NodeId, Size};
use thiserror::Error;

/// Errors raised by namespace operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamespaceError {
    /// Path or name cannot be used for the requested operation
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Directory semantics required on a file
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// Content operation attempted on a directory
    #[error("Not a file: {0}")]
    NotAFile(String),

    /// A segment before the leaf already resolves to a file
    #[error("File exists where a directory is required: {0}")]
    FileExistsAsNonDirectory(String),

    /// A sibling with the same name already exists
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Path does not resolve to an existing node
    #[error("Not found: {0}")]
    NotFound(String),

    /// Adding a file would push an aggregate size past `u64::MAX`
    #[error("Size overflow: adding {size} bytes at {path}")]
    SizeOverflow { path: String, size: Size },

    /// Attempted to attach a missing node or attach under a file
    #[error("Cannot attach child {child} to {parent}")]
    NullChild { parent: NodeId, child: NodeId },
}

/// Errors raised outside the tree itself
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Namespace(#[from] NamespaceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
