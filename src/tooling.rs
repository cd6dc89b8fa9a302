//! Tooling Layer
//!
//! Command-line front end that drives a namespace from scripted commands.

pub mod cli;
pub mod script;

pub use cli::{Cli, CliContext, Commands, OutputFormat};
pub use script::ScriptCommand;
