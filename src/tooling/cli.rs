//! CLI Tooling
//!
//! Command-line interface that runs namespace scripts against a fresh,
//! in-memory namespace.

use crate::config::TreefsConfig;
use crate::error::ApiError;
use crate::namespace::{Namespace, NodeInfo};
use crate::tooling::script::ScriptCommand;
use crate::types::NodeKind;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::path::PathBuf;
use tracing::{info, warn};

/// The scripted session from the original demo driver
pub const DEMO_SCRIPT: &str = "\
mkdir /a/b/c
mkdir /b/d/h
mkdir /o/p/d
ls /
touch /a/b/c/file1
write /a/b/c/file1 testing
cat /a/b/c/file1
touch /a/b/c/file1
tree
";

/// treefs CLI - In-memory hierarchical namespace
#[derive(Parser)]
#[command(name = "treefs")]
#[command(about = "In-memory hierarchical namespace with aggregate directory sizes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold logging flags into the loaded configuration
    pub fn apply_overrides(&self, config: &mut TreefsConfig) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
    }
}

/// Output rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in demo session
    Demo {
        /// Output format (text or json)
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Run a script file, one command per line
    Run {
        /// Script path
        script: PathBuf,
        /// Output format (text or json)
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Report failing commands and continue instead of stopping
        #[arg(long)]
        keep_going: bool,
    },
}

/// CLI context holding the namespace being driven
pub struct CliContext {
    namespace: Namespace,
}

impl CliContext {
    pub fn new(config: &TreefsConfig) -> Result<Self, ApiError> {
        Ok(Self {
            namespace: Namespace::from_config(&config.sizing)?,
        })
    }

    /// Context over an existing namespace
    pub fn with_namespace(namespace: Namespace) -> Self {
        Self { namespace }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Execute a CLI command and return its printable output
    pub fn execute(&mut self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Demo { format } => self.run_script(DEMO_SCRIPT, *format, true),
            Commands::Run {
                script,
                format,
                keep_going,
            } => {
                let source = std::fs::read_to_string(script)?;
                info!(script = %script.display(), "running script");
                self.run_script(&source, *format, *keep_going)
            }
        }
    }

    /// Run every command in `source`
    ///
    /// With `keep_going`, failures are rendered inline and execution
    /// continues; otherwise the first failure is returned.
    pub fn run_script(
        &mut self,
        source: &str,
        format: OutputFormat,
        keep_going: bool,
    ) -> Result<String, ApiError> {
        let mut text = Vec::new();
        let mut records = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;
            let command = ScriptCommand::parse_line(line).map_err(|message| ApiError::Script {
                line: line_no,
                message,
            })?;
            let Some(command) = command else {
                continue;
            };

            match self.apply(&command) {
                Ok(output) => {
                    text.extend(output.text);
                    records.push(json!({ "line": line_no, "command": line.trim(), "output": output.json }));
                }
                Err(err) if keep_going => {
                    warn!(line = line_no, error = %err, "command failed");
                    text.push(format!("error: {}", err));
                    records.push(json!({ "line": line_no, "command": line.trim(), "error": err.to_string() }));
                }
                Err(err) => {
                    return Err(ApiError::Script {
                        line: line_no,
                        message: err.to_string(),
                    })
                }
            }
        }

        Ok(match format {
            OutputFormat::Text => text.join("\n"),
            OutputFormat::Json => serde_json::to_string_pretty(&records).map_err(|e| {
                ApiError::ConfigError(format!("Failed to render JSON output: {}", e))
            })?,
        })
    }

    fn apply(&mut self, command: &ScriptCommand) -> Result<CommandOutput, ApiError> {
        let ns = &mut self.namespace;
        let output = match command {
            ScriptCommand::Mkdir(path) => {
                let id = ns.make_directory(path)?;
                CommandOutput::silent(json!({ "path": ns.path_of(id) }))
            }
            ScriptCommand::Ls(path) => {
                let names: Vec<String> = ns.list(path)?.map(str::to_string).collect();
                CommandOutput {
                    json: json!(names),
                    text: names,
                }
            }
            ScriptCommand::Touch(path) => {
                let id = ns.create_file(path)?;
                let size = ns.node(id).map(|n| n.size()).unwrap_or(0);
                CommandOutput::silent(json!({ "path": ns.path_of(id), "size": size }))
            }
            ScriptCommand::Write { path, text } => {
                let id = ns.write_content(path, text)?;
                CommandOutput::silent(json!({ "path": ns.path_of(id), "appended": text.len() }))
            }
            ScriptCommand::Cat(path) => {
                let content = ns.read_content(path)?.to_string();
                CommandOutput {
                    json: json!(content),
                    text: vec![content],
                }
            }
            ScriptCommand::Mv { path, name } => {
                let id = ns.rename_path(path, name)?;
                CommandOutput::silent(json!({ "path": ns.path_of(id) }))
            }
            ScriptCommand::Stat(path) => {
                let info = ns.stat(path)?;
                CommandOutput {
                    text: vec![format_info(&info)],
                    json: json!(info),
                }
            }
            ScriptCommand::Tree => {
                let nodes = ns.walk();
                CommandOutput {
                    text: nodes.iter().map(format_tree_line).collect(),
                    json: json!(nodes),
                }
            }
        };
        Ok(output)
    }
}

struct CommandOutput {
    text: Vec<String>,
    json: serde_json::Value,
}

impl CommandOutput {
    fn silent(json: serde_json::Value) -> Self {
        Self {
            text: Vec::new(),
            json,
        }
    }
}

fn format_info(info: &NodeInfo) -> String {
    match info.children {
        Some(children) => format!(
            "{} {} size={} children={}",
            info.kind, info.path, info.size, children
        ),
        None => format!("{} {} size={}", info.kind, info.path, info.size),
    }
}

fn format_tree_line(info: &NodeInfo) -> String {
    let depth = if info.path == "/" {
        0
    } else {
        info.path.matches('/').count()
    };
    let name = if info.path == "/" { "/" } else { info.name.as_str() };
    let suffix = if info.kind == NodeKind::Directory && info.path != "/" {
        "/"
    } else {
        ""
    };
    format!("{}{}{} ({})", "  ".repeat(depth), name, suffix, info.size)
}
