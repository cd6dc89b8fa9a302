//! Script commands
//!
//! One command per line; blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! mkdir /a/b/c
//! touch /a/b/c/notes
//! write /a/b/c/notes hello world
//! cat /a/b/c/notes
//! ```

use std::str::FromStr;

/// A single namespace operation parsed from a script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Mkdir(String),
    Ls(String),
    Touch(String),
    Write { path: String, text: String },
    Cat(String),
    Mv { path: String, name: String },
    Stat(String),
    Tree,
}

impl ScriptCommand {
    /// Parse one line; `Ok(None)` for blank lines and comments
    pub fn parse_line(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for ScriptCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = split_word(line);
        let (path, rest) = split_word(rest);
        let require_path = || {
            if path.is_empty() {
                Err(format!("{} requires a path", verb))
            } else {
                Ok(path.to_string())
            }
        };

        match verb {
            "mkdir" => Ok(ScriptCommand::Mkdir(require_path()?)),
            // ls without an argument lists the root
            "ls" => {
                let path = if path.is_empty() { "/" } else { path };
                Ok(ScriptCommand::Ls(path.to_string()))
            }
            "touch" => Ok(ScriptCommand::Touch(require_path()?)),
            "write" => Ok(ScriptCommand::Write {
                path: require_path()?,
                text: rest.to_string(),
            }),
            "cat" => Ok(ScriptCommand::Cat(require_path()?)),
            "mv" => {
                let (name, _) = split_word(rest);
                if name.is_empty() {
                    return Err("mv requires a path and a new name".to_string());
                }
                Ok(ScriptCommand::Mv {
                    path: require_path()?,
                    name: name.to_string(),
                })
            }
            "stat" => Ok(ScriptCommand::Stat(require_path()?)),
            "tree" => Ok(ScriptCommand::Tree),
            other => Err(format!("unknown command: {}", other)),
        }
    }
}

/// Split off the first whitespace-delimited word
///
/// Leading whitespace is skipped; only the one separator after the word is
/// consumed, so the remainder keeps its spacing.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (s, ""),
    }
}
