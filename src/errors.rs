// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

use crate::exec::Failure;

#[derive(Error, Debug)]
pub enum MmakeError {
    #[error("Couldn't open rule file '{}': {source}", path.display())]
    RuleFileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid rule file: {0}")]
    InvalidRules(String),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// An explicitly requested goal has no rule (pre-flight validation).
    #[error("Rule '{0}' not found")]
    RuleNotFound(String),

    /// A target reached during the build has neither a rule nor a file.
    #[error("A rule for '{0}' does not exist")]
    NoRule(String),

    #[error("Cyclic dependency detected: {}", .0.join(" -> "))]
    DependencyCycle(Vec<String>),

    #[error("Building '{target}' failed: {failure}")]
    CommandFailed { target: String, failure: Failure },
}

pub type Result<T> = std::result::Result<T, MmakeError>;
