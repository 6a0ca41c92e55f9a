// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The planner talks to an `ExecutorBackend` instead of spawning processes
//! itself. Production uses [`super::ProcessExecutor`]; tests provide a
//! scripted backend that records invocations and never forks.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

/// How a build command ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Success,
    Failed(Failure),
}

impl BuildOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BuildOutcome::Success)
    }
}

/// Why a build command did not succeed.
///
/// All variants abort the build chain the same way; they only differ in the
/// diagnostic shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The process ran and exited with a non-zero status.
    Exit(i32),
    /// The process was terminated by a signal.
    Signal(i32),
    /// The process could not be started (fork/exec failure).
    Spawn { program: String, reason: String },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Exit(code) => write!(f, "command exited with status {code}"),
            Failure::Signal(sig) => write!(f, "command terminated by signal {sig}"),
            Failure::Spawn { program, reason } => {
                write!(f, "failed to execute '{program}': {reason}")
            }
        }
    }
}

/// Working directory and environment handed to every spawned command.
///
/// Passed in explicitly so the executor never depends on the ambient process
/// state of `mmake` itself.
#[derive(Debug, Clone, Default)]
pub struct ExecContext {
    pub working_dir: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl ExecContext {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
            env: Vec::new(),
        }
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

/// Trait abstracting how a rule's command is executed.
pub trait ExecutorBackend {
    /// Run `command` (program followed by its arguments) to completion.
    ///
    /// When `echo` is set the command is printed before anything is spawned.
    fn run(&mut self, command: &[String], echo: bool) -> BuildOutcome;
}

/// Write `command` space-separated and newline-terminated, then flush so the
/// line lands before any output of the child.
pub fn echo_command(out: &mut impl Write, command: &[String]) -> io::Result<()> {
    writeln!(out, "{}", command.join(" "))?;
    out.flush()
}
