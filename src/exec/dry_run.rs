// src/exec/dry_run.rs

use std::io::{self, Write};

use tracing::warn;

use super::backend::{BuildOutcome, ExecutorBackend, echo_command};

/// Prints every command it is asked to run and reports success.
///
/// Commands are printed regardless of `echo`: listing them is the point of a
/// dry run.
pub struct DryRunExecutor<W: Write = io::Stdout> {
    out: W,
}

impl DryRunExecutor<io::Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for DryRunExecutor<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> DryRunExecutor<W> {
    pub fn with_output(out: W) -> Self {
        Self { out }
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<W: Write> ExecutorBackend for DryRunExecutor<W> {
    fn run(&mut self, command: &[String], _echo: bool) -> BuildOutcome {
        if let Err(e) = echo_command(&mut self.out, command) {
            warn!(error = %e, "failed to print dry-run command");
        }
        BuildOutcome::Success
    }
}
