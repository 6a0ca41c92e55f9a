// src/exec/process.rs

//! Production executor: spawns the rule's program directly (no shell) and
//! blocks until it exits.

use std::io::{self, Write};
use std::process::{Command, ExitStatus};

use tracing::{debug, error, info, warn};

use super::backend::{BuildOutcome, ExecContext, ExecutorBackend, Failure, echo_command};

/// Runs commands as child processes, one at a time.
///
/// Echoed commands go to `out` (stdout in production); the child inherits
/// the real stdio of `mmake`.
pub struct ProcessExecutor<W: Write = io::Stdout> {
    context: ExecContext,
    out: W,
}

impl ProcessExecutor<io::Stdout> {
    pub fn new(context: ExecContext) -> Self {
        Self {
            context,
            out: io::stdout(),
        }
    }
}

impl<W: Write> ProcessExecutor<W> {
    pub fn with_output(context: ExecContext, out: W) -> Self {
        Self { context, out }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    fn build_command(&self, program: &str, args: &[String]) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = &self.context.working_dir {
            cmd.current_dir(dir);
        }
        cmd.envs(self.context.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        cmd
    }
}

impl<W: Write> ExecutorBackend for ProcessExecutor<W> {
    fn run(&mut self, command: &[String], echo: bool) -> BuildOutcome {
        // Echo precedes the spawn attempt, even if the spawn then fails.
        if echo {
            if let Err(e) = echo_command(&mut self.out, command) {
                warn!(error = %e, "failed to echo command");
            }
        }

        let Some((program, args)) = command.split_first() else {
            return BuildOutcome::Failed(Failure::Spawn {
                program: String::new(),
                reason: "empty command".to_string(),
            });
        };

        info!(cmd = %command.join(" "), "starting build command");

        // `status()` waits for the child, so no process is left unreaped.
        let status = match self.build_command(program, args).status() {
            Ok(status) => status,
            Err(e) => {
                error!(program = %program, error = %e, "failed to spawn build command");
                return BuildOutcome::Failed(Failure::Spawn {
                    program: program.clone(),
                    reason: e.to_string(),
                });
            }
        };

        let outcome = classify(status);
        debug!(program = %program, ?outcome, "build command exited");
        outcome
    }
}

fn classify(status: ExitStatus) -> BuildOutcome {
    if status.success() {
        return BuildOutcome::Success;
    }
    if let Some(code) = status.code() {
        return BuildOutcome::Failed(Failure::Exit(code));
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return BuildOutcome::Failed(Failure::Signal(sig));
        }
    }

    BuildOutcome::Failed(Failure::Exit(-1))
}
