// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] defines the `ExecutorBackend` trait the planner drives, the
//!   `BuildOutcome` it gets back and the explicit `ExecContext` commands run in.
//! - [`process`] is the production backend: spawn, wait, classify.
//! - [`dry_run`] prints commands without running anything (`-n`).

pub mod backend;
pub mod dry_run;
pub mod process;

pub use backend::{BuildOutcome, ExecContext, ExecutorBackend, Failure, echo_command};
pub use dry_run::DryRunExecutor;
pub use process::ProcessExecutor;
