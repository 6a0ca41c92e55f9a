// src/lib.rs

pub mod cli;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod rules;
pub mod types;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::engine::{Planner, resolve_goals, validate_targets};
use crate::exec::{DryRunExecutor, ExecContext, ExecutorBackend, ProcessExecutor};
use crate::fs::{FileSystem, RealFileSystem};
use crate::rules::{RuleStore, load_and_validate};
use crate::types::BuildOptions;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - rule file loading and validation
/// - pre-flight validation of explicit targets
/// - the rebuild planner, with a process or dry-run executor
pub fn run(args: CliArgs) -> Result<()> {
    let rules = load_and_validate(args.rule_file_path())?;

    validate_targets(&rules, &args.targets)?;
    let goals = resolve_goals(&rules, &args.targets);
    if goals.is_empty() {
        info!("rule file has no rules; nothing to build");
        return Ok(());
    }

    let fs = match &args.directory {
        Some(dir) => RealFileSystem::rooted(dir),
        None => RealFileSystem::new(),
    };
    let options = args.build_options();

    let commands_run = if args.dry_run {
        build(&rules, &fs, DryRunExecutor::new(), options, &goals)?
    } else {
        let context = ExecContext {
            working_dir: args.directory.clone(),
            env: Vec::new(),
        };
        build(&rules, &fs, ProcessExecutor::new(context), options, &goals)?
    };

    info!(?goals, commands_run, "build finished");
    Ok(())
}

fn build<E: ExecutorBackend>(
    rules: &RuleStore,
    fs: &dyn FileSystem,
    executor: E,
    options: BuildOptions,
    goals: &[String],
) -> Result<usize> {
    let mut planner = Planner::new(rules, fs, executor, options);
    planner.ensure_goals(goals)?;
    Ok(planner.commands_run())
}
