// src/engine/planner.rs

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, trace};

use crate::errors::{MmakeError, Result};
use crate::exec::{BuildOutcome, ExecutorBackend};
use crate::fs::FileSystem;
use crate::rules::RuleStore;
use crate::types::BuildOptions;

use super::staleness::rebuild_reason;

/// Depth-first rebuild planner.
///
/// For each goal it ensures every prerequisite first (in declaration order),
/// then decides whether the goal itself is stale and, if so, runs its
/// command through the executor. The first failure anywhere aborts the
/// whole chain; nothing is retried.
///
/// Within one top-level goal a target is walked at most once, so its command
/// runs at most once even on diamond-shaped graphs with `force_rebuild`.
pub struct Planner<'a, E: ExecutorBackend> {
    rules: &'a RuleStore,
    fs: &'a dyn FileSystem,
    executor: E,
    options: BuildOptions,
    /// Targets already ensured during the current top-level goal.
    ensured: HashSet<String>,
    /// Targets currently being evaluated, outermost first.
    chain: Vec<String>,
    commands_run: usize,
}

impl<'a, E: ExecutorBackend> Planner<'a, E> {
    pub fn new(
        rules: &'a RuleStore,
        fs: &'a dyn FileSystem,
        executor: E,
        options: BuildOptions,
    ) -> Self {
        Self {
            rules,
            fs,
            executor,
            options,
            ensured: HashSet::new(),
            chain: Vec::new(),
            commands_run: 0,
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Number of commands handed to the executor so far.
    pub fn commands_run(&self) -> usize {
        self.commands_run
    }

    /// Ensure each goal left to right, stopping at the first failure.
    pub fn ensure_goals(&mut self, goals: &[String]) -> Result<()> {
        for goal in goals {
            self.ensure_built(goal)?;
        }
        Ok(())
    }

    /// Bring `target` and everything it depends on up to date.
    pub fn ensure_built(&mut self, target: &str) -> Result<()> {
        self.ensured.clear();
        self.chain.clear();
        debug!(rule = target, "ensuring goal");
        self.ensure(target)
    }

    fn ensure(&mut self, target: &str) -> Result<()> {
        if self.ensured.contains(target) {
            trace!(rule = target, "already ensured in this run");
            return Ok(());
        }
        if let Some(pos) = self.chain.iter().position(|t| t == target) {
            let mut cycle = self.chain[pos..].to_vec();
            cycle.push(target.to_string());
            return Err(MmakeError::DependencyCycle(cycle));
        }

        let rules = self.rules;
        let Some(rule) = rules.rule(target) else {
            if self.fs.exists(Path::new(target)) {
                trace!(rule = target, "source file without rule");
                self.ensured.insert(target.to_string());
                return Ok(());
            }
            return Err(MmakeError::NoRule(target.to_string()));
        };

        self.chain.push(target.to_string());
        for prereq in &rule.prerequisites {
            self.ensure(prereq)?;
        }
        self.chain.pop();

        match rebuild_reason(self.fs, rule, self.options.force_rebuild) {
            Some(reason) => {
                info!(rule = target, %reason, "rebuilding");
                self.commands_run += 1;
                match self.executor.run(&rule.command, self.options.echo_commands) {
                    BuildOutcome::Success => {}
                    BuildOutcome::Failed(failure) => {
                        return Err(MmakeError::CommandFailed {
                            target: target.to_string(),
                            failure,
                        });
                    }
                }
            }
            None => debug!(rule = target, "up to date"),
        }

        self.ensured.insert(target.to_string());
        Ok(())
    }
}
