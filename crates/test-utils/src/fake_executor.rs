use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use mmake::exec::{BuildOutcome, ExecutorBackend, Failure};
use mmake::fs::mock::MockFileSystem;

/// A fake executor over a [`MockFileSystem`] that:
/// - records every command it is asked to run (and whether it was echoed)
/// - interprets `touch <path>...` by touching the paths in the mock fs
/// - reports `Failed(Exit(1))` for the program `false` and for any command
///   mentioning a token registered with [`ScriptedExecutor::fail_on`]
/// - reports success for everything else without side effects
#[derive(Clone)]
pub struct ScriptedExecutor {
    fs: MockFileSystem,
    executed: Arc<Mutex<Vec<Vec<String>>>>,
    echoed: Arc<Mutex<Vec<bool>>>,
    failing: HashSet<String>,
}

impl ScriptedExecutor {
    pub fn new(fs: MockFileSystem) -> Self {
        Self {
            fs,
            executed: Arc::new(Mutex::new(Vec::new())),
            echoed: Arc::new(Mutex::new(Vec::new())),
            failing: HashSet::new(),
        }
    }

    pub fn fail_on(mut self, token: &str) -> Self {
        self.failing.insert(token.to_string());
        self
    }

    pub fn executed(&self) -> Vec<Vec<String>> {
        self.executed.lock().unwrap().clone()
    }

    /// Last token of each executed command, which for `touch` rules is the
    /// target that was rebuilt.
    pub fn rebuilt(&self) -> Vec<String> {
        self.executed()
            .iter()
            .filter_map(|cmd| cmd.last().cloned())
            .collect()
    }

    pub fn echo_flags(&self) -> Vec<bool> {
        self.echoed.lock().unwrap().clone()
    }
}

impl ExecutorBackend for ScriptedExecutor {
    fn run(&mut self, command: &[String], echo: bool) -> BuildOutcome {
        self.executed.lock().unwrap().push(command.to_vec());
        self.echoed.lock().unwrap().push(echo);

        if command.first().is_some_and(|p| p == "false")
            || command.iter().any(|t| self.failing.contains(t))
        {
            return BuildOutcome::Failed(Failure::Exit(1));
        }

        if command.first().is_some_and(|p| p == "touch") {
            for path in &command[1..] {
                self.fs.touch(path);
            }
        }

        BuildOutcome::Success
    }
}
