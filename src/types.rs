// src/types.rs

/// Switches that change how the planner decides and reports rebuilds.
///
/// Resolved from the command line (`-B`, `-s`) by [`crate::cli::CliArgs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Rebuild every rule-backed target reached, regardless of timestamps.
    pub force_rebuild: bool,
    /// Print each command before running it.
    pub echo_commands: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            force_rebuild: false,
            echo_commands: true,
        }
    }
}
