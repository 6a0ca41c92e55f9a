// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::rules::DEFAULT_RULE_FILE;
use crate::types::BuildOptions;

/// Command-line arguments for `mmake`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mmake",
    version,
    about = "Rebuild out-of-date targets described in an mmakefile.",
    long_about = None
)]
pub struct CliArgs {
    /// Don't print commands before running them.
    #[arg(short = 's', long = "silent")]
    pub silent: bool,

    /// Rebuild every target regardless of timestamps.
    #[arg(short = 'B', long = "always-make")]
    pub always_make: bool,

    /// Rule file to read. A `.toml` extension selects the TOML manifest format.
    #[arg(short = 'f', long = "file", value_name = "FILENAME", default_value = DEFAULT_RULE_FILE)]
    pub file: PathBuf,

    /// Read the rule file, check targets and run commands relative to DIR.
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Print the commands that would run without running them.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `MMAKE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Targets to build. Defaults to the first rule in the rule file.
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,
}

impl CliArgs {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            force_rebuild: self.always_make,
            echo_commands: !self.silent,
        }
    }

    /// Rule file path with `--directory` applied.
    pub fn rule_file_path(&self) -> PathBuf {
        match &self.directory {
            Some(dir) if self.file.is_relative() => dir.join(&self.file),
            _ => self.file.clone(),
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
