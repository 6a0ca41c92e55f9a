// src/rules/parser.rs

//! Parser for the `mmakefile` text format.
//!
//! ```text
//! # comment
//! app: main.o util.o
//! 	cc -o app main.o util.o
//!
//! main.o: main.c
//! 	cc -c main.c
//! ```
//!
//! Every target line is followed by exactly one command line, which starts
//! with a TAB. Tokens are separated by whitespace; there is no quoting,
//! variable expansion or pattern matching.
//!
//! The line right after a target line is always its command line. Blank
//! lines and comments are not skipped there, so `\t# note` becomes the
//! command `# note` and a blank line is a parse error.

use crate::errors::{MmakeError, Result};
use crate::rules::model::{RawRuleFile, Rule};

/// Parse `source` into rules in declaration order.
///
/// Only syntax is checked here; see `rules::validate` for semantic checks.
pub fn parse_mmakefile(source: &str) -> Result<RawRuleFile> {
    let mut rules = Vec::new();
    let mut lines = source.lines().enumerate().map(|(i, line)| (i + 1, line));

    while let Some((lineno, line)) = lines.next() {
        if is_ignorable(line) {
            continue;
        }
        if line.starts_with('\t') {
            return Err(parse_error(lineno, "command line without a preceding target line"));
        }

        let (target, prerequisites) = parse_target_line(lineno, line)?;

        let Some((cmd_lineno, cmd_line)) = lines.next() else {
            return Err(parse_error(
                lineno,
                format!("rule '{target}' has no command line"),
            ));
        };
        let command = parse_command_line(cmd_lineno, cmd_line, &target)?;

        rules.push(Rule {
            target,
            prerequisites,
            command,
        });
    }

    Ok(RawRuleFile { rule: rules })
}

fn is_ignorable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

fn parse_target_line(lineno: usize, line: &str) -> Result<(String, Vec<String>)> {
    let Some((target, prereqs)) = line.split_once(':') else {
        return Err(parse_error(lineno, "expected ':' after target name"));
    };

    let target = target.trim();
    if target.is_empty() {
        return Err(parse_error(lineno, "missing target name before ':'"));
    }
    if target.contains(char::is_whitespace) {
        return Err(parse_error(
            lineno,
            format!("target name '{target}' must not contain whitespace"),
        ));
    }

    let prereqs = prereqs.split_whitespace().map(str::to_string).collect();
    Ok((target.to_string(), prereqs))
}

fn parse_command_line(lineno: usize, line: &str, target: &str) -> Result<Vec<String>> {
    let Some(body) = line.strip_prefix('\t') else {
        return Err(parse_error(
            lineno,
            format!("expected a tab-indented command line for '{target}'"),
        ));
    };

    let tokens: Vec<String> = body.split_whitespace().map(str::to_string).collect();
    if tokens.is_empty() {
        return Err(parse_error(lineno, format!("empty command for '{target}'")));
    }
    Ok(tokens)
}

fn parse_error(line: usize, message: impl Into<String>) -> MmakeError {
    MmakeError::Parse {
        line,
        message: message.into(),
    }
}
