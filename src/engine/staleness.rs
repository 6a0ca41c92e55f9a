// src/engine/staleness.rs

use std::fmt;
use std::path::Path;

use tracing::warn;

use crate::fs::{FileSystem, ModTime};
use crate::rules::Rule;

/// Why a rule-backed target has to be rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebuildReason {
    Forced,
    TargetMissing,
    PrerequisiteMissing(String),
    PrerequisiteNewer(String),
    /// A metadata query failed; staleness cannot be ruled out.
    MetadataUnavailable { path: String, reason: String },
}

impl fmt::Display for RebuildReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RebuildReason::Forced => f.write_str("rebuild forced"),
            RebuildReason::TargetMissing => f.write_str("target does not exist"),
            RebuildReason::PrerequisiteMissing(p) => write!(f, "prerequisite '{p}' does not exist"),
            RebuildReason::PrerequisiteNewer(p) => write!(f, "prerequisite '{p}' is newer"),
            RebuildReason::MetadataUnavailable { path, reason } => {
                write!(f, "cannot read modification time of '{path}': {reason}")
            }
        }
    }
}

/// Decide whether `rule.target` is stale.
///
/// Returns the first reason found, checking in this order: force flag,
/// target existence, then each prerequisite in declaration order (missing,
/// unreadable, strictly newer). Equal timestamps are not stale.
pub fn rebuild_reason(fs: &dyn FileSystem, rule: &Rule, force: bool) -> Option<RebuildReason> {
    if force {
        return Some(RebuildReason::Forced);
    }

    let target_time = match fs.mod_time(Path::new(&rule.target)) {
        ModTime::Present(time) => time,
        ModTime::Absent => return Some(RebuildReason::TargetMissing),
        ModTime::Failed(reason) => return Some(unavailable(&rule.target, reason)),
    };

    for prereq in &rule.prerequisites {
        match fs.mod_time(Path::new(prereq)) {
            ModTime::Present(time) if time > target_time => {
                return Some(RebuildReason::PrerequisiteNewer(prereq.clone()));
            }
            ModTime::Present(_) => {}
            ModTime::Absent => return Some(RebuildReason::PrerequisiteMissing(prereq.clone())),
            ModTime::Failed(reason) => return Some(unavailable(prereq, reason)),
        }
    }

    None
}

fn unavailable(path: &str, reason: String) -> RebuildReason {
    warn!(path, %reason, "modification time query failed; assuming stale");
    RebuildReason::MetadataUnavailable {
        path: path.to_string(),
        reason,
    }
}
