// src/fs/mod.rs

//! Freshness oracle: existence and modification-time lookups.
//!
//! The engine never touches `std::fs` directly; it asks a [`FileSystem`] so
//! tests can swap in [`mock::MockFileSystem`] and control every timestamp.

use std::fmt::{self, Debug};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub mod mock;

/// Result of a modification-time query.
///
/// `Absent` means the path does not exist. `Failed` means the lookup itself
/// errored and says nothing about freshness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModTime {
    Present(SystemTime),
    Absent,
    Failed(String),
}

impl fmt::Display for ModTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModTime::Present(time) => write!(f, "{time:?}"),
            ModTime::Absent => f.write_str("absent"),
            ModTime::Failed(reason) => write!(f, "query failed: {reason}"),
        }
    }
}

/// Abstract filesystem interface used by the rebuild planner.
pub trait FileSystem: Send + Sync + Debug {
    /// Whether `path` names an existing file or directory.
    fn exists(&self, path: &Path) -> bool;

    /// Last modification time of `path`.
    fn mod_time(&self, path: &Path) -> ModTime;
}

/// Implementation backed by `std::fs`.
///
/// Relative paths are resolved against `root` when one is set, so the
/// planner observes the same tree the executor's commands run in.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem {
    root: Option<PathBuf>,
}

impl RealFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        fs::metadata(self.resolve(path)).is_ok()
    }

    fn mod_time(&self, path: &Path) -> ModTime {
        let metadata = match fs::metadata(self.resolve(path)) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return ModTime::Absent,
            Err(e) => return ModTime::Failed(e.to_string()),
        };

        match metadata.modified() {
            Ok(time) => ModTime::Present(time),
            Err(e) => ModTime::Failed(e.to_string()),
        }
    }
}
