// src/fs/mock.rs

use super::{FileSystem, ModTime};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(SystemTime),
    /// Exists, but every metadata query fails with this reason.
    Unreadable(String),
}

#[derive(Debug, Default)]
struct MockState {
    entries: HashMap<PathBuf, MockEntry>,
    /// Seconds since the epoch handed out by `touch`.
    clock: u64,
}

/// In-memory filesystem with a logical clock.
///
/// Clones share state, so a fake executor can `touch` outputs that the
/// planner then observes.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<MockState>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or overwrite) a file with an explicit timestamp in seconds.
    ///
    /// The logical clock is advanced past `secs` so later touches are newer.
    pub fn add_file(&self, path: impl AsRef<Path>, secs: u64) {
        let mut state = self.state.lock().unwrap();
        state.clock = state.clock.max(secs);
        state
            .entries
            .insert(path.as_ref().to_path_buf(), MockEntry::File(at(secs)));
    }

    /// Create or update `path` with a timestamp newer than anything so far.
    pub fn touch(&self, path: impl AsRef<Path>) {
        let mut state = self.state.lock().unwrap();
        state.clock += 1;
        let now = at(state.clock);
        state
            .entries
            .insert(path.as_ref().to_path_buf(), MockEntry::File(now));
    }

    pub fn add_unreadable(&self, path: impl AsRef<Path>, reason: &str) {
        let mut state = self.state.lock().unwrap();
        state.entries.insert(
            path.as_ref().to_path_buf(),
            MockEntry::Unreadable(reason.to_string()),
        );
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        let mut state = self.state.lock().unwrap();
        state.entries.remove(path.as_ref());
    }
}

fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.entries.contains_key(path)
    }

    fn mod_time(&self, path: &Path) -> ModTime {
        let state = self.state.lock().unwrap();
        match state.entries.get(path) {
            Some(MockEntry::File(time)) => ModTime::Present(*time),
            Some(MockEntry::Unreadable(reason)) => ModTime::Failed(reason.clone()),
            None => ModTime::Absent,
        }
    }
}
