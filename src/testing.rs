//! Testing utilities for nametag
//!
//! Provides [`MemoryFs`], an in-memory [`FileSystem`] that records every
//! call and can be told to fail. Only available when compiled with
//! `cfg(test)`.

use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::fs::{FileKind, FileSystem};

/// In-memory filesystem keyed by normalized path
///
/// `./a.txt` and `a.txt` refer to the same entry.
#[derive(Debug, Default)]
pub struct MemoryFs {
    entries: Mutex<HashMap<PathBuf, FileKind>>,
    renames: Mutex<Vec<(PathBuf, PathBuf)>>,
    stats: AtomicUsize,
    fail_stat: bool,
    fail_rename: bool,
}

impl MemoryFs {
    /// Create a filesystem containing the given regular files
    #[must_use]
    pub fn with_files(files: &[&str]) -> Self {
        let fs = Self::default();
        for file in files {
            fs.insert(file, FileKind::File);
        }
        fs
    }

    /// Make every `stat` call fail with `PermissionDenied`
    #[must_use]
    pub const fn failing_stat(mut self) -> Self {
        self.fail_stat = true;
        self
    }

    /// Make every `rename` call fail with `PermissionDenied`
    #[must_use]
    pub const fn failing_rename(mut self) -> Self {
        self.fail_rename = true;
        self
    }

    /// Add an entry
    ///
    /// # Panics
    /// Panics if the entry lock is poisoned.
    pub fn insert(&self, path: impl AsRef<Path>, kind: FileKind) {
        self.entries
            .lock()
            .unwrap()
            .insert(normalize(path.as_ref()), kind);
    }

    /// Whether a path exists
    ///
    /// # Panics
    /// Panics if the entry lock is poisoned.
    #[must_use]
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.entries
            .lock()
            .unwrap()
            .contains_key(&normalize(path.as_ref()))
    }

    /// Every rename attempted so far, successful or not
    ///
    /// # Panics
    /// Panics if the rename log lock is poisoned.
    #[must_use]
    pub fn renames(&self) -> Vec<(PathBuf, PathBuf)> {
        self.renames.lock().unwrap().clone()
    }

    /// Number of `stat` calls made so far
    #[must_use]
    pub fn stat_count(&self) -> usize {
        self.stats.load(Ordering::SeqCst)
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

impl FileSystem for MemoryFs {
    fn stat(&self, path: &Path) -> io::Result<FileKind> {
        self.stats.fetch_add(1, Ordering::SeqCst);
        if self.fail_stat {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "stat refused"));
        }
        self.entries
            .lock()
            .unwrap()
            .get(&normalize(path))
            .copied()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.renames
            .lock()
            .unwrap()
            .push((from.to_path_buf(), to.to_path_buf()));
        if self.fail_rename {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "rename refused"));
        }
        let mut entries = self.entries.lock().unwrap();
        let kind = entries
            .remove(&normalize(from))
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))?;
        entries.insert(normalize(to), kind);
        Ok(())
    }
}
