//! Filesystem capability used by the core
//!
//! The resolver and the rename executor only ever talk to the filesystem
//! through [`FileSystem`], so tests can swap in an implementation that fails
//! or records calls.

use std::io;
use std::path::Path;

/// What a path points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
    Other,
}

impl FileKind {
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::File)
    }
}

impl From<std::fs::FileType> for FileKind {
    fn from(file_type: std::fs::FileType) -> Self {
        if file_type.is_file() {
            Self::File
        } else if file_type.is_dir() {
            Self::Directory
        } else {
            Self::Other
        }
    }
}

/// Metadata query and rename, the two filesystem calls the core makes
pub trait FileSystem {
    /// Query what `path` points at, following symlinks.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the path is missing or unreadable.
    fn stat(&self, path: &Path) -> io::Result<FileKind>;

    /// Rename `from` to `to` in a single call.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the rename fails.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileKind> {
        std::fs::metadata(path).map(|m| m.file_type().into())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}
