//! Path to tagged record resolution
//!
//! Anything that is not a readable regular file resolves to `None`. Callers
//! treat that as "skip this file", never as a reason to stop a batch.

use std::path::Path;

use tracing::debug;

use crate::codec::{self, TaggedFileInfo};
use crate::fs::FileSystem;

/// Resolve `path` into a [`TaggedFileInfo`].
///
/// Issues exactly one metadata query. Returns `None` when the query fails,
/// when the path is not a regular file, or when its name is not valid UTF-8
/// (such a name could not be renamed without loss).
pub fn resolve<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Option<TaggedFileInfo> {
    let kind = match fs.stat(path) {
        Ok(kind) => kind,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "cannot stat, skipping");
            return None;
        }
    };

    if !kind.is_file() {
        debug!(path = %path.display(), ?kind, "not a regular file, skipping");
        return None;
    }

    if path.file_name().and_then(|n| n.to_str()).is_none() {
        debug!(path = %path.display(), "file name is not valid UTF-8, skipping");
        return None;
    }

    Some(codec::parse(path))
}
