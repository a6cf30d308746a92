//! Candidate file discovery
//!
//! Turns the paths given on the command line into the flat list of files the
//! core operates on.

mod traits;

pub use traits::{DiscoveryKind, FileDiscovery};

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::junk::JunkFilter;

/// [`FileDiscovery`] over the real filesystem using `walkdir`
#[derive(Debug, Clone)]
pub struct WalkDiscovery {
    filter: JunkFilter,
    recursive: bool,
}

impl WalkDiscovery {
    #[must_use]
    pub const fn new(filter: JunkFilter, recursive: bool) -> Self {
        Self { filter, recursive }
    }

    fn walk(&self, root: &Path, out: &mut Vec<PathBuf>) {
        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.filter.accepts(e.path()));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!(root = %root.display(), error = %e, "cannot read directory entry");
                    continue;
                }
            };
            let file_type = entry.file_type();
            if file_type.is_file() || file_type.is_symlink() {
                out.push(entry.into_path());
            }
        }
    }
}

impl FileDiscovery for WalkDiscovery {
    fn discover(&self, roots: &[PathBuf]) -> Vec<PathBuf> {
        let mut out = Vec::new();
        for root in roots {
            if root.is_dir() {
                self.walk(root, &mut out);
            } else if self.filter.accepts(root) {
                out.push(root.clone());
            } else {
                debug!(path = %root.display(), "ignoring junk file");
            }
        }
        out
    }

    fn kind(&self) -> DiscoveryKind {
        if self.recursive {
            DiscoveryKind::Recursive
        } else {
            DiscoveryKind::Shallow
        }
    }
}
