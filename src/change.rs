//! Tag changes and filter checks on a single path
//!
//! This is where the pure pieces are sequenced into one side effect:
//! resolve the path, apply the caller's mutation, compose the new name and
//! hand it to the rename executor.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::codec::TaggedFileInfo;
use crate::filter::{self, TagFilter};
use crate::fs::FileSystem;
use crate::rename::{self, RenameOutcome};
use crate::resolve::resolve;

/// What happened to one path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    /// The file now carries `new_base_name`. `old_path == new_path` when the
    /// tags did not change.
    Renamed {
        old_path: PathBuf,
        new_path: PathBuf,
        new_base_name: String,
    },
    /// The rename call failed; the file keeps its old name
    Failed { path: PathBuf, reason: String },
    /// The path was not an eligible file and was left alone
    Skipped { path: PathBuf },
}

impl Outcome {
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Whether the file was renamed to the name it already had
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Renamed { old_path, new_path, .. } if old_path == new_path)
    }

    /// The path the outcome was reported for
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Renamed { old_path, .. } => old_path,
            Self::Failed { path, .. } | Self::Skipped { path } => path,
        }
    }
}

/// A computed but not yet applied name change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedChange {
    pub original: TaggedFileInfo,
    pub updated: TaggedFileInfo,
}

impl PlannedChange {
    #[must_use]
    pub fn new_base_name(&self) -> &str {
        &self.updated.file.base_name
    }

    #[must_use]
    pub fn old_path(&self) -> PathBuf {
        self.original.file.path()
    }

    #[must_use]
    pub fn new_path(&self) -> PathBuf {
        self.original.file.sibling(self.new_base_name())
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.original.file.base_name == self.new_base_name()
    }
}

/// Resolve `path` and compute the name `mutate` would give it, without
/// touching the file. `None` when the path is not an eligible file.
pub fn plan<F, M>(fs: &F, mutate: M, path: &Path) -> Option<PlannedChange>
where
    F: FileSystem + ?Sized,
    M: FnOnce(TaggedFileInfo) -> TaggedFileInfo,
{
    let original = resolve(fs, path)?;
    let tags = mutate(original.clone()).tags;
    // `with_tags` recomposes the base name from the original normalized name
    let updated = original.clone().with_tags(tags);
    Some(PlannedChange { original, updated })
}

/// Apply `mutate` to the tags encoded in `path`'s name and rename the file.
///
/// Reports [`Outcome::Skipped`] when the path is not an eligible file, in
/// which case nothing on disk is touched.
pub fn change_tags<F, M>(fs: &F, mutate: M, path: &Path) -> Outcome
where
    F: FileSystem + ?Sized,
    M: FnOnce(TaggedFileInfo) -> TaggedFileInfo,
{
    let Some(change) = plan(fs, mutate, path) else {
        return Outcome::Skipped {
            path: path.to_path_buf(),
        };
    };

    let file = &change.original.file;
    match rename::execute(
        fs,
        &file.directory,
        &file.extension,
        &file.base_name,
        change.new_base_name(),
    ) {
        RenameOutcome::Renamed { new_base_name } => {
            if !change.is_noop() {
                info!(
                    from = %file.file_name(),
                    to = %format!("{new_base_name}{}", file.extension),
                    "tags updated"
                );
            }
            Outcome::Renamed {
                old_path: change.old_path(),
                new_path: change.new_path(),
                new_base_name,
            }
        }
        RenameOutcome::Failed { reason } => Outcome::Failed {
            path: path.to_path_buf(),
            reason,
        },
    }
}

/// Whether `path` is an eligible file carrying every tag in `filter_tags`
pub fn file_satisfies_filter<F: FileSystem + ?Sized>(
    fs: &F,
    filter_tags: &[String],
    path: &Path,
) -> bool {
    resolve(fs, path).is_some_and(|record| filter::matches(filter_tags, &record.tags))
}

/// Whether `path` is an eligible file accepted by `filter`
pub fn file_matches<F: FileSystem + ?Sized>(fs: &F, filter: &TagFilter, path: &Path) -> bool {
    resolve(fs, path).is_some_and(|record| filter.matches(&record.tags))
}
