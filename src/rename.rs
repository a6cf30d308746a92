//! Single-file rename with an explicit outcome

use std::path::Path;

use tracing::{debug, warn};

use crate::fs::FileSystem;

/// Result of a rename attempt. Terminal; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed { new_base_name: String },
    Failed { reason: String },
}

impl RenameOutcome {
    #[must_use]
    pub const fn is_renamed(&self) -> bool {
        matches!(self, Self::Renamed { .. })
    }
}

/// Rename `dir/old_base_name+extension` to `dir/new_base_name+extension`.
///
/// When both names are equal no filesystem call is made and the outcome is
/// `Renamed` with the unchanged name. Otherwise exactly one rename call is
/// issued; any error becomes [`RenameOutcome::Failed`]. The old name is never
/// removed before the new one exists, so a failure leaves the file intact.
pub fn execute<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &Path,
    extension: &str,
    old_base_name: &str,
    new_base_name: &str,
) -> RenameOutcome {
    if old_base_name == new_base_name {
        debug!(dir = %dir.display(), name = old_base_name, "name unchanged, nothing to rename");
        return RenameOutcome::Renamed {
            new_base_name: new_base_name.to_string(),
        };
    }

    let from = dir.join(format!("{old_base_name}{extension}"));
    let to = dir.join(format!("{new_base_name}{extension}"));

    match fs.rename(&from, &to) {
        Ok(()) => {
            debug!(from = %from.display(), to = %to.display(), "renamed");
            RenameOutcome::Renamed {
                new_base_name: new_base_name.to_string(),
            }
        }
        Err(e) => {
            warn!(from = %from.display(), to = %to.display(), error = %e, "rename failed");
            RenameOutcome::Failed {
                reason: format!(
                    "cannot rename '{}' to '{}': {e}",
                    from.display(),
                    to.display()
                ),
            }
        }
    }
}
