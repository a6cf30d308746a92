//! Output formatting for CLI display
//!
//! The core only returns values; everything printed to the terminal is
//! formatted here.

use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use crate::NametagError;
use crate::batch::BatchSummary;
use crate::change::{Outcome, PlannedChange};

/// Format a file with its tags for display
#[must_use]
pub fn file_with_tags(path: &Path, tags: &[String], quiet: bool) -> String {
    let path_str = path.display().to_string();

    if quiet {
        path_str
    } else if tags.is_empty() {
        format!("  {path_str} (no tags)")
    } else {
        format!("  {} [{}]", path_str, tags.join(", ").cyan())
    }
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} (used by {count} file(s))")
    }
}

/// Format one outcome.
///
/// In quiet mode only the resulting path of a rename is printed, and nothing
/// at all for skipped paths; failures are left to stderr.
#[must_use]
pub fn outcome_line(outcome: &Outcome, quiet: bool) -> Option<String> {
    match outcome {
        Outcome::Renamed { new_path, .. } if quiet => Some(new_path.display().to_string()),
        Outcome::Renamed { old_path, .. } if outcome.is_unchanged() => Some(format!(
            "  {} {}",
            "=".dimmed(),
            old_path.display().to_string().dimmed()
        )),
        Outcome::Renamed {
            old_path, new_path, ..
        } => Some(format!(
            "  {} {} -> {}",
            "✓".green(),
            old_path.display(),
            new_path.display().to_string().green()
        )),
        Outcome::Failed { .. } | Outcome::Skipped { .. } if quiet => None,
        Outcome::Failed { reason, .. } => Some(format!("  {} {}", "✗".red(), reason.red())),
        Outcome::Skipped { path } => Some(format!(
            "  {} {} (not a regular file)",
            "⊘".yellow(),
            path.display()
        )),
    }
}

/// Format the would-be result of a change for `--dry-run`
#[must_use]
pub fn planned_line(path: &Path, planned: Option<&PlannedChange>) -> String {
    match planned {
        Some(change) if change.is_noop() => format!(
            "  {} {}",
            "=".dimmed(),
            change.old_path().display().to_string().dimmed()
        ),
        Some(change) => format!(
            "  {} -> {}",
            change.old_path().display(),
            change.new_path().display().to_string().cyan()
        ),
        None => format!("  {} {} (not a regular file)", "⊘".yellow(), path.display()),
    }
}

/// Print a summary block for a batch
pub fn print_summary(summary: &BatchSummary, operation: &str) {
    println!("\n{}", format!("=== {operation} Summary ===").bold());
    println!("  {} {}", "✓ Renamed:".green(), summary.renamed);
    if summary.unchanged > 0 {
        println!("  {} {}", "= Unchanged:".dimmed(), summary.unchanged);
    }
    if summary.skipped > 0 {
        println!("  {} {}", "⊘ Skipped:".yellow(), summary.skipped);
    }
    if summary.failed > 0 {
        println!("  {} {}", "✗ Failed:".red(), summary.failed);
    }
}

/// Serialize a value as a single JSON line
///
/// # Errors
/// Returns `NametagError::Json` if serialization fails.
pub fn json_line<T: Serialize>(value: &T) -> Result<String, NametagError> {
    Ok(serde_json::to_string(value)?)
}
