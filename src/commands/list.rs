//! List and tags commands - show the tags encoded in file names

use super::Context;
use crate::batch;
use crate::{NametagError, output};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, NametagError>;

/// Execute the list command
///
/// # Errors
/// Returns `NametagError::Json` if JSON output cannot be produced.
pub fn execute(ctx: &Context<'_>, roots: &[PathBuf], tagged_only: bool) -> Result<()> {
    let files = ctx.candidates(roots);
    let records: Vec<_> = batch::collect_records(ctx.fs, &files)
        .into_iter()
        .filter(|r| !tagged_only || r.is_tagged())
        .collect();

    if records.is_empty() {
        if !ctx.quiet && !ctx.json {
            println!("No files found.");
        }
        return Ok(());
    }

    for record in &records {
        if ctx.json {
            println!("{}", output::json_line(record)?);
        } else {
            println!(
                "{}",
                output::file_with_tags(&record.file.path(), &record.tags, ctx.quiet)
            );
        }
    }
    Ok(())
}

/// Execute the tags command - every tag in use with its file count
///
/// # Errors
/// Returns `NametagError::Json` if JSON output cannot be produced.
pub fn tags(ctx: &Context<'_>, roots: &[PathBuf]) -> Result<()> {
    let files = ctx.candidates(roots);
    let records = batch::collect_records(ctx.fs, &files);
    let counts = batch::tag_counts(&records);

    if counts.is_empty() {
        if !ctx.quiet && !ctx.json {
            println!("No tags found.");
        }
        return Ok(());
    }

    if !ctx.quiet && !ctx.json {
        println!("Tags in use:");
    }
    for (tag, count) in counts {
        if ctx.json {
            println!("{}", output::json_line(&serde_json::json!({ "tag": tag, "count": count }))?);
        } else {
            println!("{}", output::tag_with_count(&tag, count, ctx.quiet));
        }
    }
    Ok(())
}
