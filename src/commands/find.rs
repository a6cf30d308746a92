//! Find command - print files whose tags satisfy a filter

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::Context;
use crate::batch;
use crate::codec;
use crate::filter::TagFilter;
use crate::{NametagError, output};

type Result<T> = std::result::Result<T, NametagError>;

#[derive(Serialize)]
struct FoundEntry<'a> {
    path: &'a Path,
    tags: Vec<String>,
}

/// Execute the find command
///
/// # Errors
/// Returns `NametagError::Json` if JSON output cannot be produced.
pub fn execute(ctx: &Context<'_>, filter: &TagFilter, roots: &[PathBuf]) -> Result<()> {
    let files = ctx.candidates(roots);
    let found = batch::filter_paths(ctx.fs, filter, &files);

    if found.is_empty() {
        if !ctx.quiet && !ctx.json {
            println!("No files found matching tags: {}", filter.tags.join(", "));
        }
        return Ok(());
    }

    if !ctx.quiet && !ctx.json {
        println!("Found {} file(s):", found.len());
    }
    for path in &found {
        // Already resolved as a regular file; decoding the name needs no I/O
        let tags = codec::parse(path).tags;
        if ctx.json {
            println!("{}", output::json_line(&FoundEntry { path, tags })?);
        } else {
            println!("{}", output::file_with_tags(path, &tags, ctx.quiet));
        }
    }
    Ok(())
}
