//! Add, remove and clear commands

use colored::Colorize;
use dialoguer::Confirm;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::Context;
use crate::batch::{self, BatchReport};
use crate::change::{Outcome, PlannedChange};
use crate::cli::validate_tags;
use crate::tags::TagMutation;
use crate::{NametagError, output};

type Result<T> = std::result::Result<T, NametagError>;

/// Execute a tag mutation on every file found under `roots`
///
/// # Errors
/// Returns `NametagError::InvalidInput` for invalid tags or a declined
/// confirmation, and `NametagError::RenameFailed` if any rename failed. Files
/// are still processed past individual failures.
pub fn execute(ctx: &Context<'_>, mutation: &TagMutation, roots: &[PathBuf], yes: bool) -> Result<()> {
    if !matches!(mutation, TagMutation::Clear) {
        validate_tags(mutation.tags())?;
    }

    let files = ctx.candidates(roots);
    if files.is_empty() {
        if !ctx.quiet && !ctx.json {
            println!("No files found.");
        }
        return Ok(());
    }

    if ctx.dry_run {
        return print_dry_run(ctx, mutation, &files);
    }

    if matches!(mutation, TagMutation::Clear)
        && files.len() > 1
        && !yes
        && !ctx.quiet
        && !confirm_clear(files.len())?
    {
        return Err(NametagError::InvalidInput("Operation cancelled".into()));
    }

    let report = batch::run_change(ctx.fs, mutation, &files, ctx.parallel);
    print_report(ctx, mutation, &report)?;

    match report.summary.failed {
        0 => Ok(()),
        n => Err(NametagError::RenameFailed(n)),
    }
}

fn confirm_clear(count: usize) -> Result<bool> {
    Confirm::new()
        .with_prompt(format!("REMOVE ALL TAGS from {count} file(s)?"))
        .default(false)
        .interact()
        .map_err(|e| NametagError::InvalidInput(format!("Failed to get confirmation: {e}")))
}

fn print_report(ctx: &Context<'_>, mutation: &TagMutation, report: &BatchReport) -> Result<()> {
    for outcome in &report.outcomes {
        if ctx.json {
            println!("{}", output::json_line(outcome)?);
            continue;
        }
        if let Some(line) = output::outcome_line(outcome, ctx.quiet) {
            println!("{line}");
        }
        if ctx.quiet
            && let Outcome::Failed { reason, .. } = outcome
        {
            eprintln!("{}", reason.red());
        }
    }

    if !ctx.quiet && !ctx.json && report.outcomes.len() > 1 {
        output::print_summary(&report.summary, &title(mutation.verb()));
    }
    Ok(())
}

fn title(verb: &str) -> String {
    let mut chars = verb.chars();
    chars
        .next()
        .map(|c| c.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

#[derive(Serialize)]
struct PlannedEntry<'a> {
    path: &'a Path,
    new_path: Option<PathBuf>,
}

fn print_dry_run(ctx: &Context<'_>, mutation: &TagMutation, files: &[PathBuf]) -> Result<()> {
    let planned = batch::plan_change(ctx.fs, mutation, files);

    if !ctx.quiet && !ctx.json {
        println!("{}", "=== Dry Run Mode ===".yellow().bold());
    }
    for (path, change) in &planned {
        if ctx.json {
            let entry = PlannedEntry {
                path,
                new_path: change.as_ref().map(PlannedChange::new_path),
            };
            println!("{}", output::json_line(&entry)?);
        } else if ctx.quiet {
            if let Some(change) = change {
                println!("{}", change.new_path().display());
            }
        } else {
            println!("{}", output::planned_line(path, change.as_ref()));
        }
    }
    if !ctx.quiet && !ctx.json {
        println!("\n{}", "Run without --dry-run to apply changes.".yellow());
    }
    Ok(())
}
