//! Running the core over many paths
//!
//! Every path is handled by its own independent call. A failure or skip on
//! one path never stops the others, and results are reported in input order.

use std::path::PathBuf;

use rayon::prelude::*;

use crate::change::{self, Outcome, PlannedChange};
use crate::codec::TaggedFileInfo;
use crate::filter::TagFilter;
use crate::fs::FileSystem;
use crate::resolve::resolve;
use crate::tags::TagMutation;

/// Summary of batch results
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub renamed: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Renamed { .. } if outcome.is_unchanged() => self.unchanged += 1,
            Outcome::Renamed { .. } => self.renamed += 1,
            Outcome::Failed { .. } => self.failed += 1,
            Outcome::Skipped { .. } => self.skipped += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.renamed + self.unchanged + self.skipped + self.failed
    }
}

/// Outcomes of a batch, in input order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<Outcome>,
    pub summary: BatchSummary,
}

impl BatchReport {
    fn from_outcomes(outcomes: Vec<Outcome>) -> Self {
        let mut summary = BatchSummary::new();
        for outcome in &outcomes {
            summary.record(outcome);
        }
        Self { outcomes, summary }
    }

    /// Messages of every failed outcome
    #[must_use]
    pub fn failures(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                Outcome::Failed { reason, .. } => Some(reason.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Apply `mutation` to every path.
///
/// With `parallel` the calls run on the rayon pool; the core shares no state
/// between calls so this only changes throughput, not results.
pub fn run_change<F>(fs: &F, mutation: &TagMutation, paths: &[PathBuf], parallel: bool) -> BatchReport
where
    F: FileSystem + Sync + ?Sized,
{
    let apply = |path: &PathBuf| change::change_tags(fs, |r| mutation.apply(r), path);
    let outcomes: Vec<Outcome> = if parallel {
        paths.par_iter().map(apply).collect()
    } else {
        paths.iter().map(apply).collect()
    };
    BatchReport::from_outcomes(outcomes)
}

/// Compute the change `mutation` would make to every path, without renaming.
///
/// Paths that are not eligible files map to `None`.
pub fn plan_change<F>(
    fs: &F,
    mutation: &TagMutation,
    paths: &[PathBuf],
) -> Vec<(PathBuf, Option<PlannedChange>)>
where
    F: FileSystem + ?Sized,
{
    paths
        .iter()
        .map(|path| {
            let planned = change::plan(fs, |r| mutation.apply(r), path);
            (path.clone(), planned)
        })
        .collect()
}

/// Paths whose tags satisfy `filter`, in input order
pub fn filter_paths<F>(fs: &F, filter: &TagFilter, paths: &[PathBuf]) -> Vec<PathBuf>
where
    F: FileSystem + ?Sized,
{
    paths
        .iter()
        .filter(|path| change::file_matches(fs, filter, path))
        .cloned()
        .collect()
}

/// Resolve every eligible path into its tagged record
pub fn collect_records<F>(fs: &F, paths: &[PathBuf]) -> Vec<TaggedFileInfo>
where
    F: FileSystem + ?Sized,
{
    paths.iter().filter_map(|path| resolve(fs, path)).collect()
}

/// Every tag in use across `records` with the number of files carrying it,
/// sorted by tag
#[must_use]
pub fn tag_counts(records: &[TaggedFileInfo]) -> Vec<(String, usize)> {
    let mut counts = std::collections::BTreeMap::<&str, usize>::new();
    for record in records {
        for tag in &record.tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect()
}
