//! Set operations on tag lists
//!
//! Tag lists keep the order in which a tag was first seen and never contain
//! duplicates once they have gone through one of these functions.

use std::collections::HashSet;

use crate::codec::TaggedFileInfo;

/// Union of `existing` and `additions`.
///
/// Existing tags come first in their order, followed by additions that were
/// not already present, in the order given.
#[must_use]
pub fn add_tags(existing: &[String], additions: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(existing.len() + additions.len());
    let mut merged = Vec::with_capacity(existing.len() + additions.len());
    for tag in existing.iter().chain(additions) {
        if seen.insert(tag.as_str()) {
            merged.push(tag.clone());
        }
    }
    merged
}

/// `existing` without any tag listed in `removals`, order preserved.
///
/// Removing a tag that is not present is a no-op.
#[must_use]
pub fn remove_tags(existing: &[String], removals: &[String]) -> Vec<String> {
    let removals: HashSet<&str> = removals.iter().map(String::as_str).collect();
    let mut seen = HashSet::with_capacity(existing.len());
    let mut remaining = Vec::with_capacity(existing.len());
    for tag in existing {
        if !removals.contains(tag.as_str()) && seen.insert(tag.as_str()) {
            remaining.push(tag.clone());
        }
    }
    remaining
}

/// A change to apply to a file's tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagMutation {
    /// Merge the given tags into the existing ones
    Add(Vec<String>),
    /// Drop the given tags
    Remove(Vec<String>),
    /// Drop every tag
    Clear,
}

impl TagMutation {
    /// Apply the mutation, producing a new record
    #[must_use]
    pub fn apply(&self, record: TaggedFileInfo) -> TaggedFileInfo {
        let tags = match self {
            Self::Add(additions) => add_tags(&record.tags, additions),
            Self::Remove(removals) => remove_tags(&record.tags, removals),
            Self::Clear => Vec::new(),
        };
        record.with_tags(tags)
    }

    /// Tags named by the mutation (empty for `Clear`)
    #[must_use]
    pub fn tags(&self) -> &[String] {
        match self {
            Self::Add(tags) | Self::Remove(tags) => tags,
            Self::Clear => &[],
        }
    }

    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Remove(_) => "remove",
            Self::Clear => "clear",
        }
    }
}
