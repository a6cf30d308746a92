//! Tag filters
//!
//! [`matches`] is the plain subset test. [`TagFilter`] layers an any/all mode
//! and exclusions on top of it for the `find` command.

/// Whether every filter tag is present in `file_tags`.
///
/// Order-independent; an empty filter always matches.
#[must_use]
pub fn matches(filter_tags: &[String], file_tags: &[String]) -> bool {
    filter_tags.iter().all(|tag| file_tags.contains(tag))
}

/// How multiple filter tags combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Match ANY of the tags (OR logic)
    Any,
    /// Match ALL of the tags (AND logic)
    #[default]
    All,
}

/// A filter over a file's tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    pub tags: Vec<String>,
    pub mode: SearchMode,
    pub excludes: Vec<String>,
}

impl TagFilter {
    /// Filter requiring every one of `tags`
    #[must_use]
    pub const fn all(tags: Vec<String>) -> Self {
        Self {
            tags,
            mode: SearchMode::All,
            excludes: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = excludes;
        self
    }

    /// Evaluate the filter against a file's tags
    #[must_use]
    pub fn matches(&self, file_tags: &[String]) -> bool {
        if self.excludes.iter().any(|tag| file_tags.contains(tag)) {
            return false;
        }
        match self.mode {
            SearchMode::All => matches(&self.tags, file_tags),
            SearchMode::Any => {
                self.tags.is_empty() || self.tags.iter().any(|tag| file_tags.contains(tag))
            }
        }
    }
}
