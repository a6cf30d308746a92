//! Junk file classification
//!
//! Operating systems and tools scatter metadata files around (`.DS_Store`,
//! `Thumbs.db`, editor swap files). These must never be renamed, so they are
//! removed from the candidate list before the core sees it.

use std::path::Path;

use glob::Pattern;

use crate::NametagError;

/// Exact file names known to be OS or tool metadata
const JUNK_NAMES: &[&str] = &[
    ".DS_Store",
    ".AppleDouble",
    ".LSOverride",
    "Icon\r",
    ".Spotlight-V100",
    ".Trashes",
    ".fseventsd",
    ".DocumentRevisions-V100",
    ".TemporaryItems",
    ".VolumeIcon.icns",
    "Thumbs.db",
    "ehthumbs.db",
    "ehthumbs_vista.db",
    "Desktop.ini",
    "desktop.ini",
    "$RECYCLE.BIN",
    "npm-debug.log",
    ".directory",
];

/// Whether a file name is a well-known junk file
#[must_use]
pub fn is_junk_name(name: &str) -> bool {
    JUNK_NAMES.contains(&name)
        || name.starts_with("._")
        || name.ends_with(".swp")
        || (name.starts_with(".~lock.") && name.ends_with('#'))
        || name.starts_with(".nfs")
}

/// Whether `path` names a well-known junk file
#[must_use]
pub fn is_junk(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(is_junk_name)
}

/// Whether `path` is hidden (name starts with a dot)
#[must_use]
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|s| s.starts_with('.') && s != "." && s != "..")
}

/// Decides which discovered paths are handed to the core
#[derive(Debug, Clone, Default)]
pub struct JunkFilter {
    include_hidden: bool,
    ignore: Vec<Pattern>,
}

impl JunkFilter {
    /// Build a filter from user ignore globs.
    ///
    /// Globs are matched against the file name only.
    ///
    /// # Errors
    /// Returns `NametagError::InvalidPattern` if a glob does not parse.
    pub fn new(include_hidden: bool, ignore: &[String]) -> Result<Self, NametagError> {
        let ignore = ignore
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            include_hidden,
            ignore,
        })
    }

    /// Whether `path` should be processed
    #[must_use]
    pub fn accepts(&self, path: &Path) -> bool {
        if is_junk(path) {
            return false;
        }
        if !self.include_hidden && is_hidden(path) {
            return false;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return true;
        };
        !self.ignore.iter().any(|p| p.matches(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_junk_names() {
        for name in [".DS_Store", "Thumbs.db", "._photo.jpg", ".main.rs.swp", ".~lock.doc.odt#"] {
            assert!(is_junk(Path::new(name)), "{name} should be junk");
        }
        for name in ["photo.jpg", "DS_Store", "thumbs.db.bak", "notes.[swp]"] {
            assert!(!is_junk(Path::new(name)), "{name} should not be junk");
        }
    }

    #[test]
    fn test_junk_in_subdirectory() {
        assert!(is_junk(Path::new("a/b/.DS_Store")));
    }

    #[test]
    fn test_hidden() {
        assert!(is_hidden(Path::new("dir/.env")));
        assert!(!is_hidden(Path::new(".")));
        assert!(!is_hidden(Path::new("./visible.txt")));
    }

    #[test]
    fn test_filter_hidden_toggle() {
        let strict = JunkFilter::new(false, &[]).unwrap();
        let lax = JunkFilter::new(true, &[]).unwrap();
        assert!(!strict.accepts(Path::new(".env")));
        assert!(lax.accepts(Path::new(".env")));
        assert!(!lax.accepts(Path::new(".DS_Store")));
    }

    #[test]
    fn test_filter_ignore_globs() {
        let filter = JunkFilter::new(false, &["*.tmp".to_string(), "~*".to_string()]).unwrap();
        assert!(!filter.accepts(Path::new("dir/build.tmp")));
        assert!(!filter.accepts(Path::new("~draft.docx")));
        assert!(filter.accepts(Path::new("report.pdf")));
    }

    #[test]
    fn test_filter_invalid_glob() {
        assert!(JunkFilter::new(false, &["[".to_string()]).is_err());
    }
}
