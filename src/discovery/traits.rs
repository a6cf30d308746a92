use std::path::PathBuf;

/// Kind of discovery implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryKind {
    /// Direct children of directory arguments only
    Shallow,
    /// Whole directory trees
    Recursive,
}

/// Expands user-supplied path arguments into candidate files for the core
pub trait FileDiscovery {
    /// Expand `roots` into candidate file paths.
    ///
    /// Directories are walked, junk is dropped, and anything else is passed
    /// through untouched so the core can report it as skipped.
    #[must_use]
    fn discover(&self, roots: &[PathBuf]) -> Vec<PathBuf>;

    /// Get the kind of discovery implementation
    #[must_use]
    fn kind(&self) -> DiscoveryKind;
}
