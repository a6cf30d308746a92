//! Nametag - tag files by encoding tags in their names
//!
//! Tags are stored as a bracketed suffix on a file's base name, before the
//! extension: `report.[draft urgent].pdf`. This library parses those tags,
//! merges or removes tags, and renames the file so its name always reflects
//! its tags. Nothing is stored outside the file name itself.
//!
//! The core (`codec`, `tags`, `resolve`, `rename`, `filter`, `change`) never
//! returns errors: ineligible paths resolve to `None` and rename failures are
//! reported as values. [`NametagError`] is only used by the outer layers.

use thiserror::Error;

pub mod batch;
pub mod change;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod filter;
pub mod fs;
pub mod junk;
pub mod output;
pub mod rename;
pub mod resolve;
pub mod tags;

#[cfg(test)]
pub mod testing;

pub use change::{Outcome, change_tags, file_satisfies_filter};
pub use codec::{FileInfo, TaggedFileInfo};
pub use fs::{FileSystem, StdFileSystem};
pub use tags::TagMutation;

/// Error enum, contains all failure states of the program outside the core
#[derive(Debug, Error)]
pub enum NametagError {
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Ignore pattern failed to parse
    #[error("Invalid ignore pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),
    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// One or more files in a batch could not be renamed
    #[error("{0} file(s) could not be renamed")]
    RenameFailed(usize),
}
