//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for nametag using the `clap` crate.
//!
//! # Commands
//!
//! - **add**: Add tags to files (renames them)
//! - **remove**: Remove tags from files
//! - **clear**: Remove every tag from files
//! - **find**: Print files whose tags match a filter
//! - **list**: Print files with their tags
//! - **tags**: Print every tag in use with a file count
//! - **config**: Get or set configuration values
//!
//! Tags may be given repeatedly (`-t a -t b`) or comma-separated (`-t a,b`).
//! Path arguments default to the current directory.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::NametagError;
use crate::filter::{SearchMode, TagFilter};

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "nametag")]
#[command(about = "Tag files by encoding tags in their names", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Print results as JSON lines
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Show what would be renamed without touching any file
    #[arg(short = 'n', long = "dry-run", global = true)]
    pub dry_run: bool,

    /// Descend into subdirectories of directory arguments
    #[arg(short = 'r', long = "recursive", global = true)]
    pub recursive: bool,

    /// Include hidden files when walking directories
    #[arg(long = "hidden", global = true)]
    pub hidden: bool,
}

/// Paths to operate on
#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Files or directories (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

impl PathArgs {
    /// Paths given, or `.` when none were
    #[must_use]
    pub fn or_current_dir(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths.clone()
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add tags to files
    #[command(visible_alias = "a")]
    Add {
        /// Tags to add
        #[arg(short = 't', long = "tag", value_name = "TAG", value_delimiter = ',', required = true)]
        tags: Vec<String>,

        #[command(flatten)]
        paths: PathArgs,
    },

    /// Remove tags from files
    #[command(visible_alias = "rm")]
    Remove {
        /// Tags to remove
        #[arg(short = 't', long = "tag", value_name = "TAG", value_delimiter = ',', required = true)]
        tags: Vec<String>,

        #[command(flatten)]
        paths: PathArgs,
    },

    /// Remove every tag from files
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,

        #[command(flatten)]
        paths: PathArgs,
    },

    /// Print files carrying the given tags
    #[command(visible_alias = "f")]
    Find {
        /// Tags to search for
        #[arg(short = 't', long = "tag", value_name = "TAG", value_delimiter = ',')]
        tags: Vec<String>,

        /// Match files with ANY of the specified tags (OR logic, default is AND)
        #[arg(long = "any")]
        any: bool,

        /// Exclude files with these tags
        #[arg(short = 'e', long = "exclude", value_name = "TAG", value_delimiter = ',')]
        excludes: Vec<String>,

        #[command(flatten)]
        paths: PathArgs,
    },

    /// Print files with their tags
    #[command(visible_alias = "ls")]
    List {
        /// Only print files that carry at least one tag
        #[arg(long = "tagged")]
        tagged: bool,

        #[command(flatten)]
        paths: PathArgs,
    },

    /// Print every tag in use with the number of files carrying it
    Tags {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., recursive=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., recursive)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the path of the configuration file
    Path,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Commands {
    /// Build the tag filter for the `find` command
    #[must_use]
    pub fn get_filter(&self) -> Option<TagFilter> {
        match self {
            Self::Find {
                tags,
                any,
                excludes,
                ..
            } => {
                let mode = if *any { SearchMode::Any } else { SearchMode::All };
                Some(
                    TagFilter::all(tags.clone())
                        .with_mode(mode)
                        .with_excludes(excludes.clone()),
                )
            }
            _ => None,
        }
    }
}

/// Reject tags that could not round-trip through a file name.
///
/// A tag must be non-empty and may not contain whitespace, brackets or a path
/// separator.
///
/// # Errors
/// Returns `NametagError::InvalidInput` naming the first offending tag.
pub fn validate_tags(tags: &[String]) -> Result<(), NametagError> {
    if tags.is_empty() {
        return Err(NametagError::InvalidInput("No tags provided".into()));
    }
    for tag in tags {
        if tag.is_empty() {
            return Err(NametagError::InvalidInput("Empty tag provided".into()));
        }
        if tag
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '[' | ']' | '/' | '\\'))
        {
            return Err(NametagError::InvalidInput(format!(
                "Invalid tag '{tag}': tags may not contain whitespace, brackets or path separators"
            )));
        }
    }
    Ok(())
}

/// Split a `key=value` setting
///
/// # Errors
/// Returns `NametagError::InvalidInput` if there is no `=`.
pub fn parse_setting(setting: &str) -> Result<(&str, &str), NametagError> {
    setting
        .split_once('=')
        .map(|(k, v)| (k.trim(), v.trim()))
        .ok_or_else(|| {
            NametagError::InvalidInput("Invalid format. Use: nametag config set key=value".into())
        })
}
