//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the core over the discovered files.

pub mod config;
pub mod find;
pub mod list;
pub mod tag;

use std::path::PathBuf;

use crate::discovery::FileDiscovery;
use crate::fs::FileSystem;

// Re-export execute functions for convenience
pub use config::execute as config;
pub use find::execute as find;
pub use list::execute as list;
pub use list::tags;
pub use tag::execute as tag;

/// Everything a command needs besides its own arguments
pub struct Context<'a> {
    pub fs: &'a (dyn FileSystem + Sync),
    pub discovery: &'a dyn FileDiscovery,
    pub quiet: bool,
    pub json: bool,
    pub dry_run: bool,
    pub parallel: bool,
}

impl Context<'_> {
    /// Expand path arguments into candidate files
    #[must_use]
    pub fn candidates(&self, roots: &[PathBuf]) -> Vec<PathBuf> {
        self.discovery.discover(roots)
    }
}
