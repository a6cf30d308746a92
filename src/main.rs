//! Nametag CLI application entry point
//!
//! Tags are kept in file names, so every command works directly on the
//! filesystem; there is no database to set up.
//!
//! # Usage
//!
//! ```bash
//! # Tag files (photo.jpg -> photo.[holiday 2024].jpg)
//! nametag add -t holiday,2024 photo.jpg
//!
//! # Remove a tag from every file in a directory
//! nametag remove -t draft docs/
//!
//! # Find files carrying all of the given tags, recursively
//! nametag find -r -t holiday -t 2024 ~/Pictures
//!
//! # Preview a change without renaming anything
//! nametag clear -n *.pdf
//! ```
//!
//! # Configuration
//!
//! Settings live in `~/.config/nametag/config.toml` on Linux and can be
//! overridden with `NAMETAG_*` environment variables. Logging goes to stderr
//! and is controlled with `NAMETAG_LOG` (e.g. `NAMETAG_LOG=debug`).

use nametag::{
    NametagError, StdFileSystem, TagMutation,
    cli::{Cli, Commands},
    commands::{self, Context},
    config::NametagConfig,
    discovery::WalkDiscovery,
    junk::JunkFilter,
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, NametagError>;

fn init_logging() {
    let filter = EnvFilter::try_from_env("NAMETAG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Main entry point for the nametag application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `NametagError` if configuration loading fails, arguments are
/// invalid, or any file in a batch could not be renamed.
fn main() -> Result<()> {
    init_logging();

    let config = NametagConfig::load()?;
    let cli = Cli::parse_args();
    let quiet = cli.quiet || config.quiet;

    if let Commands::Config { command } = &cli.command {
        return commands::config(config, command, quiet);
    }

    let filter = JunkFilter::new(cli.hidden || config.include_hidden, &config.ignore)?;
    let discovery = WalkDiscovery::new(filter, cli.recursive || config.recursive);
    let fs = StdFileSystem;
    let ctx = Context {
        fs: &fs,
        discovery: &discovery,
        quiet,
        json: cli.json,
        dry_run: cli.dry_run,
        parallel: config.parallel,
    };

    match &cli.command {
        Commands::Add { tags, paths } => commands::tag(
            &ctx,
            &TagMutation::Add(tags.clone()),
            &paths.or_current_dir(),
            false,
        ),
        Commands::Remove { tags, paths } => commands::tag(
            &ctx,
            &TagMutation::Remove(tags.clone()),
            &paths.or_current_dir(),
            false,
        ),
        Commands::Clear { yes, paths } => {
            commands::tag(&ctx, &TagMutation::Clear, &paths.or_current_dir(), *yes)
        }
        Commands::Find { paths, .. } => {
            let filter = cli
                .command
                .get_filter()
                .ok_or_else(|| NametagError::InvalidInput("Failed to parse find parameters".into()))?;
            commands::find(&ctx, &filter, &paths.or_current_dir())
        }
        Commands::List { tagged, paths } => commands::list(&ctx, &paths.or_current_dir(), *tagged),
        Commands::Tags { paths } => commands::tags(&ctx, &paths.or_current_dir()),
        Commands::Config { .. } => unreachable!(),
    }
}
