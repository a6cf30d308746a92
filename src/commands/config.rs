//! Config command - read and write settings

use crate::cli::{ConfigCommands, parse_setting};
use crate::config::NametagConfig;
use crate::NametagError;

type Result<T> = std::result::Result<T, NametagError>;

/// Execute a config subcommand
///
/// # Errors
/// Returns `NametagError` if the key is unknown, the value does not parse, or
/// the configuration cannot be saved.
pub fn execute(mut config: NametagConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting)?;
            config.set(key, value)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {}", config.get(key)?);
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get(key)?);
        }
        ConfigCommands::Path => {
            println!("{}", NametagConfig::config_path()?.display());
        }
    }
    Ok(())
}
