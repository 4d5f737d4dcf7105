//! Config command - show configuration

use super::Context;
use crate::cli::ConfigCommands;
use crate::{Result, VtagError, output};

/// Execute a configuration subcommand
///
/// # Errors
/// Returns an error if the configuration cannot be serialized.
pub fn execute(ctx: &Context, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
        ConfigCommands::Show if ctx.json => output::print_json(&ctx.config),
        ConfigCommands::Show => {
            let text = toml::to_string_pretty(&ctx.config)
                .map_err(|e| VtagError::InvalidInput(format!("Failed to serialize config: {e}")))?;
            if !ctx.quiet {
                println!("# {}", ctx.config_path.display());
            }
            print!("{text}");
            Ok(())
        }
    }
}
