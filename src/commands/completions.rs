//! Completions command - shell completion scripts

use std::io;

use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Write the completion script for `shell` to stdout
pub fn execute(shell: Shell) {
    let mut command = Cli::command_tree();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut io::stdout());
}
