//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and a [`Context`] describing the working folder and output mode.

pub mod bulk;
pub mod completions;
pub mod config;
pub mod list;
pub mod rename;
pub mod tags;

pub use bulk::execute as bulk;
pub use completions::execute as completions;
pub use config::execute as config;
pub use list::execute as list;
pub use rename::execute as rename;
pub use tags::execute as tags;

use std::path::PathBuf;

use crate::config::VtagConfig;

/// Settings shared by every command of one invocation
#[derive(Debug, Clone)]
pub struct Context {
    pub config: VtagConfig,
    /// Path of the configuration file in use
    pub config_path: PathBuf,
    /// Folder whose files the command operates on
    pub working_dir: PathBuf,
    pub quiet: bool,
    pub dry_run: bool,
    pub json: bool,
}

/// Check that `name` is a bare file name in the working folder
///
/// # Errors
/// Returns `InvalidInput` for empty names, `.`/`..` and names with a path
/// separator.
pub fn validate_file_name(name: &str) -> crate::Result<&str> {
    if name.is_empty() || name == "." || name == ".." || name.contains(std::path::is_separator) {
        return Err(crate::VtagError::InvalidInput(format!(
            "'{name}' is not a file name; use -C <DIR> to choose the folder"
        )));
    }
    Ok(name)
}
