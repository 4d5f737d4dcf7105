//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for vtag using the `clap` crate.
//!
//! # Commands
//!
//! - **list**: files of the working folder, narrowed by search terms
//! - **tags**: tags in use and the configured favorites
//! - **rewrite**, **tag**, **untag**, **priority**: rename files by their tags
//! - **index**: copy files to their `{model}-index` name
//! - **toss**, **move**, **copy**, **delete**: route files elsewhere
//! - **rename**: rename one file by hand
//!
//! Bulk commands take file names from the working folder (`-C <DIR>`, the
//! configured `default_folder`, or the current directory) or `--all`.
//! Global `--dry-run` prints the plan without touching any file.
//!
//! # Examples
//!
//! ```bash
//! vtag tag sunset "beach.jpg" "pier.jpg"
//! vtag priority 2 "alice-beach #sea.jpg"
//! vtag rewrite --all
//! vtag -n toss --all --match alice
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "vtag")]
#[command(about = "Tag, rewrite, index and route image files by the hashtags in their names", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Show what would happen without changing any file
    #[arg(short = 'n', long = "dry-run", global = true)]
    pub dry_run: bool,

    /// Print plans and listings as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Working folder (overrides `default_folder` from the config)
    #[arg(short = 'C', long = "dir", value_name = "DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(long = "config", value_name = "FILE", env = "VTAG_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The clap command tree, used to generate shell completions
    #[must_use]
    pub fn command_tree() -> clap::Command {
        Self::command()
    }
}

/// Files a bulk command operates on
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// File names in the working folder
    #[arg(value_name = "FILE", required_unless_present = "all", conflicts_with = "terms")]
    pub files: Vec<String>,

    /// Select every listed file in the working folder
    #[arg(short = 'a', long = "all", conflicts_with = "files")]
    pub all: bool,

    /// With --all, keep only files whose names contain all of these terms
    #[arg(short = 'm', long = "match", value_name = "TERMS", requires = "all")]
    pub terms: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List files of the working folder
    #[command(visible_alias = "ls")]
    List {
        /// Search terms; a file is listed when its name contains all of them
        #[arg(value_name = "TERM")]
        terms: Vec<String>,
    },

    /// Show tags used in the working folder and the favorite tags
    Tags,

    /// Rewrite file names into canonical tag order
    #[command(visible_alias = "scrub")]
    Rewrite {
        #[command(flatten)]
        selection: Selection,
    },

    /// Add a tag to files
    #[command(visible_alias = "t")]
    Tag {
        /// Tag to add, with or without the leading '#'
        tag: String,

        #[command(flatten)]
        selection: Selection,
    },

    /// Remove a tag from files
    #[command(visible_alias = "u")]
    Untag {
        /// Tag to remove, with or without the leading '#'
        tag: String,

        #[command(flatten)]
        selection: Selection,
    },

    /// Set the priority tag (#1 to #5) of files
    #[command(visible_alias = "p")]
    Priority {
        /// Priority level
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        level: u8,

        #[command(flatten)]
        selection: Selection,
    },

    /// Copy files to their "{model}-index" name
    Index {
        #[command(flatten)]
        selection: Selection,
    },

    /// Move files into their model folder (videos into the video folders)
    Toss {
        #[command(flatten)]
        selection: Selection,
    },

    /// Move files into a directory
    #[command(visible_alias = "mv")]
    Move {
        /// Destination directory
        #[arg(short = 't', long = "to", value_name = "DIR")]
        to: PathBuf,

        #[command(flatten)]
        selection: Selection,
    },

    /// Copy files into a directory
    #[command(visible_alias = "cp")]
    Copy {
        /// Destination directory
        #[arg(short = 't', long = "to", value_name = "DIR")]
        to: PathBuf,

        #[command(flatten)]
        selection: Selection,
    },

    /// Delete files
    #[command(visible_alias = "rm")]
    Delete {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,

        #[command(flatten)]
        selection: Selection,
    },

    /// Rename a single file
    Rename {
        /// Current file name
        old: String,

        /// New file name
        new: String,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigCommands {
    /// Print the path of the configuration file in use
    Path,

    /// Print the effective configuration as TOML
    Show,
}
