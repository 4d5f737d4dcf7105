//! vtag CLI application entry point
//!
//! Command-line front end for the vtag filename engine. Every file of an
//! image folder carries its tags in its own name (`alice-beach #2#sunset.jpg`);
//! vtag rewrites, tags, indexes and routes those files without any database.
//!
//! # Features
//!
//! - **Canonical names**: `rewrite` dedups, lowercases and sorts tag blocks
//! - **Tag editing**: `tag`, `untag` and `priority` rename files in bulk
//! - **Index copies**: `index` copies a file to its `{model}-index` name
//! - **Routing**: `toss` moves files into their model (or video) folder
//! - **Safe batches**: collisions are skipped, failures never stop a batch
//! - **Quiet Mode**: Suppress informational output for scripting
//!
//! # Usage
//!
//! ```bash
//! # List files, optionally narrowed by search terms
//! vtag list
//! vtag ls alice "#1"
//!
//! # Add and remove tags
//! vtag tag sunset "alice-beach.jpg"
//! vtag untag sunset --all --match alice
//!
//! # Preview a batch as JSON without touching any file
//! vtag -n --json rewrite --all
//!
//! # Move every file into its model folder
//! vtag toss --all
//!
//! # More logging
//! vtag -vv toss --all
//! VTAG_LOG=vtag=debug vtag toss --all
//! ```
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/vtag/config.toml` on Linux) or from the file named by
//! `--config` / `VTAG_CONFIG`. A missing file is created with defaults.

use std::process;

use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vtag::cli::{Cli, Commands};
use vtag::commands::{self, Context};
use vtag::config::VtagConfig;
use vtag::naming::{Priority, TagToken};
use vtag::plan::Operation;
use vtag::{Result, VtagError};

fn main() {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {e}", "Error:".red().bold());
        process::exit(1);
    }
}

/// Log to stderr; `VTAG_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("VTAG_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        commands::completions(shell);
        return Ok(());
    }

    let (config, config_path) = match &cli.config {
        Some(path) => (VtagConfig::load_from(path)?, path.clone()),
        None => (VtagConfig::load()?, VtagConfig::config_path()?),
    };
    debug!(path = %config_path.display(), "configuration loaded");

    let ctx = Context {
        working_dir: config.working_dir(cli.dir.as_deref()),
        quiet: cli.quiet || config.quiet,
        dry_run: cli.dry_run,
        json: cli.json,
        config,
        config_path,
    };

    if let Commands::Config { command } = cli.command {
        return commands::config(&ctx, command);
    }
    if !ctx.working_dir.is_dir() {
        return Err(VtagError::InvalidInput(format!(
            "'{}' is not a directory",
            ctx.working_dir.display()
        )));
    }

    match cli.command {
        Commands::List { terms } => commands::list(&ctx, &terms),
        Commands::Tags => commands::tags(&ctx),
        Commands::Rewrite { selection } => commands::bulk(&ctx, &Operation::Rewrite, &selection, false),
        Commands::Tag { tag, selection } => {
            let op = Operation::AddTag(TagToken::normalize(&tag)?);
            commands::bulk(&ctx, &op, &selection, false)
        }
        Commands::Untag { tag, selection } => {
            let op = Operation::RemoveTag(TagToken::normalize(&tag)?);
            commands::bulk(&ctx, &op, &selection, false)
        }
        Commands::Priority { level, selection } => {
            let op = Operation::Priority(Priority::try_from(level)?);
            commands::bulk(&ctx, &op, &selection, false)
        }
        Commands::Index { selection } => commands::bulk(&ctx, &Operation::MakeIndex, &selection, false),
        Commands::Toss { selection } => commands::bulk(&ctx, &Operation::TossToModel, &selection, false),
        Commands::Move { to, selection } => commands::bulk(&ctx, &Operation::MoveTo(to), &selection, false),
        Commands::Copy { to, selection } => commands::bulk(&ctx, &Operation::CopyTo(to), &selection, false),
        Commands::Delete { yes, selection } => commands::bulk(&ctx, &Operation::Delete, &selection, yes),
        Commands::Rename { old, new } => commands::rename(&ctx, &old, &new),
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}
