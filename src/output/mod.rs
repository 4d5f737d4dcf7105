//! Output formatting for CLI display
//!
//! Plan previews, per-item results and the closing summary of a bulk
//! operation, plus JSON output for scripting.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::Result;
use crate::plan::{ExecutionSummary, Outcome, PlanItem};

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} (used by {count} file(s))")
    }
}

/// `source → destination` for renames, copies and moves; `source` for deletions
#[must_use]
pub fn transition(item: &PlanItem) -> String {
    match &item.destination {
        Some(destination) => format!("{} → {}", item.source, destination.display()),
        None => item.source.clone(),
    }
}

/// One colored line describing an item and its outcome
#[must_use]
pub fn item_line(item: &PlanItem) -> String {
    match &item.outcome {
        Outcome::Pending => format!("  {} {}", "•".cyan(), transition(item)),
        Outcome::Success => {
            format!("  {} {} {}", "✓".green(), item.action.past_tense(), transition(item))
        }
        Outcome::Skipped(reason) => {
            format!("  {} {} ({reason})", "⊘".yellow(), item.source)
        }
        Outcome::Failed(msg) => format!("  {} {}: {msg}", "✗".red(), item.source),
    }
}

/// Print dry-run preview of a plan
pub fn print_dry_run_preview(title: &str, items: &[PlanItem], quiet: bool) {
    let pending = items.iter().filter(|i| i.outcome.is_pending()).count();
    if !quiet {
        println!("{}", "=== Dry Run Mode ===".yellow().bold());
        println!(
            "{title}: would {} {pending} of {} file(s)",
            items.first().map_or("change", |i| i.action.verb()),
            items.len()
        );
        println!("\n{}", "Planned changes:".bold());
    }
    for item in items {
        if quiet {
            if item.outcome.is_pending() {
                println!("{}", transition(item));
            }
        } else {
            println!("{}", item_line(item));
        }
    }
    if !quiet {
        println!("\n{}", "Run without --dry-run to apply changes.".yellow());
    }
}

/// Print the outcome of every executed item.
///
/// In quiet mode only successful items are printed, as the new name or, for
/// deletions, the removed name.
pub fn print_results(items: &[PlanItem], quiet: bool) {
    for item in items {
        if !quiet {
            println!("{}", item_line(item));
        } else if item.outcome == Outcome::Success {
            match &item.destination {
                Some(destination) => println!("{}", destination.display()),
                None => println!("{}", item.source),
            }
        }
    }
}

/// Print the closing summary of a bulk operation
pub fn print_summary(title: &str, summary: &ExecutionSummary) {
    println!("\n{}", format!("=== {title} Summary ===").bold());
    println!("  {} {}", "✓ Success:".green(), summary.success);
    if summary.skipped > 0 {
        println!("  {} {}", "⊘ Skipped:".yellow(), summary.skipped);
    }
    if summary.failed > 0 {
        println!("  {} {}", "✗ Errors:".red(), summary.failed);
        println!("\n{}", "Error details:".red().bold());
        for msg in &summary.error_messages {
            println!("  - {msg}");
        }
    }
}

/// Write `value` to stdout as pretty JSON
///
/// # Errors
/// Returns an error if serialization or writing to stdout fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
