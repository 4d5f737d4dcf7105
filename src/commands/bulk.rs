//! Bulk command - plan one operation over a selection of files and apply it
//!
//! Every bulk subcommand (`rewrite`, `tag`, `untag`, `priority`, `index`,
//! `toss`, `move`, `copy`, `delete`) goes through [`execute`]: the selection
//! is resolved, a plan is built against the real folder, and the plan is
//! either previewed (`--dry-run`) or executed item by item.

use dialoguer::Confirm;
use serde::Serialize;
use tracing::debug;

use super::{Context, validate_file_name};
use crate::cli::Selection;
use crate::plan::{self, Action, ExecutionSummary, FsFacts, Operation, PlanItem};
use crate::{Result, VtagError, listing, output};

#[derive(Serialize)]
struct BulkReport<'a> {
    operation: String,
    items: &'a [PlanItem],
    summary: &'a ExecutionSummary,
}

/// Plan `operation` for the selected files and apply it
///
/// Deletions ask for confirmation unless `assume_yes` is set.
///
/// # Errors
/// Returns an error if the selection is invalid, the folder cannot be read,
/// a target directory does not exist, or confirmation fails. Per-file
/// failures are reported in the summary, not as errors.
pub fn execute(
    ctx: &Context,
    operation: &Operation,
    selection: &Selection,
    assume_yes: bool,
) -> Result<()> {
    if let Operation::MoveTo(dir) | Operation::CopyTo(dir) = operation {
        let resolved = ctx.working_dir.join(dir);
        if !resolved.is_dir() {
            return Err(VtagError::InvalidInput(format!(
                "'{}' is not a directory",
                resolved.display()
            )));
        }
    }

    let files = resolve_selection(ctx, selection)?;
    if files.is_empty() {
        if !ctx.quiet {
            println!("No files selected.");
        }
        return Ok(());
    }

    let facts = FsFacts::new(&ctx.working_dir);
    let mut items = plan::plan(&files, operation, &ctx.config.routing(), &facts);
    let title = operation.title();
    debug!(operation = %title, files = files.len(), "plan built");

    if ctx.dry_run {
        if ctx.json {
            return output::print_json(&items);
        }
        output::print_dry_run_preview(&title, &items, ctx.quiet);
        return Ok(());
    }

    if operation.action() == Action::Delete && !assume_yes && !confirm_delete(&items)? {
        if !ctx.quiet {
            println!("Cancelled.");
        }
        return Ok(());
    }

    let summary = plan::execute(&mut items, &ctx.working_dir);

    if ctx.json {
        return output::print_json(&BulkReport { operation: title, items: &items, summary: &summary });
    }
    output::print_results(&items, ctx.quiet);
    if !ctx.quiet {
        output::print_summary(&title, &summary);
    }
    Ok(())
}

/// File names a bulk command operates on, in order
///
/// # Errors
/// Returns an error for names that are not bare file names, or if `--all`
/// cannot read the folder.
pub fn resolve_selection(ctx: &Context, selection: &Selection) -> Result<Vec<String>> {
    if selection.all {
        let names = listing::read_folder(&ctx.working_dir, &ctx.config.listed_extensions())?;
        let terms = selection.terms.as_deref().map(listing::query_terms).unwrap_or_default();
        return Ok(names.into_iter().filter(|n| listing::matches_terms(n, &terms)).collect());
    }
    selection
        .files
        .iter()
        .map(|f| validate_file_name(f).map(str::to_string))
        .collect()
}

fn confirm_delete(items: &[PlanItem]) -> Result<bool> {
    let count = items.iter().filter(|i| i.outcome.is_pending()).count();
    if count == 0 {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(format!("DELETE {count} file(s)?"))
        .default(false)
        .interact()
        .map_err(|e| VtagError::InvalidInput(format!("Failed to get confirmation: {e}")))
}
