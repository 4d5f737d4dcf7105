//! Rename command - rename one file by hand

use std::path::{Path, PathBuf};

use super::{Context, validate_file_name};
use crate::plan::{self, Action, DirectoryFacts, FsFacts, Outcome, PlanItem, SkipReason};
use crate::{Result, VtagError, output};

/// Rename `old` to `new` inside the working folder, never replacing another file
///
/// # Errors
/// Returns an error if either name is invalid, `old` does not exist, `new`
/// is taken by another file, or the rename itself fails.
pub fn execute(ctx: &Context, old: &str, new: &str) -> Result<()> {
    let old = validate_file_name(old)?;
    let new = validate_file_name(new.trim())?;
    let facts = FsFacts::new(&ctx.working_dir);

    if !facts.file_exists(Path::new(old)) {
        return Err(VtagError::InvalidInput(format!(
            "'{old}' does not exist in {}",
            ctx.working_dir.display()
        )));
    }

    let mut item = plan_rename(old, new, &facts);
    if ctx.dry_run {
        if ctx.json {
            return output::print_json(&item);
        }
        output::print_dry_run_preview("Rename", std::slice::from_ref(&item), ctx.quiet);
        return Ok(());
    }

    plan::execute(std::slice::from_mut(&mut item), &ctx.working_dir);

    if ctx.json {
        output::print_json(&item)?;
    } else {
        output::print_results(std::slice::from_ref(&item), ctx.quiet);
    }
    match item.outcome {
        Outcome::Skipped(SkipReason::DestinationCollision { destination }) => {
            Err(VtagError::InvalidInput(format!("'{}' already exists", destination.display())))
        }
        Outcome::Failed(msg) => Err(VtagError::InvalidInput(format!("Failed to rename '{old}': {msg}"))),
        _ => Ok(()),
    }
}

fn plan_rename<F: DirectoryFacts + ?Sized>(old: &str, new: &str, facts: &F) -> PlanItem {
    let destination = PathBuf::from(new);
    if old == new {
        return PlanItem::skipped(old.to_string(), Some(destination), Action::Rename, SkipReason::Unchanged);
    }
    if facts.file_exists(&destination) && !facts.same_file(Path::new(old), &destination) {
        let reason = SkipReason::DestinationCollision { destination: destination.clone() };
        return PlanItem::skipped(old.to_string(), Some(destination), Action::Rename, reason);
    }
    PlanItem::pending(old.to_string(), Some(destination), Action::Rename)
}
