//! Batch planning.
//!
//! Turns a selection of file names and an [`Operation`] into an ordered list
//! of [`PlanItem`]s. Planning never touches the filesystem except through the
//! caller's [`DirectoryFacts`]; the [`execute`] module performs the actions.
//!
//! Destinations are computed per file in parallel, then claimed in selection
//! order: the first item to claim a destination wins and later items aiming at
//! the same destination, or at the name of another selected file, are skipped
//! as collisions. One bad name never stops the rest of the batch.

pub mod execute;
pub mod facts;
pub mod routing;
pub mod types;

pub use execute::{ExecutionSummary, execute};
pub use facts::{DirectoryFacts, FsFacts, MemoryFacts};
pub use routing::{RoutingConfig, normalize_extension, route_to_model};
pub use types::{Action, Operation, Outcome, PlanItem, SkipReason};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::naming;

/// Where a single file would go, before batch-level collision checks
#[derive(Debug, Clone, PartialEq, Eq)]
enum Proposal {
    Target(PathBuf),
    /// Action without a destination (delete)
    InPlace,
    Skip(SkipReason),
}

/// Build the plan for `selection` in selection order.
pub fn plan<F>(
    selection: &[String],
    operation: &Operation,
    routing: &RoutingConfig,
    facts: &F,
) -> Vec<PlanItem>
where
    F: DirectoryFacts + Sync + ?Sized,
{
    let proposals: Vec<Proposal> = selection
        .par_iter()
        .map(|name| propose(name, operation, routing, facts))
        .collect();

    let action = operation.action();
    // Selected files still sit under their names while earlier items run, so
    // every selected name is taken from the start.
    let mut claimed: HashSet<PathBuf> = selection.iter().map(PathBuf::from).collect();
    let mut items = Vec::with_capacity(selection.len());

    for (source, proposal) in selection.iter().zip(proposals) {
        let item = match proposal {
            Proposal::Skip(reason) => PlanItem::skipped(source.clone(), None, action, reason),
            Proposal::InPlace => PlanItem::pending(source.clone(), None, action),
            Proposal::Target(destination) => {
                claim(source, destination, action, facts, &mut claimed)
            }
        };
        debug!(source = %item.source, outcome = ?item.outcome, "planned");
        items.push(item);
    }
    items
}

fn propose<F>(name: &str, operation: &Operation, routing: &RoutingConfig, facts: &F) -> Proposal
where
    F: DirectoryFacts + ?Sized,
{
    let renamed = |new_name: String| Proposal::Target(PathBuf::from(new_name));
    match operation {
        Operation::Rewrite => renamed(naming::scrub(name)),
        Operation::AddTag(tag) => renamed(naming::with_tag(name, tag)),
        Operation::RemoveTag(tag) => renamed(naming::without_tag(name, tag)),
        Operation::Priority(priority) => renamed(naming::apply_priority_tag(name, *priority)),
        Operation::MakeIndex => naming::index_name(name)
            .map_or(Proposal::Skip(SkipReason::NotApplicable), renamed),
        Operation::TossToModel => {
            if !routing.is_allowed(name) {
                return Proposal::Skip(SkipReason::UnsupportedExtension);
            }
            routing::route_to_model(name, routing, facts).map_or(
                Proposal::Skip(SkipReason::NoDestination),
                |dir| Proposal::Target(dir.join(name)),
            )
        }
        Operation::MoveTo(dir) | Operation::CopyTo(dir) => Proposal::Target(dir.join(name)),
        Operation::Delete => Proposal::InPlace,
    }
}

fn claim<F>(
    source: &str,
    destination: PathBuf,
    action: Action,
    facts: &F,
    claimed: &mut HashSet<PathBuf>,
) -> PlanItem
where
    F: DirectoryFacts + ?Sized,
{
    let source_path = Path::new(source);
    if destination.as_path() == source_path {
        return PlanItem::skipped(source.to_string(), Some(destination), action, SkipReason::Unchanged);
    }

    let collision = || SkipReason::DestinationCollision { destination: destination.clone() };
    if claimed.contains(&destination) {
        return PlanItem::skipped(source.to_string(), Some(destination.clone()), action, collision());
    }
    if facts.file_exists(&destination) {
        let same = facts.same_file(source_path, &destination);
        // A rename onto the same file is a case-only rename; copying or moving
        // a file onto itself is nothing to do.
        let reason = match (same, action) {
            (true, Action::Rename) => None,
            (true, _) => Some(SkipReason::Unchanged),
            (false, _) => Some(collision()),
        };
        if let Some(reason) = reason {
            return PlanItem::skipped(source.to_string(), Some(destination), action, reason);
        }
    }

    claimed.insert(destination.clone());
    PlanItem::pending(source.to_string(), Some(destination), action)
}
