//! Plan execution against the real filesystem.
//!
//! Each pending item gets exactly one filesystem action. Failures are recorded
//! on the item and execution continues with the next one.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use super::types::{Action, Outcome, PlanItem, SkipReason};

/// Counts of item outcomes after execution
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionSummary {
    pub success: usize,
    pub skipped: usize,
    pub failed: usize,
    pub error_messages: Vec<String>,
}

impl ExecutionSummary {
    /// Tally the outcomes of `items`
    #[must_use]
    pub fn from_items(items: &[PlanItem]) -> Self {
        let mut summary = Self::default();
        for item in items {
            match &item.outcome {
                Outcome::Success => summary.success += 1,
                Outcome::Skipped(_) | Outcome::Pending => summary.skipped += 1,
                Outcome::Failed(msg) => {
                    summary.failed += 1;
                    summary.error_messages.push(format!("{}: {msg}", item.source));
                }
            }
        }
        summary
    }
}

/// Perform every pending item of `items`, recording outcomes in place.
///
/// Bare source and destination names are resolved against `working_dir`.
pub fn execute(items: &mut [PlanItem], working_dir: &Path) -> ExecutionSummary {
    for item in items.iter_mut().filter(|i| i.outcome.is_pending()) {
        let source = working_dir.join(&item.source);
        let destination = item.destination.as_ref().map(|d| working_dir.join(d));

        item.outcome = match perform(item.action, &source, destination.as_deref()) {
            Ok(()) => {
                info!(action = item.action.verb(), source = %item.source, destination = ?item.destination, "done");
                Outcome::Success
            }
            Err(ExecError::Exists(path)) => {
                warn!(source = %item.source, destination = %path.display(), "destination appeared before execution");
                Outcome::Skipped(SkipReason::DestinationCollision { destination: path })
            }
            Err(ExecError::Io(e)) => {
                warn!(action = item.action.verb(), source = %item.source, error = %e, "failed");
                Outcome::Failed(e.to_string())
            }
        };
    }
    ExecutionSummary::from_items(items)
}

enum ExecError {
    Exists(PathBuf),
    Io(io::Error),
}

impl From<io::Error> for ExecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

fn perform(action: Action, source: &Path, destination: Option<&Path>) -> Result<(), ExecError> {
    let Some(destination) = destination else {
        return match action {
            Action::Delete => Ok(fs::remove_file(source)?),
            _ => Err(ExecError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "plan item has no destination",
            ))),
        };
    };

    // rename(2) silently replaces an existing target
    if fs::symlink_metadata(destination).is_ok() && !is_same_file(source, destination) {
        return Err(ExecError::Exists(destination.to_path_buf()));
    }

    match action {
        Action::Rename => fs::rename(source, destination)?,
        Action::Copy => copy_preserving_mtime(source, destination)?,
        Action::Move => move_file(source, destination)?,
        Action::Delete => fs::remove_file(source)?,
    }
    Ok(())
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn copy_preserving_mtime(source: &Path, destination: &Path) -> io::Result<()> {
    let modified = fs::metadata(source)?.modified()?;
    fs::copy(source, destination)?;
    File::options().write(true).open(destination)?.set_modified(modified)
}

fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    match fs::rename(source, destination) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            copy_preserving_mtime(source, destination)?;
            fs::remove_file(source)
        }
        other => other,
    }
}
