use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::naming::{Priority, TagToken};

/// Filesystem action a plan item asks the executor to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Rename,
    Copy,
    Move,
    Delete,
}

impl Action {
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Rename => "rename",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Delete => "delete",
        }
    }

    #[must_use]
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::Rename => "Renamed",
            Self::Copy => "Copied",
            Self::Move => "Moved",
            Self::Delete => "Deleted",
        }
    }
}

/// Bulk operation selected by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Rewrite names into canonical form
    Rewrite,
    AddTag(TagToken),
    RemoveTag(TagToken),
    Priority(Priority),
    /// Copy each file to its `{model}-index` name
    MakeIndex,
    /// Move each file into its model (or video) folder
    TossToModel,
    MoveTo(PathBuf),
    CopyTo(PathBuf),
    Delete,
}

impl Operation {
    #[must_use]
    pub const fn action(&self) -> Action {
        match self {
            Self::Rewrite | Self::AddTag(_) | Self::RemoveTag(_) | Self::Priority(_) => {
                Action::Rename
            }
            Self::MakeIndex | Self::CopyTo(_) => Action::Copy,
            Self::TossToModel | Self::MoveTo(_) => Action::Move,
            Self::Delete => Action::Delete,
        }
    }

    /// Human-readable title used in summaries
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Rewrite => "Rewrite".to_string(),
            Self::AddTag(tag) => format!("Add Tag {tag}"),
            Self::RemoveTag(tag) => format!("Remove Tag {tag}"),
            Self::Priority(p) => format!("Priority {p}"),
            Self::MakeIndex => "Make Index".to_string(),
            Self::TossToModel => "Toss To Model".to_string(),
            Self::MoveTo(dir) => format!("Move To {}", dir.display()),
            Self::CopyTo(dir) => format!("Copy To {}", dir.display()),
            Self::Delete => "Delete".to_string(),
        }
    }
}

/// Reason an item was left out of filesystem action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The computed name equals the current one
    Unchanged,
    /// Destination exists on disk or was claimed earlier in the batch
    DestinationCollision { destination: PathBuf },
    /// Routing found no qualifying directory
    NoDestination,
    /// The operation does not apply to this name (e.g. no model prefix for an index)
    NotApplicable,
    /// Extension outside the configured allowlist
    UnsupportedExtension,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged => f.write_str("unchanged"),
            Self::DestinationCollision { destination } => {
                write!(f, "{} already exists", destination.display())
            }
            Self::NoDestination => f.write_str("no matching destination"),
            Self::NotApplicable => f.write_str("not applicable to this name"),
            Self::UnsupportedExtension => f.write_str("unsupported extension"),
        }
    }
}

/// Resolution state of a plan item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Outcome {
    Pending,
    Success,
    Skipped(SkipReason),
    Failed(String),
}

impl Outcome {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// One proposed filesystem action and its outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanItem {
    /// File name in the working directory
    pub source: String,
    /// Target path; bare names are relative to the working directory.
    /// `None` for deletions and for items skipped before a target was known.
    pub destination: Option<PathBuf>,
    pub action: Action,
    pub outcome: Outcome,
}

impl PlanItem {
    #[must_use]
    pub fn pending(source: String, destination: Option<PathBuf>, action: Action) -> Self {
        Self { source, destination, action, outcome: Outcome::Pending }
    }

    #[must_use]
    pub fn skipped(
        source: String,
        destination: Option<PathBuf>,
        action: Action,
        reason: SkipReason,
    ) -> Self {
        Self { source, destination, action, outcome: Outcome::Skipped(reason) }
    }

    /// Destination file name, if the destination is known
    #[must_use]
    pub fn destination_name(&self) -> Option<String> {
        self.destination
            .as_ref()
            .and_then(|d| d.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }
}
