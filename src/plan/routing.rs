//! "Toss to model" routing.
//!
//! Picks the directory a file belongs in from its model prefix:
//!
//! | file      | `model_base_dir/<model>` exists | destination          |
//! |-----------|---------------------------------|----------------------|
//! | video     | yes                             | `video_base_dir`     |
//! | video     | no                              | `video_all_dir`      |
//! | non-video | yes                             | `model_base_dir/<model>` |
//! | non-video | no                              | none                 |
//!
//! A destination directory must already exist; routing never creates one.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::facts::DirectoryFacts;
use crate::naming::{grammar, model_name};

/// Directories and extension sets used for routing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingConfig {
    pub model_base_dir: Option<PathBuf>,
    pub video_base_dir: Option<PathBuf>,
    pub video_all_dir: Option<PathBuf>,
    /// Lowercase extensions with leading `.`
    pub video_extensions: BTreeSet<String>,
    /// Lowercase extensions with leading `.`; empty allows everything
    pub extension_allowlist: BTreeSet<String>,
}

impl RoutingConfig {
    #[must_use]
    pub fn is_video(&self, filename: &str) -> bool {
        extension_of(filename).is_some_and(|ext| self.video_extensions.contains(&ext))
    }

    /// Videos are always allowed; other files need an allowlisted extension
    /// unless the allowlist is empty.
    #[must_use]
    pub fn is_allowed(&self, filename: &str) -> bool {
        if self.extension_allowlist.is_empty() || self.is_video(filename) {
            return true;
        }
        extension_of(filename).is_some_and(|ext| self.extension_allowlist.contains(&ext))
    }
}

/// Normalize a configured extension: `JPG`, `.jpg` and ` .Jpg ` become `.jpg`.
///
/// Returns `None` for blank entries.
#[must_use]
pub fn normalize_extension(ext: &str) -> Option<String> {
    let trimmed = ext.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!(".{}", trimmed.to_lowercase()))
}

fn extension_of(filename: &str) -> Option<String> {
    let (_, ext) = grammar::split_extension(filename);
    (ext.len() > 1).then(|| ext.to_lowercase())
}

/// Directory `filename` should be moved into, if any qualifies.
pub fn route_to_model<F>(filename: &str, config: &RoutingConfig, facts: &F) -> Option<PathBuf>
where
    F: DirectoryFacts + ?Sized,
{
    let base = config.model_base_dir.as_deref()?;
    let model = model_name(filename).filter(|m| !matches!(*m, "." | ".."))?;
    let model_dir = base.join(model);
    let has_model_dir = facts.dir_exists(&model_dir);

    let target = if config.is_video(filename) {
        if has_model_dir {
            existing_dir(config.video_base_dir.as_deref(), facts)
        } else {
            existing_dir(config.video_all_dir.as_deref(), facts)
        }
    } else if has_model_dir {
        Some(model_dir)
    } else {
        None
    };
    debug!(filename, model, target = ?target, "routed");
    target
}

fn existing_dir<F>(dir: Option<&Path>, facts: &F) -> Option<PathBuf>
where
    F: DirectoryFacts + ?Sized,
{
    dir.filter(|d| facts.dir_exists(d)).map(Path::to_path_buf)
}
