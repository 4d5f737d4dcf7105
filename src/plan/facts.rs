//! Existence facts the planner needs about the filesystem.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Answers existence questions for the planner.
///
/// Relative paths are interpreted against the working directory the facts
/// were created for.
pub trait DirectoryFacts {
    fn file_exists(&self, path: &Path) -> bool;

    fn dir_exists(&self, path: &Path) -> bool;

    /// Whether two paths name the same file (e.g. a case-only rename on a
    /// case-insensitive filesystem).
    fn same_file(&self, a: &Path, b: &Path) -> bool {
        a == b
    }
}

/// Facts read from the real filesystem
#[derive(Debug, Clone)]
pub struct FsFacts {
    working_dir: PathBuf,
}

impl FsFacts {
    #[must_use]
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self { working_dir: working_dir.into() }
    }

    #[must_use]
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }
}

impl DirectoryFacts for FsFacts {
    fn file_exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(self.resolve(path)).is_ok()
    }

    fn dir_exists(&self, path: &Path) -> bool {
        self.resolve(path).is_dir()
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        match (fs::canonicalize(self.resolve(a)), fs::canonicalize(self.resolve(b))) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

/// In-memory facts, for previews and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryFacts {
    files: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
}

impl MemoryFacts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }
}

impl DirectoryFacts for MemoryFacts {
    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn dir_exists(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }
}
