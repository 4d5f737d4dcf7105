//! Configuration module for vtag
//!
//! Settings are stored as TOML in the user's config directory
//! (`~/.config/vtag/config.toml` on Linux) and can be overridden per call
//! with `--config <FILE>` or the `VTAG_CONFIG` environment variable.
//!
//! ```toml
//! default_folder = "/home/me/Pictures/inbox"
//! extensions = [".jpg", ".jpeg", ".gif", ".webp", ".png"]
//! video_extensions = [".mp4", ".webm"]
//! model_base_dir = "/home/me/Pictures/models"
//! video_base_dir = "/home/me/Videos/models"
//! video_all_dir = "/home/me/Videos/all"
//! favorite_tags = ["#sunset", "#portrait"]
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::naming::TagToken;
use crate::plan::{RoutingConfig, normalize_extension};

const DEFAULT_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".gif", ".webp", ".png"];
const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".webm", ".mkv", ".mov", ".avi"];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct VtagConfig {
    /// Folder used when `--dir` is not given (defaults to the current directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_folder: Option<PathBuf>,

    /// Extensions of files shown in listings
    pub extensions: Vec<String>,

    /// Extensions treated as video when routing
    pub video_extensions: Vec<String>,

    /// Directory holding one sub-folder per model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_base_dir: Option<PathBuf>,

    /// Destination for videos of models that have a folder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_base_dir: Option<PathBuf>,

    /// Destination for videos of models without a folder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_all_dir: Option<PathBuf>,

    /// Tags offered first when entering a tag
    pub favorite_tags: Vec<String>,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for VtagConfig {
    fn default() -> Self {
        Self {
            default_folder: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            video_extensions: DEFAULT_VIDEO_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            model_base_dir: None,
            video_base_dir: None,
            video_all_dir: None,
            favorite_tags: Vec::new(),
            quiet: false,
        }
    }
}

impl VtagConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("vtag").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory is unknown, or the file
    /// cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`. A missing file is created with the
    /// defaults, for the default location and `--config` alike, so
    /// `config show` always reflects a file on disk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let defaults = Self::default();
            defaults.save_to(path)?;
            return Ok(defaults);
        }

        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Listed extensions, normalized to lowercase with a leading `.`
    #[must_use]
    pub fn extension_set(&self) -> BTreeSet<String> {
        self.extensions.iter().filter_map(|e| normalize_extension(e)).collect()
    }

    #[must_use]
    pub fn video_extension_set(&self) -> BTreeSet<String> {
        self.video_extensions.iter().filter_map(|e| normalize_extension(e)).collect()
    }

    /// Extensions listed by the browser: images plus videos
    #[must_use]
    pub fn listed_extensions(&self) -> BTreeSet<String> {
        let mut all = self.extension_set();
        all.extend(self.video_extension_set());
        all
    }

    /// Routing settings for "toss to model"
    #[must_use]
    pub fn routing(&self) -> RoutingConfig {
        RoutingConfig {
            model_base_dir: self.model_base_dir.clone(),
            video_base_dir: self.video_base_dir.clone(),
            video_all_dir: self.video_all_dir.clone(),
            video_extensions: self.video_extension_set(),
            extension_allowlist: self.extension_set(),
        }
    }

    /// Favorite tags in configured order; invalid entries are dropped with a warning.
    #[must_use]
    pub fn favorite_tags(&self) -> Vec<TagToken> {
        let mut seen = BTreeSet::new();
        self.favorite_tags
            .iter()
            .filter_map(|raw| match TagToken::normalize(raw) {
                Ok(tag) => Some(tag),
                Err(e) => {
                    warn!(tag = %raw, error = %e, "ignoring favorite tag");
                    None
                }
            })
            .filter(|tag| seen.insert(tag.clone()))
            .collect()
    }

    /// Folder to operate on: explicit override, configured default, or `.`
    #[must_use]
    pub fn working_dir(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.default_folder.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
