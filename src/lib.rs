//! vtag - hashtags in file names
//!
//! Image folders where every file name carries its own tags:
//! `alice-beach #2#sunset.jpg`. This library parses and canonicalizes such
//! names, derives new ones (tag added/removed, priority changed, index copy,
//! model folder) and plans batch renames, copies and moves with deterministic
//! collision handling. Filesystem work is confined to [`plan::execute`] and
//! [`listing::read_folder`].

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod listing;
pub mod naming;
pub mod output;
pub mod plan;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum VtagError {
    /// Invalid tag or priority
    #[error("Tag error: {0}")]
    TagError(#[from] naming::TagError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Serialization of output failed
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, VtagError>;
