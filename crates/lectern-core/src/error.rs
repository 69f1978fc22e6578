//! Error types for Lectern operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Lectern crates. Uses `thiserror` for derive macros.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur in Lectern operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested topic key is not present in the content table.
    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    /// Malformed slide content (blank title, empty bullet list, duplicate topic, ...).
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to a specific file.
    #[error("I/O error at {}: {source}", path.display())]
    IoWithPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create an unknown topic error.
    pub fn unknown_topic(key: impl Into<String>) -> Self {
        Self::UnknownTopic(key.into())
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Wrap an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True if this error is a lookup miss on a topic key.
    pub fn is_unknown_topic(&self) -> bool {
        matches!(self, Self::UnknownTopic(_))
    }
}

/// Result type alias using Lectern's Error type.
pub type Result<T> = std::result::Result<T, Error>;
