//! Error types for board-lib.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for board operations.
#[derive(Error, Debug)]
pub enum BoardError {
    // === Item Errors ===
    /// User story with the specified ID was not found.
    #[error("User story not found: {id}")]
    StoryNotFound { id: String },

    /// Sprint with the specified ID was not found.
    #[error("Sprint not found: {id}")]
    SprintNotFound { id: String },

    /// Attempted to create an item with an ID that already exists.
    #[error("ID collision: {id}")]
    IdCollision { id: String },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Invalid priority value.
    #[error("Invalid priority (expected High, Medium or Low): {value}")]
    InvalidPriority { value: String },

    /// Invalid status value.
    #[error("Invalid status: {status}")]
    InvalidStatus { status: String },

    // === Fetch Errors ===
    /// A read-API fetch failed. Surfaced as the global error flag; prior
    /// data is retained and nothing retries automatically.
    #[error("Fetch failed: {reason}")]
    FetchFailed { reason: String },

    // === Board File Errors ===
    /// Failed to parse a line in the board JSONL file.
    #[error("Board file parse error at line {line}: {reason}")]
    JsonlParse { line: usize, reason: String },

    /// File not found at the specified path.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Generic storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn fetch(reason: impl Into<String>) -> Self {
        Self::FetchFailed {
            reason: reason.into(),
        }
    }
}

/// Result type using `BoardError`.
pub type Result<T> = std::result::Result<T, BoardError>;
