//! # Error Handling
//!
//! This module defines the centralized error type for the `drupal-dev-mode`
//! library. It uses the `thiserror` library to create an `Error` enum that
//! covers every failure a pipeline stage can run into, each carrying enough
//! context (file path, underlying cause) to diagnose the problem from the log
//! alone.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. The first five variants are the failure kinds
//!   a stage reports (unresolved path, read, parse, block not found, write);
//!   the rest cover invalid input and wrapped foreign errors.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! A setting address that is absent from a file is never an error. The toggle
//! engine logs it and leaves the buffer untouched.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for drupal-dev-mode operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required file could not be located.
    #[error("Unresolved path for {file}: {path}")]
    PathUnresolved {
        /// Human readable name of the file, e.g. `settings.php`
        file: String,
        /// Rendered path or sentinel (`false`)
        path: String,
    },

    /// The file exists (or was expected to) but could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not well-formed YAML, or its shape cannot hold the
    /// settings being toggled.
    #[error("Unable to parse '{}' as YAML: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Neither the commented nor the uncommented settings.local.php inclusion
    /// block is present.
    #[error(
        "Unable to match a settings.local.php inclusion code block to manipulate in '{}'",
        path.display()
    )]
    BlockNotFound { path: PathBuf },

    /// The updated content could not be written back.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A parsed document does not have the shape needed to navigate to a key,
    /// e.g. `parameters` is a scalar.
    #[error("Unexpected document structure: {message}")]
    Document { message: String },

    /// A setting address was empty or contained an empty key.
    #[error("Invalid setting address: {message}")]
    InvalidAddress { message: String },

    /// The `.dev-mode.yaml` configuration could not be loaded.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Config {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
