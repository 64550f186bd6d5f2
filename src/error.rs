//! Error types for poststage.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur while staging build artifacts, and the [`Result`] type
//! alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | IO | [`Error::Io`], [`Error::TempFile`], [`Error::Persist`] |
//! | Pass-fatal | [`Error::DestinationCreate`], [`Error::ReadDir`] |
//!
//! Pass-fatal errors abort the copy pass that raised them but never the
//! other pass, and never the host build: the orchestration layer in
//! [`crate::Stage`] converts them into warnings and a
//! [`PassOutcome::Failed`](crate::PassOutcome::Failed) entry.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for poststage operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while staging build artifacts.
///
/// All errors include relevant path information to aid debugging.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a destination directory
    ///
    /// This is fatal for the pass that needed the directory: the remaining
    /// copies of that pass are skipped, but the other pass still runs.
    #[error("Failed to create destination directory {path}: {source}")]
    DestinationCreate {
        /// The directory that could not be created
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Failed to enumerate a source directory that exists
    #[error("Failed to read source directory {path}: {source}")]
    ReadDir {
        /// The directory that could not be enumerated
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Failed to create a temporary file next to the destination
    #[error("Failed to create temporary file in {path}: {source}")]
    TempFile {
        /// Directory where temp file creation was attempted
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Failed to persist a temporary file over the destination
    #[error("Failed to persist temporary file to {path}: {source}")]
    Persist {
        /// Target path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}
