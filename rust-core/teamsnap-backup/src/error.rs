// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Backup cache error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reading or writing the backup cache file.
#[derive(Debug, Error)]
pub enum BackupError {
    /// The file exists but could not be read or written.
    #[error("Backup cache I/O error at '{path}': {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file does not hold a valid snapshot, or the snapshot could not be
    /// serialized.
    #[error("Backup cache at '{path}' is not a valid snapshot: {source}")]
    Serialization {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
}

/// Crate-level result alias using [`BackupError`].
pub type Result<T> = std::result::Result<T, BackupError>;
