// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Reading and writing the backup cache file.
//!
//! The file holds the JSON serialization of whatever snapshot the caller
//! passes in. There is no locking; one process is assumed to own the file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{BackupError, Result};

/// Outcome of [`save_backup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupWrite {
    /// The snapshot was written; `bytes` is the length of the file.
    Written {
        /// Number of bytes written.
        bytes: usize,
    },
    /// The target directory is missing; nothing was written.
    SkippedMissingDirectory {
        /// The directory that does not exist.
        directory: PathBuf,
    },
}

/// Serialize `snapshot` to `path`.
///
/// A missing parent directory is not an error: a single warning naming the
/// directory is logged and [`BackupWrite::SkippedMissingDirectory`] returned.
///
/// # Errors
///
/// Returns [`BackupError::Io`] if the write itself fails and
/// [`BackupError::Serialization`] if `snapshot` cannot be serialized.
pub fn save_backup<T: Serialize>(path: &Path, snapshot: &T) -> Result<BackupWrite> {
    let directory = parent_directory(path);
    if !directory.is_dir() {
        warn!(
            directory = %directory.display(),
            "Directory '{}' does not exist. Backup cache functionality will not work until this is resolved.",
            directory.display()
        );
        return Ok(BackupWrite::SkippedMissingDirectory { directory });
    }

    let contents = serde_json::to_string(snapshot).map_err(|source| BackupError::Serialization {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, &contents).map_err(|source| BackupError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "Wrote backup cache");
    Ok(BackupWrite::Written {
        bytes: contents.len(),
    })
}

/// Read the snapshot stored at `path`.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns [`BackupError::Io`] for unreadable files and
/// [`BackupError::Serialization`] for contents that do not decode as `T`.
pub fn load_backup<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(BackupError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| BackupError::Serialization {
            path: path.to_path_buf(),
            source,
        })
}

/// Returns `true` if a backup path is configured and a file exists there.
pub fn backup_exists(path: Option<&Path>) -> bool {
    path.is_some_and(Path::is_file)
}

fn parent_directory(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
