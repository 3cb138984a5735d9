// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Error types for the TeamSnap client.
//!
//! All fallible operations in this crate return [`Result<T>`], an alias for
//! `std::result::Result<T, TeamSnapError>`. Argument and lookup errors are
//! raised locally before any request is sent; [`TeamSnapError::Api`] carries
//! the server's message verbatim; [`TeamSnapError::Transport`] covers every
//! case where no usable response was obtained.

use teamsnap_backup::BackupError;
use teamsnap_hypermedia::HypermediaError;
use thiserror::Error;

/// Error type for TeamSnap client operations.
#[derive(Debug, Error)]
pub enum TeamSnapError {
    /// A generated operation was called with an argument it does not declare.
    #[error("Invalid argument(s). Valid argument(s) are {valid:?}")]
    InvalidArgument {
        /// Declared argument names, in declared order.
        valid: Vec<String>,
        /// Supplied names that were not declared.
        rejected: Vec<String>,
    },

    /// The API reported a business error. Displays the server's message only.
    #[error("{message}")]
    Api {
        /// HTTP status the error arrived with.
        status: u16,
        /// Message text from the API, unmodified.
        message: String,
    },

    /// The request failed below the API: connection error, unexpected status
    /// without an error payload, or an undecodable body.
    #[error("Transport error: {0}")]
    Transport(#[source] HypermediaError),

    /// A `find` shortcut matched nothing.
    #[error("Could not find a {type_name} with an id of '{id}'.")]
    NotFound {
        /// Resource type searched.
        type_name: String,
        /// Requested id.
        id: String,
    },

    /// A required parameter or setting is missing or invalid.
    #[error("{0}")]
    Configuration(String),

    /// The root collection could not be obtained from the API or the backup
    /// cache. Client initialization cannot continue.
    #[error("Discovery failed: {0}")]
    Discovery(String),

    /// The backup cache file could not be read or written.
    #[error(transparent)]
    Backup(#[from] BackupError),

    /// No resource type with this name was discovered.
    #[error("Unknown resource type '{0}'")]
    UnknownResourceType(String),

    /// The resource type has no operation (or relation) with this name.
    #[error("{type_name} has no operation named '{operation}'")]
    UnknownOperation {
        /// Resource type addressed.
        type_name: String,
        /// Name that was requested.
        operation: String,
    },
}

impl TeamSnapError {
    /// Returns `true` if the API never produced a usable answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, TeamSnapError::Transport(_))
    }
}

impl From<HypermediaError> for TeamSnapError {
    fn from(err: HypermediaError) -> Self {
        match err {
            HypermediaError::Api { status, message } => TeamSnapError::Api { status, message },
            other => TeamSnapError::Transport(other),
        }
    }
}

/// Crate-level result alias using [`TeamSnapError`].
pub type Result<T> = std::result::Result<T, TeamSnapError>;
