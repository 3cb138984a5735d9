// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Error types for document decoding and response classification.

use thiserror::Error;

use crate::transport::{TransportError, Verb};

/// Failures produced while obtaining or classifying a response.
///
/// [`HypermediaError::Api`] is a business error reported by the server; every
/// other variant is transport-level: the server could not be reached or did
/// not answer with a usable document.
#[derive(Debug, Error)]
pub enum HypermediaError {
    /// The API reported an error. `message` is the server's text, verbatim.
    #[error("{message}")]
    Api {
        /// HTTP status the error arrived with.
        status: u16,
        /// Message text from the `collection.error` object.
        message: String,
    },

    /// No response was obtained.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A failing status without a decodable error payload.
    #[error("Unexpected HTTP {status} for {verb} request")]
    UnexpectedStatus {
        /// Verb of the request.
        verb: Verb,
        /// Status received.
        status: u16,
    },

    /// A success status whose body is not a Collection+JSON document.
    #[error("Malformed collection document: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HypermediaError {
    /// Returns `true` for failures that say nothing about the request itself:
    /// connection errors, undecodable bodies, and server-side (5xx) errors.
    /// These are the conditions under which a cached document may stand in.
    pub fn is_outage(&self) -> bool {
        match self {
            HypermediaError::Api { status, .. } => *status >= 500,
            HypermediaError::UnexpectedStatus { status, .. } => *status >= 500,
            HypermediaError::Transport(_) | HypermediaError::Decode(_) => true,
        }
    }
}

/// Crate-level result alias using [`HypermediaError`].
pub type Result<T> = std::result::Result<T, HypermediaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_message_is_verbatim() {
        let err = HypermediaError::Api {
            status: 422,
            message: "You must provide the member_id.".to_owned(),
        };
        assert_eq!(err.to_string(), "You must provide the member_id.");
        assert!(!err.is_outage());
    }

    #[test]
    fn test_outage_classification() {
        let server = HypermediaError::UnexpectedStatus {
            verb: Verb::Get,
            status: 503,
        };
        let client = HypermediaError::UnexpectedStatus {
            verb: Verb::Get,
            status: 401,
        };
        assert!(server.is_outage());
        assert!(!client.is_outage());
        assert_eq!(client.to_string(), "Unexpected HTTP 401 for GET request");
    }
}
