// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Response validation.
//!
//! Classifies a raw [`Response`] against the verb that produced it. An error
//! payload always wins, whatever the status: the API reports business errors
//! as `{"collection": {"error": {"message": ...}}}` and that message is passed
//! through untouched.

use tracing::debug;

use crate::document::{CollectionDocument, CollectionEnvelope};
use crate::error::{HypermediaError, Result};
use crate::transport::{Response, Verb};

/// Check `response` and decode its document.
///
/// Returns `Ok(None)` for a successful empty body (e.g. `204 No Content`).
///
/// # Errors
///
/// - [`HypermediaError::Api`] when the body carries an error object.
/// - [`HypermediaError::UnexpectedStatus`] for a non-2xx status without one.
/// - [`HypermediaError::Decode`] for a 2xx body that is not a collection.
pub fn validate(response: &Response, verb: Verb) -> Result<Option<CollectionDocument>> {
    let body = response.body.trim();
    let parsed = if body.is_empty() {
        None
    } else {
        Some(CollectionEnvelope::from_json(body))
    };

    if let Some(Ok(envelope)) = &parsed {
        if let Some(error) = &envelope.collection.error {
            debug!(status = response.status, %verb, "API reported an error");
            return Err(HypermediaError::Api {
                status: response.status,
                message: error.message.clone(),
            });
        }
    }

    if !verb.accepts(response.status) {
        return Err(HypermediaError::UnexpectedStatus {
            verb,
            status: response.status,
        });
    }

    match parsed {
        None => Ok(None),
        Some(Ok(envelope)) => Ok(Some(envelope.collection)),
        Some(Err(err)) => Err(err),
    }
}

/// Check `response` without keeping the document.
pub fn check(response: &Response, verb: Verb) -> Result<()> {
    validate(response, verb).map(|_| ())
}
