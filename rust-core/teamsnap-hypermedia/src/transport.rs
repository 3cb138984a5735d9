// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Transport port.
//!
//! The client never speaks HTTP itself. It builds a [`Request`], hands it to a
//! [`Transport`], and classifies the [`Response`] it gets back. Concrete
//! transports live outside this crate (a `reqwest` adapter in
//! `teamsnap-client`) or in [`crate::memory`] for tests.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::arguments::Arguments;

// ---------------------------------------------------------------------------
// Verb
// ---------------------------------------------------------------------------

/// HTTP verbs the client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    /// Queries and relation fetches.
    Get,
    /// Commands and `create`.
    Post,
    /// `update`.
    Patch,
    /// `delete`.
    Delete,
}

impl Verb {
    /// Returns `true` for verbs that only read.
    pub fn is_read(self) -> bool {
        matches!(self, Verb::Get)
    }

    /// Returns `true` if `status` is a success for this verb. Every verb
    /// expects a 2xx; redirects are the transport's business.
    pub fn accepts(self, status: u16) -> bool {
        (200..300).contains(&status)
    }

    /// Upper-case method name.
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Request / Response
// ---------------------------------------------------------------------------

/// What travels with a request besides the URL.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No parameters.
    Empty,
    /// Query-string parameters (reads).
    Query(Vec<(String, String)>),
    /// JSON request body (writes).
    Json(Value),
}

impl Payload {
    /// Query string for reads, JSON object for everything else.
    pub fn for_verb(verb: Verb, args: &Arguments) -> Self {
        if args.is_empty() {
            Payload::Empty
        } else if verb.is_read() {
            Payload::Query(args.to_query_pairs())
        } else {
            Payload::Json(args.to_json())
        }
    }

    /// Deterministic text form used to match canned responses and in logs.
    pub fn canonical(&self) -> String {
        match self {
            Payload::Empty => String::new(),
            Payload::Query(pairs) => {
                let mut pairs: Vec<String> =
                    pairs.iter().map(|(name, value)| format!("{name}={value}")).collect();
                pairs.sort();
                pairs.join("&")
            }
            Payload::Json(value) => value.to_string(),
        }
    }
}

/// One outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// HTTP verb.
    pub verb: Verb,
    /// Absolute target URL.
    pub href: String,
    /// Parameters or body.
    pub payload: Payload,
}

impl Request {
    /// A request with no parameters.
    pub fn new(verb: Verb, href: impl Into<String>) -> Self {
        Self {
            verb,
            href: href.into(),
            payload: Payload::Empty,
        }
    }

    /// A request carrying `args` encoded for `verb`.
    pub fn with_arguments(verb: Verb, href: impl Into<String>, args: &Arguments) -> Self {
        Self {
            verb,
            href: href.into(),
            payload: Payload::for_verb(verb, args),
        }
    }

    /// A request with an explicit JSON body.
    pub fn with_body(verb: Verb, href: impl Into<String>, body: Value) -> Self {
        Self {
            verb,
            href: href.into(),
            payload: Payload::Json(body),
        }
    }
}

/// Raw response as returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response body text (may be empty).
    pub body: String,
}

impl Response {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Transport trait
// ---------------------------------------------------------------------------

/// Connection-level failure: the request never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{verb} {href} failed: {message}")]
pub struct TransportError {
    /// Verb of the failed request.
    pub verb: Verb,
    /// Target of the failed request.
    pub href: String,
    /// Underlying cause.
    pub message: String,
}

impl TransportError {
    /// Builds an error for `request`.
    pub fn new(request: &Request, message: impl Into<String>) -> Self {
        Self {
            verb: request.verb,
            href: request.href.clone(),
            message: message.into(),
        }
    }
}

/// Executes requests.
///
/// Implementations must be shareable across threads; the client holds one in
/// an `Arc` inside its context.
pub trait Transport: Send + Sync {
    /// Execute `request` and return whatever the server answered.
    ///
    /// A non-2xx status is still `Ok`: classification is the response
    /// validator's job. `Err` means no response was obtained at all.
    fn execute(&self, request: &Request) -> Result<Response, TransportError>;

    /// A human-readable name for logs.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_accepts() {
        assert!(Verb::Get.accepts(200));
        assert!(Verb::Post.accepts(201));
        assert!(Verb::Delete.accepts(204));
        assert!(!Verb::Get.accepts(304));
        assert!(!Verb::Patch.accepts(422));
        assert!(!Verb::Post.accepts(500));
    }

    #[test]
    fn test_payload_for_verb() {
        let args = Arguments::new().with("member_id", 1);
        assert_eq!(
            Payload::for_verb(Verb::Get, &args),
            Payload::Query(vec![("member_id".to_owned(), "1".to_owned())])
        );
        assert_eq!(
            Payload::for_verb(Verb::Post, &args),
            Payload::Json(serde_json::json!({"member_id": 1}))
        );
        assert_eq!(Payload::for_verb(Verb::Get, &Arguments::new()), Payload::Empty);
    }

    #[test]
    fn test_canonical_sorts_query() {
        let payload = Payload::Query(vec![
            ("types".to_owned(), "team,member".to_owned()),
            ("team_id".to_owned(), "1".to_owned()),
        ]);
        assert_eq!(payload.canonical(), "team_id=1&types=team,member");
    }

    #[test]
    fn test_transport_error_display() {
        let request = Request::new(Verb::Get, "http://localhost:3000/");
        let err = TransportError::new(&request, "connection refused");
        assert_eq!(
            err.to_string(),
            "GET http://localhost:3000/ failed: connection refused"
        );
    }
}
