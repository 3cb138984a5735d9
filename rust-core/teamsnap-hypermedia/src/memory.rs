// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! In-memory transport.
//!
//! Answers requests from a table of canned responses keyed by verb, URL, and
//! canonical payload. Records every request it sees and can be switched to
//! "unreachable" to simulate an outage. Clones share state, so a test can
//! keep a handle after giving one to a client context.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;

use crate::arguments::Arguments;
use crate::transport::{Payload, Request, Response, Transport, TransportError, Verb};

type RouteKey = (Verb, String, String);

/// A [`Transport`] backed by a sorted map of canned responses.
///
/// Unmatched requests get a `404` carrying a Collection+JSON error naming the
/// missing route.
///
/// # Example
///
/// ```rust
/// use teamsnap_hypermedia::memory::InMemoryTransport;
/// use teamsnap_hypermedia::{Request, Transport, Verb};
///
/// let transport = InMemoryTransport::new();
/// transport.respond(Verb::Get, "http://localhost:3000/", 200, r#"{"collection": {}}"#);
/// let response = transport.execute(&Request::new(Verb::Get, "http://localhost:3000/")).unwrap();
/// assert_eq!(response.status, 200);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransport {
    routes: Arc<RwLock<BTreeMap<RouteKey, Response>>>,
    requests: Arc<RwLock<Vec<Request>>>,
    unreachable: Arc<AtomicBool>,
}

impl InMemoryTransport {
    /// Create a transport with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `verb href` (no parameters) with `status` and `body`.
    pub fn respond(&self, verb: Verb, href: &str, status: u16, body: impl Into<String>) {
        self.insert(verb, href, &Payload::Empty, Response::new(status, body));
    }

    /// Answer `verb href` carrying `args` with `status` and `body`.
    pub fn respond_with(
        &self,
        verb: Verb,
        href: &str,
        args: &Arguments,
        status: u16,
        body: impl Into<String>,
    ) {
        let payload = Payload::for_verb(verb, args);
        self.insert(verb, href, &payload, Response::new(status, body));
    }

    /// Answer `verb href` carrying an explicit JSON body.
    pub fn respond_to_body(
        &self,
        verb: Verb,
        href: &str,
        request_body: &Value,
        status: u16,
        body: impl Into<String>,
    ) {
        let payload = Payload::Json(request_body.clone());
        self.insert(verb, href, &payload, Response::new(status, body));
    }

    /// Make every subsequent request fail at the connection level.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    /// Every request executed so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests executed so far.
    pub fn request_count(&self) -> usize {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn insert(&self, verb: Verb, href: &str, payload: &Payload, response: Response) {
        self.routes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((verb, href.to_owned(), payload.canonical()), response);
    }
}

impl Transport for InMemoryTransport {
    fn execute(&self, request: &Request) -> Result<Response, TransportError> {
        self.requests
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        if self.unreachable.load(Ordering::SeqCst) {
            return Err(TransportError::new(request, "connection refused"));
        }

        let key = (request.verb, request.href.clone(), request.payload.canonical());
        let routes = self.routes.read().unwrap_or_else(PoisonError::into_inner);
        Ok(routes.get(&key).cloned().unwrap_or_else(|| {
            let message = format!("No route for {} {}", request.verb, request.href);
            Response::new(
                404,
                serde_json::json!({ "collection": { "error": { "message": message } } })
                    .to_string(),
            )
        }))
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
