// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! HTTP transport over `reqwest::blocking`.
//!
//! Reads send their arguments as a query string, writes as a JSON body. The
//! bearer token, when configured, goes on every request.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use teamsnap_hypermedia::{Payload, Request, Response, Transport, TransportError, Verb};

use crate::error::{Result, TeamSnapError};

/// Media type requested from the API.
pub const COLLECTION_JSON: &str = "application/vnd.collection+json";

/// [`Transport`] that talks to the live API.
pub struct HttpTransport {
    /// Connection-pooled blocking client.
    http: Client,
    /// Bearer token, if any.
    token: Option<String>,
    /// Per-request timeout.
    timeout: Duration,
}

impl HttpTransport {
    /// Build a transport presenting `token` with the given timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TeamSnapError::Configuration`] if the TLS client cannot be
    /// constructed.
    pub fn new(token: Option<String>, timeout: Duration) -> Result<Self> {
        // A provider may already be installed by the host application.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TeamSnapError::Configuration(format!("Cannot build HTTP client: {e}")))?;

        Ok(Self {
            http,
            token,
            timeout,
        })
    }

    /// Configured per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn apply_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &Request) -> std::result::Result<Response, TransportError> {
        let builder = match request.verb {
            Verb::Get => self.http.get(&request.href),
            Verb::Post => self.http.post(&request.href),
            Verb::Patch => self.http.patch(&request.href),
            Verb::Delete => self.http.delete(&request.href),
        };
        let builder = match &request.payload {
            Payload::Empty => builder,
            Payload::Query(pairs) => builder.query(pairs),
            Payload::Json(body) => builder.json(body),
        };

        let response = self
            .apply_auth(builder.header(ACCEPT, COLLECTION_JSON))
            .send()
            .map_err(|e| TransportError::new(request, e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError::new(request, e.to_string()))?;
        Ok(Response::new(status, body))
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = HttpTransport::new(Some("token".to_owned()), Duration::from_secs(5)).unwrap();
        assert_eq!(transport.timeout(), Duration::from_secs(5));
        assert_eq!(transport.name(), "http");
    }

    #[test]
    fn test_connection_failure_is_transport_error() {
        let transport = HttpTransport::new(None, Duration::from_millis(500)).unwrap();
        // Nothing listens on the loopback discard port.
        let request = Request::new(Verb::Get, "http://127.0.0.1:9/");
        let err = transport.execute(&request).unwrap_err();
        assert_eq!(err.verb, Verb::Get);
        assert_eq!(err.href, "http://127.0.0.1:9/");
    }
}
