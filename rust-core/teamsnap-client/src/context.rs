// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! The client context every operation runs under.
//!
//! A [`ClientContext`] bundles the API root, the transport (which carries the
//! credentials), and the backup-cache settings. It is cheap to clone and is
//! passed explicitly to every generated operation, so independent contexts
//! (different APIs, tokens, or fixture transports) can coexist in one process.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use teamsnap_backup::{backup_exists, resolve_backup_path, BackupCache};
use teamsnap_hypermedia::{validator, CollectionDocument, Request, Transport};
use tracing::debug;
use url::Url;

use crate::config::{parse_base_url, ClientConfig};
use crate::error::Result;
use crate::http::HttpTransport;

/// Shared, immutable client state.
#[derive(Clone)]
pub struct ClientContext {
    inner: Arc<ContextInner>,
}

#[derive(Clone)]
struct ContextInner {
    base_url: Url,
    transport: Arc<dyn Transport>,
    backup_cache: BackupCache,
    offline: bool,
}

impl ClientContext {
    /// A context for the API rooted at `base_url` using `transport`.
    ///
    /// The backup cache is disabled; enable it with
    /// [`ClientContext::with_backup_cache`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::TeamSnapError::Configuration`] for an invalid URL.
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(ContextInner {
                base_url: parse_base_url(base_url)?,
                transport,
                backup_cache: BackupCache::Disabled,
                offline: false,
            }),
        })
    }

    /// A context talking HTTP, built from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.token.clone(), config.timeout())?;
        Ok(Self::new(&config.url, Arc::new(transport))?
            .with_backup_cache(config.backup_cache.clone())
            .with_offline(config.offline))
    }

    /// Replace the backup-cache setting.
    #[must_use]
    pub fn with_backup_cache(mut self, backup_cache: BackupCache) -> Self {
        Arc::make_mut(&mut self.inner).backup_cache = backup_cache;
        self
    }

    /// Discover from the backup cache only, never from the API.
    #[must_use]
    pub fn with_offline(mut self, offline: bool) -> Self {
        Arc::make_mut(&mut self.inner).offline = offline;
        self
    }

    /// URL of the root collection.
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    /// `path` resolved against the root URL.
    pub(crate) fn join(&self, path: &str) -> Result<String> {
        self.inner
            .base_url
            .join(path)
            .map(String::from)
            .map_err(|e| {
                crate::TeamSnapError::Configuration(format!(
                    "Cannot resolve '{path}' against {}: {e}",
                    self.inner.base_url
                ))
            })
    }

    /// Backup-cache setting.
    pub fn backup_cache(&self) -> &BackupCache {
        &self.inner.backup_cache
    }

    /// Resolved backup file, or `None` when the cache is disabled.
    pub fn backup_path(&self) -> Option<PathBuf> {
        resolve_backup_path(&self.inner.backup_cache)
    }

    /// Returns `true` if a backup snapshot is on disk.
    pub fn has_backup(&self) -> bool {
        backup_exists(self.backup_path().as_deref())
    }

    /// Returns `true` if discovery must come from the backup cache.
    pub fn is_offline(&self) -> bool {
        self.inner.offline
    }

    /// Name of the underlying transport.
    pub fn transport_name(&self) -> &str {
        self.inner.transport.name()
    }

    /// Execute `request` and validate the response, keeping the protocol-level
    /// error so callers can tell outages from rejections.
    pub(crate) fn exchange(
        &self,
        request: &Request,
    ) -> teamsnap_hypermedia::Result<Option<CollectionDocument>> {
        debug!(
            verb = %request.verb,
            href = %request.href,
            payload = %request.payload.canonical(),
            "Sending request"
        );
        let response = self.inner.transport.execute(request)?;
        validator::validate(&response, request.verb)
    }

    /// Execute `request` and validate the response.
    pub(crate) fn send(&self, request: &Request) -> Result<Option<CollectionDocument>> {
        Ok(self.exchange(request)?)
    }
}

impl fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientContext")
            .field("base_url", &self.inner.base_url.as_str())
            .field("transport", &self.inner.transport.name())
            .field("backup_cache", &self.inner.backup_cache)
            .field("offline", &self.inner.offline)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamsnap_hypermedia::InMemoryTransport;

    #[test]
    fn test_context_defaults() {
        let context =
            ClientContext::new("http://localhost:3000", Arc::new(InMemoryTransport::new())).unwrap();
        assert_eq!(context.base_url(), "http://localhost:3000/");
        assert!(context.backup_path().is_none());
        assert!(!context.has_backup());
        assert!(!context.is_offline());
        assert_eq!(context.transport_name(), "in-memory");
    }

    #[test]
    fn test_builder_does_not_touch_clones() {
        let original =
            ClientContext::new("http://localhost:3000", Arc::new(InMemoryTransport::new())).unwrap();
        let offline = original.clone().with_offline(true).with_backup_cache(BackupCache::Default);
        assert!(offline.is_offline());
        assert!(offline.backup_path().is_some());
        assert!(!original.is_offline());
        assert!(original.backup_path().is_none());
    }

    #[test]
    fn test_join() {
        let context =
            ClientContext::new("http://localhost:3000", Arc::new(InMemoryTransport::new())).unwrap();
        assert_eq!(context.join("bulk_load").unwrap(), "http://localhost:3000/bulk_load");
    }

    #[test]
    fn test_invalid_url() {
        assert!(ClientContext::new("not a url", Arc::new(InMemoryTransport::new())).is_err());
    }
}
