// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Client configuration.
//!
//! [`ClientConfig`] mirrors the `init` options of the API: where the API
//! lives, the token to present, and how the backup cache behaves. It can be
//! deserialized from any serde format or read from the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `TEAMSNAP_URL` | `url` |
//! | `TEAMSNAP_TOKEN` | `token` |
//! | `TEAMSNAP_BACKUP_CACHE` | `backup_cache` (`true`, `false`, or a path) |
//! | `TEAMSNAP_OFFLINE` | `offline` |
//! | `TEAMSNAP_TIMEOUT_SECS` | `timeout_secs` |

use std::time::Duration;

use serde::{Deserialize, Serialize};
use teamsnap_backup::BackupCache;
use url::Url;

use crate::error::{Result, TeamSnapError};

/// Default API root.
pub const DEFAULT_URL: &str = "https://apiv3.teamsnap.com";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything needed to build a client context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// URL of the root collection.
    pub url: String,
    /// Bearer token; requests are sent unauthenticated when `None`.
    pub token: Option<String>,
    /// Backup cache flag or path. Unset means enabled at the default path.
    pub backup_cache: BackupCache,
    /// Skip the API entirely and discover from the backup cache.
    pub offline: bool,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_owned(),
            token: None,
            backup_cache: BackupCache::default(),
            offline: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// A configuration for `url` with every other field defaulted.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `TEAMSNAP_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`TeamSnapError::Configuration`] for unparsable values.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ClientConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup("TEAMSNAP_URL") {
            config.url = url;
        }
        if let Some(token) = lookup("TEAMSNAP_TOKEN").filter(|token| !token.is_empty()) {
            config.token = Some(token);
        }
        if let Some(setting) = lookup("TEAMSNAP_BACKUP_CACHE").filter(|value| !value.is_empty()) {
            // Parsing a backup setting cannot fail; anything not a flag is a path.
            config.backup_cache = setting.parse().unwrap_or_default();
        }
        if let Some(offline) = lookup("TEAMSNAP_OFFLINE") {
            config.offline = parse_flag("TEAMSNAP_OFFLINE", &offline)?;
        }
        if let Some(timeout) = lookup("TEAMSNAP_TIMEOUT_SECS") {
            config.timeout_secs = timeout.trim().parse().map_err(|_| {
                TeamSnapError::Configuration(format!(
                    "TEAMSNAP_TIMEOUT_SECS must be a whole number of seconds, got '{timeout}'"
                ))
            })?;
        }
        Ok(config)
    }

    /// Parsed and checked root URL.
    ///
    /// # Errors
    ///
    /// Returns [`TeamSnapError::Configuration`] if `url` is not an absolute
    /// http(s) URL.
    pub fn parsed_url(&self) -> Result<Url> {
        parse_base_url(&self.url)
    }

    /// Per-request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Parse an API root URL, accepting only http and https.
pub(crate) fn parse_base_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url)
        .map_err(|e| TeamSnapError::Configuration(format!("Invalid API URL '{url}': {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(TeamSnapError::Configuration(format!(
            "Invalid API URL '{url}': unsupported scheme '{other}'"
        ))),
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(TeamSnapError::Configuration(format!(
            "{name} must be true or false, got '{value}'"
        ))),
    }
}
