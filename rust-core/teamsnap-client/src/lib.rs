// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! # teamsnap-client
//!
//! A TeamSnap API client whose resource types are not compiled in but
//! discovered at runtime from the API's Collection+JSON root.
//!
//! Initialization fetches the root document and every collection reachable
//! from its links.
//! Every collection becomes a [`ResourceType`] named after its link relation
//! (`teams` → `Team`), with one [`Operation`] per advertised query (GET) or
//! command (POST). Results are [`Resource`]s whose links become lazily
//! followed [`Relation`]s.
//!
//! All state lives in an explicit [`ClientContext`] (API root, transport and
//! token, backup-cache settings), so several clients can run side by side.
//! When the API is unreachable, discovery falls back to the snapshot kept in
//! the backup cache.
//!
//! ## Modules
//!
//! - [`config`]: `ClientConfig` and environment loading.
//! - [`context`]: `ClientContext`.
//! - [`http`]: `HttpTransport` over blocking reqwest.
//! - [`discovery`]: Root walk, snapshot persistence, backup fallback.
//! - [`registry`]: `Registry` and `DiscoverySnapshot`.
//! - [`registrar`]: `ResourceType` and endpoint registration.
//! - [`operation`]: Generated query/command operations.
//! - [`resource`]: Materialized items and relations.
//! - [`bulk`]: Team-scoped bulk load.
//! - [`client`]: The `Client` wrapper.
//! - [`error`]: `TeamSnapError`.

pub mod bulk;
pub mod client;
pub mod config;
pub mod context;
pub mod discovery;
pub mod error;
pub mod http;
pub mod operation;
pub mod registrar;
pub mod registry;
pub mod resource;

pub use bulk::bulk_load;
pub use client::Client;
pub use config::{ClientConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_URL};
pub use context::ClientContext;
pub use discovery::{discover, discover_snapshot, DiscoverySource};
pub use error::{Result, TeamSnapError};
pub use http::HttpTransport;
pub use operation::Operation;
pub use registrar::{register, ResourceType, ROOT_TYPE};
pub use registry::{DiscoveredCollection, DiscoverySnapshot, Registry};
pub use resource::{materialize, Cardinality, Related, Relation, Resource};

pub use teamsnap_backup::{BackupCache, DEFAULT_BACKUP_PATH};
pub use teamsnap_hypermedia::{Arguments, InMemoryTransport, Payload, Transport, Verb};
