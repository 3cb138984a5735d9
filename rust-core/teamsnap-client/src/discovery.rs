// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Collection discovery.
//!
//! Discovery reads the root collection, follows links recursively to every
//! reachable resource collection, and registers one resource type per
//! collection. When a backup cache is configured the resulting snapshot is
//! persisted, and it stands in for the API when the API is unreachable or
//! when the context is offline.

use std::collections::{BTreeSet, VecDeque};
use std::path::Path;

use teamsnap_backup::{load_backup, save_backup, BackupWrite};
use teamsnap_hypermedia::{Link, Request, Verb};
use tracing::{debug, info, warn};

use crate::context::ClientContext;
use crate::error::{Result, TeamSnapError};
use crate::registry::{DiscoveredCollection, DiscoverySnapshot, Registry};

/// Where a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoverySource {
    /// Fetched from the API just now.
    Live,
    /// Loaded from the backup cache.
    Backup,
}

/// Discover every resource type reachable from the API root.
///
/// # Errors
///
/// [`TeamSnapError::Discovery`] when the root cannot be obtained from either
/// the API or the backup cache; API rejections (for example a bad token) are
/// returned as they are.
pub fn discover(context: &ClientContext) -> Result<Registry> {
    let (snapshot, source) = discover_snapshot(context)?;
    let registry = Registry::from_snapshot(&snapshot)?;
    info!(
        types = registry.len(),
        source = ?source,
        root = %context.base_url(),
        "Discovery complete"
    );
    Ok(registry)
}

/// Obtain the discovery snapshot, live or cached.
pub fn discover_snapshot(context: &ClientContext) -> Result<(DiscoverySnapshot, DiscoverySource)> {
    let backup_path = context.backup_path();

    if context.is_offline() {
        let path = backup_path.ok_or_else(|| {
            TeamSnapError::Discovery("Offline mode requires the backup cache to be enabled".to_owned())
        })?;
        debug!(path = %path.display(), present = context.has_backup(), "Offline discovery");
        return load_cached(&path).map(|snapshot| (snapshot, DiscoverySource::Backup));
    }

    match walk(context) {
        Ok(None) => Err(TeamSnapError::Discovery(format!(
            "{} returned no root collection",
            context.base_url()
        ))),
        Ok(Some(snapshot)) => {
            if let Some(path) = &backup_path {
                if let BackupWrite::Written { bytes } = save_backup(path, &snapshot)? {
                    debug!(path = %path.display(), bytes, "Saved discovery snapshot");
                }
            }
            Ok((snapshot, DiscoverySource::Live))
        }
        Err(err) if err.is_outage() => {
            let Some(path) = backup_path else {
                return Err(TeamSnapError::Discovery(format!(
                    "Cannot reach {}: {err}",
                    context.base_url()
                )));
            };
            warn!(
                error = %err,
                path = %path.display(),
                "API unreachable during discovery, using backup cache"
            );
            load_cached(&path).map(|snapshot| (snapshot, DiscoverySource::Backup))
        }
        Err(err) => Err(err.into()),
    }
}

fn load_cached(path: &Path) -> Result<DiscoverySnapshot> {
    load_backup(path)?.ok_or_else(|| {
        TeamSnapError::Discovery(format!("No backup cache found at '{}'", path.display()))
    })
}

/// Fetch the root and every resource collection reachable from it.
///
/// Links are followed breadth-first: the root's links in order, then the links
/// of each discovered collection. Each href is fetched at most once. Outages
/// abort the walk; an API rejection on a linked href skips that link. `None`
/// means the root answered with an empty body.
fn walk(context: &ClientContext) -> teamsnap_hypermedia::Result<Option<DiscoverySnapshot>> {
    let Some(root) = context.exchange(&Request::new(Verb::Get, context.base_url()))? else {
        return Ok(None);
    };

    let mut visited = BTreeSet::from([context.base_url().to_owned(), root.href.clone()]);
    let mut pending: VecDeque<Link> = root.links.iter().cloned().collect();
    let mut collections = Vec::new();
    while let Some(link) = pending.pop_front() {
        if !visited.insert(link.href.clone()) {
            continue;
        }
        let collection = match context.exchange(&Request::new(Verb::Get, &link.href)) {
            Ok(Some(collection)) => collection,
            Ok(None) => continue,
            Err(err) if !err.is_outage() => {
                warn!(rel = %link.rel, href = %link.href, error = %err, "Skipping link during discovery");
                continue;
            }
            Err(err) => return Err(err),
        };
        if collection.is_resource_collection() {
            debug!(rel = %link.rel, href = %link.href, "Discovered collection");
            pending.extend(collection.links.iter().cloned());
            collections.push(DiscoveredCollection {
                rel: link.rel,
                href: link.href,
                collection,
            });
        }
    }

    Ok(Some(DiscoverySnapshot { root, collections }))
}
