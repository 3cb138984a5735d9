// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! The set of resource types produced by discovery.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use teamsnap_hypermedia::naming::type_name_for_rel;
use teamsnap_hypermedia::CollectionDocument;

use crate::error::{Result, TeamSnapError};
use crate::registrar::{register, ResourceType};

/// A resource collection found while following links from the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveredCollection {
    /// The link relation that led here.
    pub rel: String,
    /// The link target that was fetched.
    #[serde(default)]
    pub href: String,
    /// The fetched collection document.
    pub collection: CollectionDocument,
}

/// Everything discovery fetched, in discovery order. This is what the backup
/// cache persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoverySnapshot {
    /// The root collection document.
    pub root: CollectionDocument,
    /// Every resource collection reachable from the root.
    #[serde(default)]
    pub collections: Vec<DiscoveredCollection>,
}

/// Discovered resource types, keyed by name and by `rel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registry {
    root: ResourceType,
    types: BTreeMap<String, ResourceType>,
    #[serde(skip)]
    rels: BTreeMap<String, String>,
}

impl Registry {
    /// A registry with only the root pseudo-type.
    pub fn new(root: ResourceType) -> Self {
        Self {
            root,
            types: BTreeMap::new(),
            rels: BTreeMap::new(),
        }
    }

    /// Register every collection in `snapshot`.
    ///
    /// Pure: the same snapshot always yields the same registry, whether it
    /// came from the API or from the backup cache.
    pub fn from_snapshot(snapshot: &DiscoverySnapshot) -> Result<Self> {
        let mut root = ResourceType::root(&snapshot.root.href);
        register(&mut root, &snapshot.root)?;

        let mut registry = Self::new(root);
        for discovered in &snapshot.collections {
            let href = if discovered.href.is_empty() {
                discovered.collection.href.as_str()
            } else {
                discovered.href.as_str()
            };
            let mut resource_type =
                ResourceType::new(type_name_for_rel(&discovered.rel), &discovered.rel, href);
            register(&mut resource_type, &discovered.collection)?;
            registry.insert(resource_type);
        }
        Ok(registry)
    }

    /// Add or replace a type. Returns the type it replaced, if any.
    pub fn insert(&mut self, resource_type: ResourceType) -> Option<ResourceType> {
        self.rels
            .insert(resource_type.rel().to_owned(), resource_type.name().to_owned());
        self.types
            .insert(resource_type.name().to_owned(), resource_type)
    }

    /// The root pseudo-type.
    pub fn root(&self) -> &ResourceType {
        &self.root
    }

    /// Look up a type by name.
    pub fn get(&self, name: &str) -> Option<&ResourceType> {
        self.types.get(name)
    }

    /// Look up a type by name, failing when it was not discovered.
    pub fn resource_type(&self, name: &str) -> Result<&ResourceType> {
        self.get(name)
            .ok_or_else(|| TeamSnapError::UnknownResourceType(name.to_owned()))
    }

    /// Look up a type by the `rel` it was discovered through.
    pub fn by_rel(&self, rel: &str) -> Option<&ResourceType> {
        self.rels.get(rel).and_then(|name| self.types.get(name))
    }

    /// Every discovered type, sorted by name.
    pub fn types(&self) -> impl Iterator<Item = &ResourceType> {
        self.types.values()
    }

    /// Number of discovered types (the root pseudo-type excluded).
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no resource type was discovered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
