// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Collection+JSON document model.
//!
//! Only the subset the discovery protocol needs is modelled: items, links,
//! queries, commands, the write template, and the error object. Unknown fields
//! are ignored on input. Empty collections are omitted on output so a document
//! written to the backup cache reads back to the same value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// The outer `{ "collection": { ... } }` wrapper every response carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionEnvelope {
    /// The wrapped collection document.
    pub collection: CollectionDocument,
}

impl CollectionEnvelope {
    /// Parse a response body into an envelope.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HypermediaError::Decode`] when `body` is not a
    /// Collection+JSON document.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

// ---------------------------------------------------------------------------
// CollectionDocument
// ---------------------------------------------------------------------------

/// One hypermedia collection: its items, outgoing links, and the operations
/// it advertises.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionDocument {
    /// Collection+JSON version string, when the server sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Canonical URL of this collection.
    #[serde(default)]
    pub href: String,
    /// Items in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    /// Named links to related collections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    /// Read operations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub queries: Vec<EndpointDescriptor>,
    /// Mutating operations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<EndpointDescriptor>,
    /// Writable attribute schema for create/update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<Template>,
    /// Business error reported by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,
}

impl CollectionDocument {
    /// Returns `true` if this document describes a resource collection, i.e.
    /// it advertises a write template or at least one query or command.
    pub fn is_resource_collection(&self) -> bool {
        self.template.is_some() || !self.queries.is_empty() || !self.commands.is_empty()
    }

    /// Writable attribute names from the template, excluding the `type`
    /// discriminator, in declared order.
    pub fn attribute_names(&self) -> Vec<String> {
        self.template
            .as_ref()
            .map(|template| {
                template
                    .data
                    .iter()
                    .filter(|field| field.name != "type")
                    .map(|field| field.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Look up a query by `rel`.
    pub fn query(&self, rel: &str) -> Option<&EndpointDescriptor> {
        self.queries.iter().find(|query| query.rel == rel)
    }

    /// Wrap this document in its `{ "collection": ... }` envelope.
    pub fn into_envelope(self) -> CollectionEnvelope {
        CollectionEnvelope { collection: self }
    }
}

// ---------------------------------------------------------------------------
// Links, items, descriptors
// ---------------------------------------------------------------------------

/// A named relation to another URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Relation name (`"team"`, `"members"`, `"self"`).
    pub rel: String,
    /// Target URL.
    pub href: String,
    /// Human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// A `{ name, value }` pair inside an item or template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataField {
    /// Attribute or argument name.
    pub name: String,
    /// Attribute value; `null` in templates and descriptors.
    #[serde(default)]
    pub value: Value,
    /// Human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// One item record: scalar attributes plus its own relation links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Canonical resource URL.
    #[serde(default)]
    pub href: String,
    /// Attribute list in server order.
    #[serde(default)]
    pub data: Vec<DataField>,
    /// Relation links local to this item.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Item {
    /// Value of the attribute called `name`, if present.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.data
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    /// The `type` discriminator, when the item carries one as a string.
    pub fn type_discriminator(&self) -> Option<&str> {
        self.value("type").and_then(Value::as_str)
    }
}

/// Metadata for one callable operation: name, target, accepted arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Operation name.
    pub rel: String,
    /// Target URL.
    pub href: String,
    /// Human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Accepted arguments in declared order.
    #[serde(default)]
    pub data: Vec<DataField>,
}

impl EndpointDescriptor {
    /// Accepted argument names in declared order.
    pub fn argument_names(&self) -> Vec<String> {
        self.data.iter().map(|field| field.name.clone()).collect()
    }
}

/// Write schema for create/update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Writable fields in declared order.
    #[serde(default)]
    pub data: Vec<DataField>,
}

/// Collection+JSON `error` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    /// Short error title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Message text, passed through to callers verbatim.
    #[serde(default)]
    pub message: String,
    /// Application error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
