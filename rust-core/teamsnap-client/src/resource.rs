// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Materialized items and their relation accessors.
//!
//! [`materialize`] turns the items of a collection document into
//! [`Resource`]s. Each item link becomes a [`Relation`] that remembers its
//! href, its declared cardinality, and the context it came from; following it
//! performs a fresh read.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use teamsnap_hypermedia::naming::{is_singular, type_name_for_discriminator, type_name_for_rel};
use teamsnap_hypermedia::{CollectionDocument, Item, Link, Request, Verb};

use crate::context::ClientContext;
use crate::error::{Result, TeamSnapError};

// ---------------------------------------------------------------------------
// Cardinality / Related
// ---------------------------------------------------------------------------

/// Whether a relation names one object or a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// `member.team`: one object or nothing.
    One,
    /// `team.members`: an ordered, possibly empty list.
    Many,
}

impl Cardinality {
    /// Cardinality declared by a link's `rel`: singular rels name one object.
    pub fn of_rel(rel: &str) -> Self {
        if is_singular(rel) {
            Cardinality::One
        } else {
            Cardinality::Many
        }
    }
}

/// Result of following a relation.
#[derive(Debug, Clone)]
pub enum Related {
    /// A singular relation: the target, or `None` when it has no data.
    One(Option<Resource>),
    /// A plural relation: every target, possibly none.
    Many(Vec<Resource>),
}

impl Related {
    /// Flatten into a list (a missing singular target becomes empty).
    pub fn into_vec(self) -> Vec<Resource> {
        match self {
            Related::One(one) => one.into_iter().collect(),
            Related::Many(many) => many,
        }
    }

    /// Cardinality this result was produced under.
    pub fn cardinality(&self) -> Cardinality {
        match self {
            Related::One(_) => Cardinality::One,
            Related::Many(_) => Cardinality::Many,
        }
    }
}

// ---------------------------------------------------------------------------
// Relation
// ---------------------------------------------------------------------------

/// A deferred read of a linked collection or object.
#[derive(Clone, Serialize)]
pub struct Relation {
    rel: String,
    href: String,
    cardinality: Cardinality,
    #[serde(skip)]
    context: ClientContext,
}

impl Relation {
    /// Build an accessor for `link` under `context`.
    pub fn new(link: &Link, context: &ClientContext) -> Self {
        Self {
            rel: link.rel.clone(),
            href: link.href.clone(),
            cardinality: Cardinality::of_rel(&link.rel),
            context: context.clone(),
        }
    }

    /// Relation name.
    pub fn rel(&self) -> &str {
        &self.rel
    }

    /// Target URL.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Declared cardinality.
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Read the target and materialize it according to the cardinality.
    pub fn fetch(&self) -> Result<Related> {
        let document = self.context.send(&Request::new(Verb::Get, &self.href))?;
        let fallback = type_name_for_rel(&self.rel);
        let resources = materialize(&self.context, document.as_ref(), Some(&fallback));
        Ok(match self.cardinality {
            Cardinality::One => Related::One(resources.into_iter().next()),
            Cardinality::Many => Related::Many(resources),
        })
    }
}

impl fmt::Debug for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relation")
            .field("rel", &self.rel)
            .field("href", &self.href)
            .field("cardinality", &self.cardinality)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Resource
// ---------------------------------------------------------------------------

/// One materialized item of a discovered resource type.
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    #[serde(rename = "type")]
    type_name: String,
    href: String,
    attributes: Map<String, Value>,
    #[serde(rename = "links")]
    relations: Vec<Relation>,
}

impl Resource {
    /// Name of the resource type this object belongs to.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns `true` if this object is of type `type_name`.
    pub fn is_a(&self, type_name: &str) -> bool {
        self.type_name == type_name
    }

    /// Canonical URL of this object.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Value of the attribute `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Integer `id` attribute, when present.
    pub fn id(&self) -> Option<i64> {
        self.get("id").and_then(Value::as_i64)
    }

    /// All scalar attributes.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Relation accessors in link order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// The relation called `rel`.
    pub fn relation(&self, rel: &str) -> Option<&Relation> {
        self.relations.iter().find(|relation| relation.rel == rel)
    }

    /// Follow the relation called `rel`.
    ///
    /// # Errors
    ///
    /// [`TeamSnapError::UnknownOperation`] if the item has no such link, or
    /// any error from the read.
    pub fn related(&self, rel: &str) -> Result<Related> {
        self.relation(rel)
            .ok_or_else(|| TeamSnapError::UnknownOperation {
                type_name: self.type_name.clone(),
                operation: rel.to_owned(),
            })?
            .fetch()
    }
}

// ---------------------------------------------------------------------------
// Materializer
// ---------------------------------------------------------------------------

/// Materialize every item of `document`.
///
/// An item's type is its `type` discriminator when present, else
/// `fallback_type` (the collection the request addressed), else the
/// collection segment of its href. `None` (an empty body) yields no objects.
pub fn materialize(
    context: &ClientContext,
    document: Option<&CollectionDocument>,
    fallback_type: Option<&str>,
) -> Vec<Resource> {
    document
        .map(|document| {
            document
                .items
                .iter()
                .map(|item| materialize_item(context, item, fallback_type))
                .collect()
        })
        .unwrap_or_default()
}

fn materialize_item(context: &ClientContext, item: &Item, fallback_type: Option<&str>) -> Resource {
    let type_name = item
        .type_discriminator()
        .map(type_name_for_discriminator)
        .or_else(|| fallback_type.map(str::to_owned))
        .or_else(|| type_from_href(&item.href))
        .unwrap_or_else(|| "Resource".to_owned());

    Resource {
        type_name,
        href: item.href.clone(),
        attributes: item
            .data
            .iter()
            .map(|field| (field.name.clone(), field.value.clone()))
            .collect(),
        relations: item
            .links
            .iter()
            .map(|link| Relation::new(link, context))
            .collect(),
    }
}

/// `http://host/members/1` → `Member`.
fn type_from_href(href: &str) -> Option<String> {
    let path = href.split(['?', '#']).next()?;
    let mut segments = path.trim_end_matches('/').rsplit('/');
    let last = segments.next()?;
    let collection = if last.chars().all(|c| c.is_ascii_digit()) {
        segments.next()?
    } else {
        last
    };
    if collection.is_empty() || collection.contains(':') {
        None
    } else {
        Some(type_name_for_rel(collection))
    }
}
