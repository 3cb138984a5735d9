// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Resource types and endpoint registration.
//!
//! A [`ResourceType`] is built from one discovered collection document. Its
//! queries become GET operations and its commands POST operations; the write
//! template supplies the attribute names accepted by `create` and `update`.
//! [`register`] may be run again on the same type to rebuild its operations.

use std::collections::BTreeMap;

use serde::Serialize;
use teamsnap_hypermedia::{Arguments, CollectionDocument, Request, Verb};
use tracing::debug;

use crate::context::ClientContext;
use crate::error::{Result, TeamSnapError};
use crate::operation::Operation;
use crate::resource::{materialize, Resource};

/// Name of the pseudo-type holding the root collection's operations.
pub const ROOT_TYPE: &str = "Root";

/// A resource type discovered at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceType {
    name: String,
    rel: String,
    href: String,
    attribute_names: Vec<String>,
    operations: BTreeMap<String, Operation>,
    searchable: bool,
}

impl ResourceType {
    /// An empty type called `name`, reached through `rel` at `href`.
    pub fn new(name: impl Into<String>, rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rel: rel.into(),
            href: href.into(),
            attribute_names: Vec::new(),
            operations: BTreeMap::new(),
            searchable: false,
        }
    }

    /// The root pseudo-type. Its operations (such as `bulk_load`) return
    /// mixed items, so they carry no fallback type.
    pub fn root(href: impl Into<String>) -> Self {
        Self::new(ROOT_TYPE, "root", href)
    }

    /// Type name (`Team`, `DivisionLocation`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The link relation this type was discovered through.
    pub fn rel(&self) -> &str {
        &self.rel
    }

    /// Canonical collection URL.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Writable attribute names, without `type`.
    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    /// Whether a `search` query was registered, enabling [`ResourceType::find`].
    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    /// Every registered operation, by name.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.values()
    }

    /// Look up an operation by name.
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }

    fn is_root(&self) -> bool {
        self.name == ROOT_TYPE
    }

    /// Invoke the operation called `name`.
    ///
    /// # Errors
    ///
    /// [`TeamSnapError::UnknownOperation`] for an unregistered name, plus
    /// anything [`Operation::call`] returns.
    pub fn call(&self, context: &ClientContext, name: &str, args: &Arguments) -> Result<Vec<Resource>> {
        self.operation(name)
            .ok_or_else(|| TeamSnapError::UnknownOperation {
                type_name: self.name.clone(),
                operation: name.to_owned(),
            })?
            .call(context, args)
    }

    /// Fetch one object by id through the `search` query.
    ///
    /// # Errors
    ///
    /// [`TeamSnapError::NotFound`] when nothing matches, or
    /// [`TeamSnapError::UnknownOperation`] if the type is not searchable.
    pub fn find(&self, context: &ClientContext, id: impl Into<serde_json::Value>) -> Result<Resource> {
        let id = id.into();
        if !self.searchable {
            return Err(TeamSnapError::UnknownOperation {
                type_name: self.name.clone(),
                operation: "search".to_owned(),
            });
        }
        self.call(context, "search", &Arguments::new().with("id", id.clone()))?
            .into_iter()
            .next()
            .ok_or_else(|| TeamSnapError::NotFound {
                type_name: self.name.clone(),
                id: value_text(&id),
            })
    }

    /// POST a new object built from `attributes`.
    ///
    /// Returns the created object when the API echoes it back.
    pub fn create(&self, context: &ClientContext, attributes: &Arguments) -> Result<Option<Resource>> {
        self.validate_attributes(attributes)?;
        let request = Request::with_body(Verb::Post, &self.href, attributes.to_template());
        self.write(context, &request)
    }

    /// PATCH the object `id` with `attributes`.
    pub fn update(
        &self,
        context: &ClientContext,
        id: impl Into<serde_json::Value>,
        attributes: &Arguments,
    ) -> Result<Option<Resource>> {
        self.validate_attributes(attributes)?;
        let href = self.member_href(&id.into());
        let request = Request::with_body(Verb::Patch, href, attributes.to_template());
        self.write(context, &request)
    }

    /// DELETE the object `id`.
    pub fn delete(&self, context: &ClientContext, id: impl Into<serde_json::Value>) -> Result<()> {
        let href = self.member_href(&id.into());
        context.send(&Request::new(Verb::Delete, href))?;
        Ok(())
    }

    fn write(&self, context: &ClientContext, request: &Request) -> Result<Option<Resource>> {
        let document = context.send(request)?;
        Ok(materialize(context, document.as_ref(), Some(&self.name))
            .into_iter()
            .next())
    }

    fn validate_attributes(&self, attributes: &Arguments) -> Result<()> {
        let rejected = attributes.unknown_names(&self.attribute_names);
        if rejected.is_empty() {
            return Ok(());
        }
        Err(TeamSnapError::InvalidArgument {
            valid: self.attribute_names.clone(),
            rejected: rejected.into_iter().map(str::to_owned).collect(),
        })
    }

    fn member_href(&self, id: &serde_json::Value) -> String {
        format!("{}/{}", self.href.trim_end_matches('/'), value_text(id))
    }
}

/// Rebuild `resource_type` from `document`.
///
/// Replaces the attribute names and every operation; `searchable` is set when
/// a GET `search` operation ends up registered.
///
/// # Errors
///
/// [`TeamSnapError::Configuration`] if two endpoints share a name.
pub fn register(resource_type: &mut ResourceType, document: &CollectionDocument) -> Result<()> {
    let fallback = (!resource_type.is_root()).then(|| resource_type.name.clone());
    let endpoints = document
        .queries
        .iter()
        .map(|query| (query, Verb::Get))
        .chain(document.commands.iter().map(|command| (command, Verb::Post)));

    let mut operations = BTreeMap::new();
    for (descriptor, verb) in endpoints {
        let operation = Operation::from_descriptor(descriptor, verb, fallback.as_deref());
        if operations.insert(descriptor.rel.clone(), operation).is_some() {
            return Err(TeamSnapError::Configuration(format!(
                "{} declares the operation '{}' more than once",
                resource_type.name, descriptor.rel
            )));
        }
    }

    resource_type.searchable = operations
        .get("search")
        .is_some_and(|search: &Operation| search.verb() == Verb::Get);
    resource_type.attribute_names = document.attribute_names();
    resource_type.operations = operations;
    if !document.href.is_empty() {
        resource_type.href.clone_from(&document.href);
    }

    debug!(
        resource_type = %resource_type.name,
        operations = resource_type.operations.len(),
        searchable = resource_type.searchable,
        "Registered resource type"
    );
    Ok(())
}

/// Text form of an id: strings raw, everything else as JSON.
fn value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use teamsnap_hypermedia::{CollectionEnvelope, InMemoryTransport};

    const TEAMS: &str = r#"{"collection": {
        "href": "http://localhost:3000/teams",
        "template": {"data": [{"name": "name"}, {"name": "sport_id"}, {"name": "type", "value": "team"}]},
        "queries": [{"rel": "search", "href": "http://localhost:3000/teams/search",
                     "data": [{"name": "id"}, {"name": "team_id"}, {"name": "user_id"}, {"name": "division_id"}]}],
        "commands": [{"rel": "invite", "href": "http://localhost:3000/teams/invite",
                      "data": [{"name": "team_id"}, {"name": "member_id"}]}]
    }}"#;

    fn teams() -> ResourceType {
        let document = CollectionEnvelope::from_json(TEAMS).unwrap().collection;
        let mut team = ResourceType::new("Team", "teams", "http://localhost:3000/teams");
        register(&mut team, &document).unwrap();
        team
    }

    fn context(transport: &InMemoryTransport) -> ClientContext {
        ClientContext::new("http://localhost:3000", Arc::new(transport.clone())).unwrap()
    }

    #[test]
    fn test_register_builds_operations() {
        let team = teams();
        assert!(team.is_searchable());
        assert_eq!(team.attribute_names(), ["name", "sport_id"]);
        assert_eq!(team.operation("search").unwrap().verb(), Verb::Get);
        assert_eq!(team.operation("invite").unwrap().verb(), Verb::Post);
        assert_eq!(team.operations().count(), 2);
    }

    #[test]
    fn test_register_is_idempotent() {
        let document = CollectionEnvelope::from_json(TEAMS).unwrap().collection;
        let mut team = teams();
        register(&mut team, &document).unwrap();
        assert_eq!(team, teams());
    }

    #[test]
    fn test_duplicate_operation_is_configuration_error() {
        let mut document = CollectionEnvelope::from_json(TEAMS).unwrap().collection;
        let duplicate = document.queries[0].clone();
        document.commands.push(duplicate);
        let mut team = ResourceType::new("Team", "teams", "http://localhost:3000/teams");
        let err = register(&mut team, &document).unwrap_err();
        assert!(matches!(err, TeamSnapError::Configuration(_)));
    }

    #[test]
    fn test_unknown_operation() {
        let transport = InMemoryTransport::new();
        let err = teams()
            .call(&context(&transport), "destroy_all", &Arguments::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "Team has no operation named 'destroy_all'");
    }

    #[test]
    fn test_find_miss() {
        let transport = InMemoryTransport::new();
        transport.respond_with(
            Verb::Get,
            "http://localhost:3000/teams/search",
            &Arguments::new().with("id", 0),
            200,
            r#"{"collection": {"items": []}}"#,
        );
        let err = teams().find(&context(&transport), 0).unwrap_err();
        assert_eq!(err.to_string(), "Could not find a Team with an id of '0'.");
    }

    #[test]
    fn test_create_sends_template_body() {
        let transport = InMemoryTransport::new();
        let attributes = Arguments::new().with("name", "Red Sox");
        transport.respond_to_body(
            Verb::Post,
            "http://localhost:3000/teams",
            &attributes.to_template(),
            201,
            r#"{"collection": {"items": [{"href": "http://localhost:3000/teams/9", "data": [{"name": "id", "value": 9}, {"name": "name", "value": "Red Sox"}]}]}}"#,
        );
        let created = teams()
            .create(&context(&transport), &attributes)
            .unwrap()
            .unwrap();
        assert_eq!(created.id(), Some(9));
        assert!(created.is_a("Team"));
    }

    #[test]
    fn test_create_rejects_unknown_attribute() {
        let transport = InMemoryTransport::new();
        let err = teams()
            .create(&context(&transport), &Arguments::new().with("colour", "red"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Invalid argument(s). Valid argument(s) are ["name", "sport_id"]"#
        );
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_update_and_delete_address_member_href() {
        let transport = InMemoryTransport::new();
        let attributes = Arguments::new().with("name", "Blue Sox");
        transport.respond_to_body(
            Verb::Patch,
            "http://localhost:3000/teams/9",
            &attributes.to_template(),
            200,
            r#"{"collection": {"items": [{"href": "http://localhost:3000/teams/9", "data": [{"name": "name", "value": "Blue Sox"}]}]}}"#,
        );
        transport.respond(Verb::Delete, "http://localhost:3000/teams/9", 204, "");

        let context = context(&transport);
        let updated = teams().update(&context, 9, &attributes).unwrap().unwrap();
        assert_eq!(updated.get("name"), Some(&serde_json::Value::from("Blue Sox")));
        teams().delete(&context, 9).unwrap();
        assert_eq!(transport.request_count(), 2);
    }

    #[test]
    fn test_root_operations_have_no_fallback_type() {
        let document = CollectionEnvelope::from_json(
            r#"{"collection": {"queries": [{"rel": "bulk_load", "href": "http://localhost:3000/bulk_load", "data": [{"name": "team_id"}, {"name": "types"}]}]}}"#,
        )
        .unwrap()
        .collection;
        let mut root = ResourceType::root("http://localhost:3000/");
        register(&mut root, &document).unwrap();
        assert!(!root.is_searchable());
        assert_eq!(
            serde_json::to_value(root.operation("bulk_load").unwrap()).unwrap()["fallback_type"],
            serde_json::Value::Null
        );
    }
}
