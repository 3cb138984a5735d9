// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//! Canned TeamSnap-shaped API shared by the integration suites.
//!
//! One team (id 1) with ten members, an empty event list, and no division
//! location; team 0 does not exist.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use teamsnap_client::{Arguments, ClientContext, InMemoryTransport, Verb};

pub const BASE: &str = "http://localhost:3000/";
pub const MEMBER_COUNT: i64 = 10;

pub fn url(path: &str) -> String {
    format!("{BASE}{path}")
}

pub fn fields(names: &[&str]) -> Value {
    Value::Array(names.iter().map(|name| json!({ "name": name })).collect())
}

pub fn query(rel: &str, path: &str, args: &[&str]) -> Value {
    json!({ "rel": rel, "href": url(path), "data": fields(args) })
}

pub fn collection(body: Value) -> String {
    json!({ "collection": body }).to_string()
}

pub fn items(items: Vec<Value>) -> String {
    collection(json!({ "version": "3.0.0", "items": items }))
}

pub fn root_document() -> String {
    collection(json!({
        "version": "3.0.0",
        "href": BASE,
        "links": [
            { "rel": "root", "href": BASE },
            { "rel": "me", "href": url("me") },
            { "rel": "teams", "href": url("teams") },
            { "rel": "members", "href": url("members") },
            { "rel": "events", "href": url("events") },
            { "rel": "assignments", "href": url("assignments") },
            { "rel": "availabilities", "href": url("availabilities") },
            { "rel": "division_locations", "href": url("division_locations") }
        ],
        "queries": [query("bulk_load", "bulk_load", &["team_id", "types"])]
    }))
}

pub fn team_item(id: i64) -> Value {
    json!({
        "href": url(&format!("teams/{id}")),
        "data": [
            { "name": "id", "value": id },
            { "name": "name", "value": "Red Sox" },
            { "name": "type", "value": "team" }
        ],
        "links": [
            { "rel": "members", "href": url(&format!("members/search?team_id={id}")) },
            { "rel": "events", "href": url(&format!("events/search?team_id={id}")) },
            { "rel": "division_location", "href": url(&format!("division_locations/search?team_id={id}")) }
        ]
    })
}

pub fn member_item(id: i64, team_id: i64) -> Value {
    json!({
        "href": url(&format!("members/{id}")),
        "data": [
            { "name": "id", "value": id },
            { "name": "first_name", "value": format!("Player {id}") },
            { "name": "team_id", "value": team_id },
            { "name": "type", "value": "member" }
        ],
        "links": [
            { "rel": "team", "href": url(&format!("teams/{team_id}")) },
            { "rel": "assignments", "href": url(&format!("assignments/search?member_id={id}")) }
        ]
    })
}

pub fn members(team_id: i64) -> Vec<Value> {
    (1..=MEMBER_COUNT).map(|id| member_item(id, team_id)).collect()
}

/// Register every route of the fixture API on `transport`.
pub fn mount(transport: &InMemoryTransport) {
    transport.respond(Verb::Get, BASE, 200, root_document());
    transport.respond(
        Verb::Get,
        &url("me"),
        200,
        items(vec![json!({ "href": url("users/1"), "data": [{ "name": "id", "value": 1 }] })]),
    );

    transport.respond(
        Verb::Get,
        &url("teams"),
        200,
        collection(json!({
            "href": url("teams"),
            "template": { "data": fields(&["name", "sport_id", "type"]) },
            "queries": [query("search", "teams/search", &["id", "team_id", "user_id", "division_id"])]
        })),
    );
    transport.respond(
        Verb::Get,
        &url("members"),
        200,
        collection(json!({
            "href": url("members"),
            "template": { "data": fields(&["first_name", "last_name", "team_id", "type"]) },
            "queries": [query("search", "members/search", &["id", "team_id"])],
            "commands": [query("disable_member", "members/disable_member", &["member_id"])]
        })),
    );
    transport.respond(
        Verb::Get,
        &url("events"),
        200,
        collection(json!({
            "href": url("events"),
            "queries": [query("search", "events/search", &["id", "team_id"])]
        })),
    );
    transport.respond(
        Verb::Get,
        &url("assignments"),
        200,
        collection(json!({
            "href": url("assignments"),
            "queries": [query("search", "assignments/search", &["id", "event_id", "member_id", "team_id"])]
        })),
    );
    transport.respond(
        Verb::Get,
        &url("availabilities"),
        200,
        collection(json!({
            "href": url("availabilities"),
            "queries": [query("search", "availabilities/search", &["id", "event_id", "member_id"])]
        })),
    );
    transport.respond(
        Verb::Get,
        &url("division_locations"),
        200,
        collection(json!({
            "href": url("division_locations"),
            "template": { "data": fields(&["name"]) },
            "queries": [query("search", "division_locations/search", &["id", "division_id"])]
        })),
    );

    // Team lookups.
    transport.respond_with(
        Verb::Get,
        &url("teams/search"),
        &Arguments::new().with("id", 1),
        200,
        items(vec![team_item(1)]),
    );
    transport.respond_with(
        Verb::Get,
        &url("teams/search"),
        &Arguments::new().with("id", 0),
        200,
        items(vec![]),
    );
    transport.respond_with(
        Verb::Get,
        &url("teams/search"),
        &Arguments::new().with("team_id", 0),
        200,
        items(vec![]),
    );
    transport.respond(Verb::Get, &url("teams/1"), 200, items(vec![team_item(1)]));

    // Relations of team 1.
    transport.respond(
        Verb::Get,
        &url("members/search?team_id=1"),
        200,
        items(members(1)),
    );
    transport.respond(Verb::Get, &url("events/search?team_id=1"), 200, items(vec![]));
    transport.respond(
        Verb::Get,
        &url("division_locations/search?team_id=1"),
        200,
        items(vec![]),
    );

    // Commands.
    transport.respond_with(
        Verb::Post,
        &url("members/disable_member"),
        &Arguments::new().with("member_id", 1),
        200,
        items(vec![member_item(1, 1)]),
    );
    transport.respond(
        Verb::Post,
        &url("members/disable_member"),
        422,
        collection(json!({
            "error": { "title": "Unprocessable Entity", "message": "You must provide the member_id." }
        })),
    );

    // Bulk load. The API interleaves types; the client orders them.
    let mut mixed = members(1);
    mixed.insert(4, team_item(1));
    transport.respond_with(
        Verb::Get,
        &url("bulk_load"),
        &Arguments::new().with("team_id", 1).with("types", "team,member"),
        200,
        items(mixed),
    );
    transport.respond_with(
        Verb::Get,
        &url("bulk_load"),
        &Arguments::new().with("team_id", 0).with("types", "team,member"),
        200,
        items(vec![]),
    );
}

/// A transport serving the fixture API.
pub fn transport() -> InMemoryTransport {
    let transport = InMemoryTransport::new();
    mount(&transport);
    transport
}

/// A context over `transport` with the backup cache disabled.
pub fn context(transport: &InMemoryTransport) -> ClientContext {
    ClientContext::new(BASE, Arc::new(transport.clone())).expect("fixture URL is valid")
}
