// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Bulk load: every object of several types under one team, in one request.

use serde_json::Value;
use teamsnap_hypermedia::naming::type_name_for_discriminator;
use teamsnap_hypermedia::{Arguments, Request, Verb};
use tracing::debug;

use crate::context::ClientContext;
use crate::error::{Result, TeamSnapError};
use crate::registry::Registry;
use crate::resource::{materialize, Resource};

/// Name of the root query serving bulk loads.
pub const BULK_LOAD: &str = "bulk_load";

/// Scoping argument every bulk load must carry.
pub const SCOPE_ARGUMENT: &str = "team_id";

/// Load every object of the requested `types` scoped to `team_id`.
///
/// `args` must carry `team_id` and normally `types`, either a comma-separated
/// string (`"team,member"`) or an array of names. Results are ordered by
/// type, following the order of `types`, keeping the API's order within a
/// type; items of unlisted types come last. Uses the root `bulk_load` query
/// when one was discovered, else `GET <root>/bulk_load`.
///
/// # Errors
///
/// [`TeamSnapError::Configuration`] when `team_id` is missing, before any
/// request is sent.
pub fn bulk_load(
    context: &ClientContext,
    registry: &Registry,
    args: &Arguments,
) -> Result<Vec<Resource>> {
    if !args.has_value(SCOPE_ARGUMENT) {
        return Err(TeamSnapError::Configuration(format!(
            "You must include a {SCOPE_ARGUMENT} parameter"
        )));
    }

    let mut resources = match registry.root().operation(BULK_LOAD) {
        Some(operation) => operation.call(context, args)?,
        None => {
            let href = context.join(BULK_LOAD)?;
            let document = context.send(&Request::with_arguments(Verb::Get, href, args))?;
            materialize(context, document.as_ref(), None)
        }
    };

    let order = requested_types(args.get("types"));
    resources.sort_by_key(|resource| {
        order
            .iter()
            .position(|name| resource.is_a(name))
            .unwrap_or(order.len())
    });
    debug!(count = resources.len(), types = ?order, "Bulk load complete");
    Ok(resources)
}

/// `"team, member"` or `["team", "member"]` → `["Team", "Member"]`.
fn requested_types(types: Option<&Value>) -> Vec<String> {
    let names: Vec<&str> = match types {
        Some(Value::String(list)) => list.split(',').collect(),
        Some(Value::Array(list)) => list.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    };
    names
        .into_iter()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(type_name_for_discriminator)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_requested_types() {
        assert_eq!(requested_types(Some(&json!("team, member"))), ["Team", "Member"]);
        assert_eq!(
            requested_types(Some(&json!(["division_location", "event"]))),
            ["DivisionLocation", "Event"]
        );
        assert!(requested_types(None).is_empty());
        assert!(requested_types(Some(&json!(""))).is_empty());
    }
}
