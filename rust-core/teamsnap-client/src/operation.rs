// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Generated operations.
//!
//! Every advertised query becomes a GET [`Operation`] and every command a POST
//! one. An operation owns its href and declared argument names; calling it
//! validates the supplied names, sends one request, and materializes the
//! response.

use serde::Serialize;
use teamsnap_hypermedia::{Arguments, EndpointDescriptor, Request, Verb};
use tracing::debug;

use crate::context::ClientContext;
use crate::error::{Result, TeamSnapError};
use crate::resource::{materialize, Resource};

/// A named, runtime-registered call against one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    name: String,
    href: String,
    verb: Verb,
    arguments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback_type: Option<String>,
}

impl Operation {
    /// Build an operation for `descriptor`.
    ///
    /// `fallback_type` names the type of returned items that carry no `type`
    /// discriminator; `None` lets the materializer derive it from each href.
    pub fn from_descriptor(
        descriptor: &EndpointDescriptor,
        verb: Verb,
        fallback_type: Option<&str>,
    ) -> Self {
        Self {
            name: descriptor.rel.clone(),
            href: descriptor.href.clone(),
            verb,
            arguments: descriptor.argument_names(),
            fallback_type: fallback_type.map(str::to_owned),
        }
    }

    /// Operation name (the descriptor's `rel`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Endpoint URL.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// HTTP verb: GET for queries, POST for commands.
    pub fn verb(&self) -> Verb {
        self.verb
    }

    /// Accepted argument names in declared order.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Reject any supplied name this operation does not declare.
    ///
    /// # Errors
    ///
    /// [`TeamSnapError::InvalidArgument`] listing every declared name.
    pub fn validate(&self, args: &Arguments) -> Result<()> {
        let rejected = args.unknown_names(&self.arguments);
        if rejected.is_empty() {
            return Ok(());
        }
        Err(TeamSnapError::InvalidArgument {
            valid: self.arguments.clone(),
            rejected: rejected.into_iter().map(str::to_owned).collect(),
        })
    }

    /// Validate `args`, send the request, and materialize the response.
    ///
    /// Returns every item in response order; an empty body or an empty
    /// collection yields an empty list.
    pub fn call(&self, context: &ClientContext, args: &Arguments) -> Result<Vec<Resource>> {
        self.validate(args)?;
        debug!(operation = %self.name, verb = %self.verb, args = args.len(), "Calling operation");

        let request = Request::with_arguments(self.verb, &self.href, args);
        let document = context.send(&request)?;
        Ok(materialize(
            context,
            document.as_ref(),
            self.fallback_type.as_deref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Arc;
    use teamsnap_hypermedia::{DataField, InMemoryTransport};

    fn search() -> Operation {
        let descriptor = EndpointDescriptor {
            rel: "search".to_owned(),
            href: "http://localhost:3000/teams/search".to_owned(),
            prompt: None,
            data: ["id", "team_id", "user_id", "division_id"]
                .into_iter()
                .map(|name| DataField {
                    name: name.to_owned(),
                    value: serde_json::Value::Null,
                    prompt: None,
                })
                .collect(),
        };
        Operation::from_descriptor(&descriptor, Verb::Get, Some("Team"))
    }

    #[test]
    fn test_from_descriptor() {
        let op = search();
        assert_eq!(op.name(), "search");
        assert_eq!(op.verb(), Verb::Get);
        assert_eq!(op.arguments(), ["id", "team_id", "user_id", "division_id"]);
    }

    #[test]
    fn test_invalid_argument_is_local() {
        let transport = InMemoryTransport::new();
        let context =
            ClientContext::new("http://localhost:3000", Arc::new(transport.clone())).unwrap();
        let err = search()
            .call(&context, &Arguments::new().with("foo", "bar"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Invalid argument(s). Valid argument(s) are ["id", "team_id", "user_id", "division_id"]"#
        );
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_call_materializes_with_fallback_type() {
        let transport = InMemoryTransport::new();
        let args = Arguments::new().with("id", 1);
        transport.respond_with(
            Verb::Get,
            "http://localhost:3000/teams/search",
            &args,
            200,
            r#"{"collection": {"items": [{"href": "http://localhost:3000/t/1", "data": [{"name": "id", "value": 1}]}]}}"#,
        );
        let context =
            ClientContext::new("http://localhost:3000", Arc::new(transport.clone())).unwrap();
        let teams = search().call(&context, &args).unwrap();
        assert_eq!(teams.len(), 1);
        assert!(teams[0].is_a("Team"));
    }

    proptest! {
        #[test]
        fn prop_undeclared_names_are_rejected(name in "[a-z_]{1,12}") {
            let op = search();
            let result = op.validate(&Arguments::new().with(name.clone(), 1));
            if op.arguments().contains(&name) {
                prop_assert!(result.is_ok());
            } else {
                match result {
                    Err(TeamSnapError::InvalidArgument { valid, rejected }) => {
                        prop_assert_eq!(valid, op.arguments().to_vec());
                        prop_assert_eq!(rejected, vec![name]);
                    }
                    other => prop_assert!(false, "expected InvalidArgument, got {:?}", other),
                }
            }
        }
    }
}
