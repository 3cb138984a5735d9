// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Convenience wrapper pairing a context with its discovered registry.

use serde_json::Value;
use teamsnap_hypermedia::Arguments;
use tracing::info;

use crate::bulk;
use crate::config::ClientConfig;
use crate::context::ClientContext;
use crate::discovery::discover;
use crate::error::Result;
use crate::registrar::ResourceType;
use crate::registry::Registry;
use crate::resource::Resource;

/// A discovered TeamSnap API.
///
/// ```rust,no_run
/// use teamsnap_client::{Arguments, Client, ClientConfig};
///
/// let mut config = ClientConfig::new("http://localhost:3000");
/// config.token = Some("1-classic-dont_tell_the_cops".to_owned());
/// let client = Client::init(&config)?;
///
/// let team = client.find("Team", 1)?;
/// let members = client.call("Member", "search", &Arguments::new().with("team_id", 1))?;
/// println!("{} has {} members", team.href(), members.len());
/// # Ok::<(), teamsnap_client::TeamSnapError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    context: ClientContext,
    registry: Registry,
}

impl Client {
    /// Build an HTTP context from `config` and run discovery.
    pub fn init(config: &ClientConfig) -> Result<Self> {
        info!(url = %config.url, offline = config.offline, "Initializing client");
        Self::with_context(ClientContext::from_config(config)?)
    }

    /// Run discovery against an existing context.
    pub fn with_context(context: ClientContext) -> Result<Self> {
        let registry = discover(&context)?;
        Ok(Self { context, registry })
    }

    /// Re-run discovery, replacing every registered type.
    pub fn reload(&mut self) -> Result<()> {
        self.registry = discover(&self.context)?;
        Ok(())
    }

    /// The context every call runs under.
    pub fn context(&self) -> &ClientContext {
        &self.context
    }

    /// Discovered types.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The discovered type called `name`.
    pub fn resource_type(&self, name: &str) -> Result<&ResourceType> {
        self.registry.resource_type(name)
    }

    /// Invoke `operation` on the type `type_name`. `Root` addresses the root
    /// collection's own operations.
    pub fn call(&self, type_name: &str, operation: &str, args: &Arguments) -> Result<Vec<Resource>> {
        let resource_type = if type_name == self.registry.root().name() {
            self.registry.root()
        } else {
            self.resource_type(type_name)?
        };
        resource_type.call(&self.context, operation, args)
    }

    /// Fetch one `type_name` object by id.
    pub fn find(&self, type_name: &str, id: impl Into<Value>) -> Result<Resource> {
        self.resource_type(type_name)?.find(&self.context, id)
    }

    /// Create a `type_name` object.
    pub fn create(&self, type_name: &str, attributes: &Arguments) -> Result<Option<Resource>> {
        self.resource_type(type_name)?.create(&self.context, attributes)
    }

    /// Update the `type_name` object `id`.
    pub fn update(
        &self,
        type_name: &str,
        id: impl Into<Value>,
        attributes: &Arguments,
    ) -> Result<Option<Resource>> {
        self.resource_type(type_name)?
            .update(&self.context, id, attributes)
    }

    /// Delete the `type_name` object `id`.
    pub fn delete(&self, type_name: &str, id: impl Into<Value>) -> Result<()> {
        self.resource_type(type_name)?.delete(&self.context, id)
    }

    /// See [`bulk::bulk_load`].
    pub fn bulk_load(&self, args: &Arguments) -> Result<Vec<Resource>> {
        bulk::bulk_load(&self.context, &self.registry, args)
    }
}
