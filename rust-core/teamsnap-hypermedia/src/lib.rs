// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! # teamsnap-hypermedia
//!
//! The protocol layer of the TeamSnap client: the Collection+JSON document
//! model, the type-naming convention used by discovery, named operation
//! arguments, the [`Transport`] port, and response validation.
//!
//! This crate performs no I/O. It defines *what* a transport must do; the
//! `teamsnap-client` crate supplies an HTTP implementation and
//! [`memory::InMemoryTransport`] serves tests.
//!
//! ## Modules
//!
//! - [`document`]: Collection, item, link, descriptor, template, error.
//! - [`naming`]: `rel` → type name, discriminator → type name, cardinality.
//! - [`arguments`]: Named argument sets and their wire encodings.
//! - [`transport`]: `Verb`, `Request`, `Response`, the `Transport` trait.
//! - [`memory`]: Canned-response transport for tests and demos.
//! - [`validator`]: Status/error-payload classification.
//! - [`error`]: `HypermediaError` and the crate `Result` alias.

pub mod arguments;
pub mod document;
pub mod error;
pub mod memory;
pub mod naming;
pub mod transport;
pub mod validator;

pub use arguments::Arguments;
pub use document::{
    CollectionDocument, CollectionEnvelope, DataField, EndpointDescriptor, ErrorObject, Item, Link,
    Template,
};
pub use error::{HypermediaError, Result};
pub use memory::InMemoryTransport;
pub use transport::{Payload, Request, Response, Transport, TransportError, Verb};
