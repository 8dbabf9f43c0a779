//! Resolution of Java API type signatures into a cross-referenced type graph.
//!
//! Ingestion fills a [`javadjust_api::Api`] with raw signature text;
//! [`ApiResolver::resolve_all`] then resolves every type until the graph is
//! the largest subgraph whose signatures all resolve.

pub mod builtin;
pub mod config;
pub mod error;
pub mod logging;
pub mod naming;
pub mod parser;
pub mod resolver;
pub mod sink;

pub use config::{InterfacePolicy, ResolverConfig};
pub use error::{NameSyntaxError, Result, TypeResolutionError};
pub use parser::TypeName;
pub use resolver::{ApiResolver, ResolveSummary, TypeResolver, TypeScope};
pub use sink::TracingSink;

use javadjust_api::Api;

/// Resolve `api` with the default configuration, reporting through `tracing`.
pub fn resolve_api(api: &mut Api) -> ResolveSummary {
    ApiResolver::default().resolve_all(api, &mut TracingSink)
}
