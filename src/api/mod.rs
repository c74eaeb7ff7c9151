//! HTTP API layer.
//!
//! Exposes the reference catalogs, medication autocomplete, and HPI
//! drafting as REST endpoints, plus static frontend assets. The router is
//! composable — `api_router()` returns a `Router` that can be mounted on
//! any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{ApiServer, ApiSession};
pub use types::ApiContext;
