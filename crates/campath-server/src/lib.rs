//! Campath Server - HTTP exposure of campus route queries
//!
//! The map is loaded once and shared read-only across requests.

pub mod error;
pub mod routes;

pub use error::{ServerError, ServerResult};
pub use routes::{create_router, run_server, RouteQuery};
