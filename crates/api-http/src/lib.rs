//! HTTP API Layer
//!
//! Read-only REST surface over jobs and employers, served with axum.

pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod types;

pub use router::{build_router, AppState};
pub use server::{HttpServer, HttpServerConfig, ServerHandle};
