//! Route table and shared state

use crate::handler;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use jobboard_core::application::CatalogService;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self { catalog }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/jobs", get(handler::list_jobs))
        .route("/jobs/:id", get(handler::get_job))
        .route("/employers", get(handler::list_employers))
        .route("/employers/:id", get(handler::get_employer))
        .route("/healthz", get(handler::healthz))
        .route("/livez", get(handler::livez))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "HTTP request"
    );
    response
}
