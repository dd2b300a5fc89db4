//! HTTP Handlers

use crate::error::ApiError;
use crate::router::AppState;
use crate::types::HealthResponse;
use axum::extract::{Path, Query, State};
use axum::Json;
use jobboard_core::application::JobFilter;
use jobboard_core::domain::{Employer, EntityId, Job};

/// GET /jobs[?column=value]
///
/// Parameters are kept as ordered pairs so a repeated key counts twice.
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Job>>, ApiError> {
    if params.len() > 1 {
        return Err(ApiError::validation(format!(
            "At most one filter parameter is supported, got {}",
            params.len()
        )));
    }

    let filter = params
        .first()
        .map(|(column, value)| JobFilter::parse(column, value))
        .transpose()?;

    let jobs = state.catalog.list_jobs(filter).await?;
    Ok(Json(jobs))
}

/// GET /jobs/:id
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<Job>, ApiError> {
    Ok(Json(state.catalog.get_job(id).await?))
}

/// GET /employers
pub async fn list_employers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employer>>, ApiError> {
    Ok(Json(state.catalog.list_employers().await?))
}

/// GET /employers/:id
pub async fn get_employer(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<Employer>, ApiError> {
    Ok(Json(state.catalog.get_employer(id).await?))
}

/// GET /livez
pub async fn livez() -> Json<HealthResponse> {
    tracing::debug!("service is live");
    Json(HealthResponse {
        status: "live".to_string(),
        version: jobboard_core::VERSION.to_string(),
    })
}

/// GET /healthz
pub async fn healthz(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state.catalog.ping().await?;
    tracing::debug!("service is healthy");
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: jobboard_core::VERSION.to_string(),
    }))
}
