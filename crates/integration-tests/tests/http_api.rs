//! HTTP API black-box tests
//!
//! Starts the real server on an ephemeral port and talks to it with reqwest.

use chrono::Utc;
use jobboard_api_http::{HttpServer, HttpServerConfig, ServerHandle};
use jobboard_core::application::CatalogService;
use jobboard_core::domain::{Employer, Job};
use jobboard_core::port::Repository;
use jobboard_infra_sqlite::{
    create_pool, run_migrations, SqliteEmployerRepository, SqliteJobRepository,
};
use std::sync::Arc;

async fn start_server() -> (ServerHandle, Arc<SqliteJobRepository>, Arc<SqliteEmployerRepository>) {
    let pool = create_pool(":memory:", 1).await.unwrap();
    run_migrations(&pool).await.unwrap();

    let jobs = Arc::new(SqliteJobRepository::new(pool.clone()));
    let employers = Arc::new(SqliteEmployerRepository::new(pool));
    let catalog = Arc::new(CatalogService::new(jobs.clone(), employers.clone()));

    let config = HttpServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let handle = HttpServer::new(config, catalog).start().await.unwrap();

    (handle, jobs, employers)
}

#[tokio::test]
async fn test_get_jobs_returns_ok() {
    let (handle, jobs, employers) = start_server().await;

    let mut employer = Employer::new("Kraft Heinz", "Food", "A global food company");
    employers.create(&mut employer).await.unwrap();
    let mut job = Job::new("Ketchup taster", Utc::now()).with_employer(&employer);
    jobs.create(&mut job).await.unwrap();

    let response = reqwest::get(format!("{}/jobs", handle.base_url()))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Vec<Job> = response.json().await.unwrap();
    assert_eq!(body, vec![job]);

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn test_get_missing_job_is_not_found() {
    let (handle, _, _) = start_server().await;

    let response = reqwest::get(format!("{}/jobs/99", handle.base_url()))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "not_found");

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn test_server_stops() {
    let (handle, _, _) = start_server().await;
    let url = format!("{}/livez", handle.base_url());

    assert!(reqwest::get(&url).await.unwrap().status().is_success());
    handle.stop().await.unwrap();

    assert!(reqwest::get(&url).await.is_err());
}
