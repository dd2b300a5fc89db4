//! HTTP Server
//!
//! Binds a TCP listener and serves the router until stopped.

use crate::router::{build_router, AppState};
use jobboard_core::application::CatalogService;
use jobboard_core::error::{AppError, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
const DEFAULT_HTTP_PORT: u16 = 7000;

/// HTTP Server Configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    /// 0 picks an ephemeral port (see [`ServerHandle::local_addr`])
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

/// HTTP Server
pub struct HttpServer {
    config: HttpServerConfig,
    state: AppState,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, catalog: Arc<CatalogService>) -> Self {
        Self {
            config,
            state: AppState::new(catalog),
        }
    }

    /// Bind and start serving in a background task
    pub async fn start(self) -> Result<ServerHandle> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            AppError::Config(format!("Failed to bind HTTP server on {}: {}", addr, e))
        })?;
        let local_addr = listener.local_addr()?;

        info!(addr = %local_addr, "Starting HTTP server");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let app = build_router(self.state);

        let task = tokio::spawn(async move {
            let shutdown = async {
                // A dropped sender also stops the server
                let _ = shutdown_rx.await;
            };
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown)
                .await
            {
                error!(error = ?e, "HTTP server terminated with error");
            }
        });

        info!("HTTP server started successfully");

        Ok(ServerHandle {
            local_addr,
            shutdown_tx,
            task,
        })
    }
}

/// Handle to a running [`HttpServer`]
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Base URL for clients, e.g. `http://127.0.0.1:7000`
    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stop accepting connections and wait for in-flight requests to finish
    pub async fn stop(self) -> Result<()> {
        let _ = self.shutdown_tx.send(());
        self.task
            .await
            .map_err(|e| AppError::Internal(format!("HTTP server task failed: {}", e)))?;
        info!(addr = %self.local_addr, "HTTP server stopped");
        Ok(())
    }
}
