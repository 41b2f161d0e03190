//! Application startup and lifecycle management.

use crate::config::Config;
use crate::handlers::{
    app::{health_check, readiness_check},
    customer::{create_customer, delete_customer, fetch_customer, rename_customer},
    metrics::metrics,
    statement::{deposit, list_statements, withdraw},
};
use crate::services::{CustomerService, CustomerStore, StatementService};
use axum::middleware::from_fn;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// The store is the only owner of customer data; the services hold handles
/// to it and never copy customer state out of it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CustomerStore>,
    pub customers: CustomerService,
    pub statements: StatementService,
}

impl AppState {
    pub fn new() -> Self {
        let store = Arc::new(CustomerStore::new());
        Self {
            customers: CustomerService::new(Arc::clone(&store)),
            statements: StatementService::new(Arc::clone(&store)),
            store,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics))
        .route(
            "/customer",
            post(create_customer)
                .put(rename_customer)
                .get(fetch_customer)
                .delete(delete_customer),
        )
        .route("/statement", get(list_statements))
        .route("/deposit", post(deposit))
        .route("/withdraw", post(withdraw))
        .layer(from_fn(metrics_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                    customer_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// Binds the listener eagerly (port 0 = random port for testing) so the
    /// actual port is known before the server starts serving.
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let state = AppState::new();

        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(service = %config.service_name, "Listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get the application state for sharing with tests.
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}
