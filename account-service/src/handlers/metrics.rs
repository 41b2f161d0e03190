use axum::response::IntoResponse;

use crate::services::metrics::get_metrics;

/// Prometheus metrics endpoint.
pub async fn metrics() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
