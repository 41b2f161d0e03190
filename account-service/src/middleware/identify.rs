//! Customer identification for request handling.
//!
//! Every customer-scoped handler takes a [`CustomerIdentity`], extracted from
//! the `id` request header and resolved against the store before the handler
//! body runs. Handlers pass the identity into service calls, and services
//! re-resolve through the store on each operation, so a customer deleted
//! mid-flight is observed as gone rather than mutated after the fact.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::services::ServiceError;
use crate::AppState;

pub const ID_HEADER: &str = "id";

/// Identity of the customer a request acts on.
///
/// Presenting a resolvable id is the sole authentication mechanism of the
/// surface; whoever holds the id controls the customer.
#[derive(Debug, Clone, Copy)]
pub struct CustomerIdentity {
    pub customer_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn reject(err: ServiceError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

#[axum::async_trait]
impl FromRequestParts<AppState> for CustomerIdentity {
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| reject(ServiceError::MissingIdentifier))?;

        // A malformed id cannot resolve to any customer, so it reads as
        // unknown rather than as a distinct error.
        let customer_id =
            Uuid::parse_str(raw).map_err(|_| reject(ServiceError::CustomerNotFound))?;

        if state.store.find(customer_id).is_err() {
            return Err(reject(ServiceError::CustomerNotFound));
        }

        // Add to the request span for observability.
        let span = tracing::Span::current();
        span.record("customer_id", customer_id.to_string().as_str());

        Ok(CustomerIdentity { customer_id })
    }
}
