//! Customer lifecycle handlers.

use axum::{extract::State, http::StatusCode, Json};
use service_core::error::AppError;

use crate::{
    dtos::{CreateCustomerRequest, RenameCustomerRequest},
    middleware::CustomerIdentity,
    models::Customer,
    services::metrics::CUSTOMERS_CREATED,
    AppState,
};

/// POST /customer - register a new customer.
pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    tracing::info!(tax_id = %payload.cpf, "Creating customer");

    let customer = state.customers.create(&payload.cpf, &payload.name)?;
    CUSTOMERS_CREATED.inc();

    Ok((StatusCode::CREATED, Json(customer)))
}

/// PUT /customer - rename the identified customer.
pub async fn rename_customer(
    State(state): State<AppState>,
    identity: CustomerIdentity,
    Json(payload): Json<RenameCustomerRequest>,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    let customer = state
        .customers
        .rename(identity.customer_id, &payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /customer - fetch the identified customer with its full history.
pub async fn fetch_customer(
    State(state): State<AppState>,
    identity: CustomerIdentity,
) -> Result<Json<Customer>, AppError> {
    let customer = state.customers.fetch(identity.customer_id).await?;
    Ok(Json(customer))
}

/// DELETE /customer - delete the identified customer and its statements.
pub async fn delete_customer(
    State(state): State<AppState>,
    identity: CustomerIdentity,
) -> Result<StatusCode, AppError> {
    state.customers.delete(identity.customer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
