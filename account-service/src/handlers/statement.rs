//! Statement handlers: history queries, deposits, withdrawals.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;

use crate::{
    dtos::{MessageResponse, OperationRequest, StatementQuery},
    middleware::CustomerIdentity,
    models::EntryKind,
    services::metrics::ENTRIES_TOTAL,
    services::StatementView,
    AppState,
};

/// GET /statement - statements and balance, optionally for one calendar day.
pub async fn list_statements(
    State(state): State<AppState>,
    identity: CustomerIdentity,
    Query(query): Query<StatementQuery>,
) -> Result<Json<StatementView>, AppError> {
    let view = state
        .statements
        .list(identity.customer_id, query.date.as_deref())
        .await?;

    Ok(Json(view))
}

/// POST /deposit - record a credit against the identified customer.
pub async fn deposit(
    State(state): State<AppState>,
    identity: CustomerIdentity,
    Json(payload): Json<OperationRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    state
        .statements
        .deposit(identity.customer_id, &payload.description, payload.amount)
        .await?;
    ENTRIES_TOTAL
        .with_label_values(&[EntryKind::Credit.as_str()])
        .inc();

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Deposit successfully made!")),
    ))
}

/// POST /withdraw - record a debit if the full-history balance covers it.
pub async fn withdraw(
    State(state): State<AppState>,
    identity: CustomerIdentity,
    Json(payload): Json<OperationRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    state
        .statements
        .withdraw(identity.customer_id, &payload.description, payload.amount)
        .await?;
    ENTRIES_TOTAL
        .with_label_values(&[EntryKind::Debit.as_str()])
        .inc();

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Withdraw successfully made!")),
    ))
}
