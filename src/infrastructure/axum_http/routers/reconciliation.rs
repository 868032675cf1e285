use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use tokio_util::sync::CancellationToken;

use crate::{
    application::usecases::reconciliation::ReconciliationUseCase,
    domain::{
        repositories::ledger::ReconciliationRepository,
        value_objects::ledger::LedgerEntryModel,
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{
            postgres_connection::PgPoolSquad, repositories::ledger::ReconciliationPostgres,
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let reconciliation_repository = ReconciliationPostgres::new(Arc::clone(&db_pool));
    let reconciliation_usecase = ReconciliationUseCase::new(Arc::new(reconciliation_repository));

    router(Arc::new(reconciliation_usecase))
}

pub fn router<T>(reconciliation_usecase: Arc<ReconciliationUseCase<T>>) -> Router
where
    T: ReconciliationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/debts", post(add_debt::<T>))
        .route("/payments", post(add_payment::<T>))
        .with_state(reconciliation_usecase)
}

pub async fn add_debt<T>(
    State(reconciliation_usecase): State<Arc<ReconciliationUseCase<T>>>,
    payload: Result<Json<LedgerEntryModel>, JsonRejection>,
) -> impl IntoResponse
where
    T: ReconciliationRepository + Send + Sync,
{
    let Json(entry) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };

    // Dropping this future (request timeout) cancels the token and rolls the transaction back.
    match reconciliation_usecase
        .add_debt(
            entry.photographer_id,
            entry.client_id,
            entry.amount,
            CancellationToken::new(),
        )
        .await
    {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn add_payment<T>(
    State(reconciliation_usecase): State<Arc<ReconciliationUseCase<T>>>,
    payload: Result<Json<LedgerEntryModel>, JsonRejection>,
) -> impl IntoResponse
where
    T: ReconciliationRepository + Send + Sync,
{
    let Json(entry) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };

    match reconciliation_usecase
        .add_payment(
            entry.photographer_id,
            entry.client_id,
            entry.amount,
            CancellationToken::new(),
        )
        .await
    {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
