use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    application::usecases::ledger_queries::LedgerQueryUseCase,
    domain::repositories::ledger_queries::LedgerQueryRepository,
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{
            postgres_connection::PgPoolSquad, repositories::ledger_queries::LedgerQueryPostgres,
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let ledger_query_repository = LedgerQueryPostgres::new(Arc::clone(&db_pool));
    let ledger_query_usecase = LedgerQueryUseCase::new(Arc::new(ledger_query_repository));

    router(Arc::new(ledger_query_usecase))
}

pub fn router<T>(ledger_query_usecase: Arc<LedgerQueryUseCase<T>>) -> Router
where
    T: LedgerQueryRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/debts/:photographer_id/:client_id", get(current_debt::<T>))
        .route("/debtors/:photographer_id", get(list_debtors::<T>))
        .route("/incomes/:photographer_id", get(incomes::<T>))
        .with_state(ledger_query_usecase)
}

pub async fn current_debt<T>(
    State(ledger_query_usecase): State<Arc<LedgerQueryUseCase<T>>>,
    Path((photographer_id, client_id)): Path<(i64, i64)>,
) -> impl IntoResponse
where
    T: LedgerQueryRepository + Send + Sync,
{
    match ledger_query_usecase
        .current_debt(photographer_id, client_id)
        .await
    {
        Ok(debt) => (StatusCode::OK, Json(debt)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn list_debtors<T>(
    State(ledger_query_usecase): State<Arc<LedgerQueryUseCase<T>>>,
    Path(photographer_id): Path<i64>,
) -> impl IntoResponse
where
    T: LedgerQueryRepository + Send + Sync,
{
    if photographer_id <= 0 {
        return AppError::BadRequest("photographer_id must be a positive identifier".to_string())
            .into_response();
    }

    match ledger_query_usecase.list_debtors(photographer_id).await {
        Ok(debtors) => (StatusCode::OK, Json(debtors)).into_response(),
        Err(err) => AppError::Internal(err).into_response(),
    }
}

pub async fn incomes<T>(
    State(ledger_query_usecase): State<Arc<LedgerQueryUseCase<T>>>,
    Path(photographer_id): Path<i64>,
) -> impl IntoResponse
where
    T: LedgerQueryRepository + Send + Sync,
{
    if photographer_id <= 0 {
        return AppError::BadRequest("photographer_id must be a positive identifier".to_string())
            .into_response();
    }

    match ledger_query_usecase.incomes(photographer_id).await {
        Ok(incomes) => (StatusCode::OK, Json(incomes)).into_response(),
        Err(err) => AppError::Internal(err).into_response(),
    }
}
