use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    application::usecases::photographers::PhotographerUseCase,
    domain::{
        repositories::photographers::PhotographerRepository,
        value_objects::photographers::{CreatedModel, InsertPhotographerModel},
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{
            postgres_connection::PgPoolSquad, repositories::photographers::PhotographerPostgres,
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let photographer_repository = PhotographerPostgres::new(Arc::clone(&db_pool));
    let photographer_usecase = PhotographerUseCase::new(Arc::new(photographer_repository));

    Router::new()
        .route(
            "/photographers",
            get(list::<PhotographerPostgres>).post(create::<PhotographerPostgres>),
        )
        .with_state(Arc::new(photographer_usecase))
}

pub async fn create<T>(
    State(photographer_usecase): State<Arc<PhotographerUseCase<T>>>,
    payload: Result<Json<InsertPhotographerModel>, JsonRejection>,
) -> impl IntoResponse
where
    T: PhotographerRepository + Send + Sync,
{
    let Json(insert_photographer_model) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };

    match photographer_usecase.create(insert_photographer_model).await {
        Ok(id) => (StatusCode::CREATED, Json(CreatedModel { id })).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn list<T>(
    State(photographer_usecase): State<Arc<PhotographerUseCase<T>>>,
) -> impl IntoResponse
where
    T: PhotographerRepository + Send + Sync,
{
    match photographer_usecase.list().await {
        Ok(photographers) => (StatusCode::OK, Json(photographers)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
