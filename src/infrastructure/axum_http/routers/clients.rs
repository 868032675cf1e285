use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};

use crate::{
    application::usecases::clients::ClientUseCase,
    domain::{
        repositories::clients::ClientRepository,
        value_objects::{
            clients::{EditClientModel, InsertClientModel},
            photographers::CreatedModel,
        },
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{postgres_connection::PgPoolSquad, repositories::clients::ClientPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let client_repository = ClientPostgres::new(Arc::clone(&db_pool));
    let client_usecase = ClientUseCase::new(Arc::new(client_repository));

    router(Arc::new(client_usecase))
}

pub fn router<T>(client_usecase: Arc<ClientUseCase<T>>) -> Router
where
    T: ClientRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/clients", post(create::<T>))
        .route("/clients/:client_id", put(rename::<T>).delete(delete::<T>))
        .route("/photographers/:photographer_id/clients", get(list::<T>))
        .with_state(client_usecase)
}

pub async fn create<T>(
    State(client_usecase): State<Arc<ClientUseCase<T>>>,
    payload: Result<Json<InsertClientModel>, JsonRejection>,
) -> impl IntoResponse
where
    T: ClientRepository + Send + Sync,
{
    let Json(insert_client_model) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };

    match client_usecase.create(insert_client_model).await {
        Ok(id) => (StatusCode::CREATED, Json(CreatedModel { id })).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn rename<T>(
    State(client_usecase): State<Arc<ClientUseCase<T>>>,
    Path(client_id): Path<i64>,
    payload: Result<Json<EditClientModel>, JsonRejection>,
) -> impl IntoResponse
where
    T: ClientRepository + Send + Sync,
{
    let Json(edit_client_model) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };

    match client_usecase.rename(client_id, edit_client_model).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn delete<T>(
    State(client_usecase): State<Arc<ClientUseCase<T>>>,
    Path(client_id): Path<i64>,
) -> impl IntoResponse
where
    T: ClientRepository + Send + Sync,
{
    match client_usecase.delete(client_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn list<T>(
    State(client_usecase): State<Arc<ClientUseCase<T>>>,
    Path(photographer_id): Path<i64>,
) -> impl IntoResponse
where
    T: ClientRepository + Send + Sync,
{
    match client_usecase.list(photographer_id).await {
        Ok(clients) => (StatusCode::OK, Json(clients)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::clients::MockClientRepository;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    #[tokio::test]
    async fn deleting_unknown_client_is_not_found() {
        let mut repository = MockClientRepository::new();
        repository
            .expect_soft_delete()
            .returning(|_| Box::pin(async { Ok(false) }));
        let app = router(Arc::new(ClientUseCase::new(Arc::new(repository))));

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/clients/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn blank_client_name_is_bad_request() {
        let mut repository = MockClientRepository::new();
        repository.expect_create().never();
        let app = router(Arc::new(ClientUseCase::new(Arc::new(repository))));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/clients")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"photographer_id": 1, "name": " "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rename_with_wrong_field_type_is_json_bad_request() {
        let mut repository = MockClientRepository::new();
        repository.expect_rename().never();
        let app = router(Arc::new(ClientUseCase::new(Arc::new(repository))));

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/clients/42")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name": 7}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 400);
    }
}
