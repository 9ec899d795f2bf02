use crate::middleware::{
    jwt::{AuthUser, auth_middleware},
    validate::SimpleValidatedJson,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use shared::{
    domain::{
        requests::{CreateStoreRequest, UpdateStoreRequest},
        responses::{ApiResponse, StoreResponse},
    },
    errors::HttpError,
    service::StoreService,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/stores",
    tag = "Store",
    security(("bearer_auth" = [])),
    request_body = CreateStoreRequest,
    responses(
        (status = 201, description = "Store created", body = ApiResponse<StoreResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_store(
    Extension(service): Extension<StoreService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateStoreRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.command.create_store(&user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/stores",
    tag = "Store",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Stores of the caller", body = ApiResponse<Vec<StoreResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_stores(
    Extension(service): Extension<StoreService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_user(&user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/stores/{store_id}",
    tag = "Store",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Store details", body = ApiResponse<StoreResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Store not found")
    )
)]
pub async fn get_store(
    Extension(service): Extension<StoreService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(store_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_id(&user_id, store_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/stores/{store_id}",
    tag = "Store",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID")),
    request_body = UpdateStoreRequest,
    responses(
        (status = 200, description = "Store updated", body = ApiResponse<StoreResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Store not found")
    )
)]
pub async fn update_store(
    Extension(service): Extension<StoreService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(store_id): Path<Uuid>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateStoreRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(store_id);
    let response = service.command.update_store(&user_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/stores/{store_id}",
    tag = "Store",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Store deleted", body = ApiResponse<StoreResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Store not found")
    )
)]
pub async fn delete_store(
    Extension(service): Extension<StoreService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(store_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.command.delete_store(&user_id, store_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn store_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/stores", post(create_store))
        .route("/api/stores", get(get_stores))
        .route("/api/stores/{store_id}", get(get_store))
        .route("/api/stores/{store_id}", patch(update_store))
        .route("/api/stores/{store_id}", delete(delete_store))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.store_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
