use crate::middleware::{
    jwt::{AuthUser, auth_middleware},
    validate::SimpleValidatedJson,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use shared::{
    domain::{
        requests::{CreateSizeRequest, FindAllSizes, UpdateSizeRequest},
        responses::{ApiResponse, ApiResponsePagination, SizeResponse},
    },
    errors::HttpError,
    service::SizeService,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/{store_id}/sizes",
    tag = "Size",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID"), FindAllSizes),
    responses(
        (status = 200, description = "Sizes of the store", body = ApiResponsePagination<Vec<SizeResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_sizes(
    Extension(service): Extension<SizeService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(store_id): Path<Uuid>,
    Query(params): Query<FindAllSizes>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_all(&user_id, store_id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/{store_id}/sizes/{size_id}",
    tag = "Size",
    security(("bearer_auth" = [])),
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("size_id" = Uuid, Path, description = "Size ID")
    ),
    responses(
        (status = 200, description = "Size details", body = ApiResponse<SizeResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Size not found")
    )
)]
pub async fn get_size(
    Extension(service): Extension<SizeService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path((store_id, size_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_id(&user_id, store_id, size_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/{store_id}/sizes",
    tag = "Size",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID")),
    request_body = CreateSizeRequest,
    responses(
        (status = 201, description = "Size created", body = ApiResponse<SizeResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_size(
    Extension(service): Extension<SizeService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(store_id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateSizeRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.command.create_size(&user_id, store_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/{store_id}/sizes/{size_id}",
    tag = "Size",
    security(("bearer_auth" = [])),
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("size_id" = Uuid, Path, description = "Size ID")
    ),
    request_body = UpdateSizeRequest,
    responses(
        (status = 200, description = "Size updated", body = ApiResponse<SizeResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Size not found")
    )
)]
pub async fn update_size(
    Extension(service): Extension<SizeService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path((store_id, size_id)): Path<(Uuid, Uuid)>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateSizeRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(size_id);
    let response = service.command.update_size(&user_id, store_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/{store_id}/sizes/{size_id}",
    tag = "Size",
    security(("bearer_auth" = [])),
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("size_id" = Uuid, Path, description = "Size ID")
    ),
    responses(
        (status = 200, description = "Size deleted", body = ApiResponse<SizeResponse>),
        (status = 400, description = "Size still referenced by a product"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Size not found")
    )
)]
pub async fn delete_size(
    Extension(service): Extension<SizeService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path((store_id, size_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .command
        .delete_size(&user_id, store_id, size_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn size_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/{store_id}/sizes", get(get_sizes))
        .route("/api/{store_id}/sizes", post(create_size))
        .route("/api/{store_id}/sizes/{size_id}", get(get_size))
        .route("/api/{store_id}/sizes/{size_id}", patch(update_size))
        .route("/api/{store_id}/sizes/{size_id}", delete(delete_size))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.size_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
