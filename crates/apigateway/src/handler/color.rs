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
        requests::{CreateColorRequest, FindAllColors, UpdateColorRequest},
        responses::{ApiResponse, ApiResponsePagination, ColorResponse},
    },
    errors::HttpError,
    service::ColorService,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/{store_id}/colors",
    tag = "Color",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID"), FindAllColors),
    responses(
        (status = 200, description = "Colors of the store", body = ApiResponsePagination<Vec<ColorResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_colors(
    Extension(service): Extension<ColorService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(store_id): Path<Uuid>,
    Query(params): Query<FindAllColors>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_all(&user_id, store_id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/{store_id}/colors/{color_id}",
    tag = "Color",
    security(("bearer_auth" = [])),
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("color_id" = Uuid, Path, description = "Color ID")
    ),
    responses(
        (status = 200, description = "Color details", body = ApiResponse<ColorResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Color not found")
    )
)]
pub async fn get_color(
    Extension(service): Extension<ColorService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path((store_id, color_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .query
        .find_by_id(&user_id, store_id, color_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/{store_id}/colors",
    tag = "Color",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID")),
    request_body = CreateColorRequest,
    responses(
        (status = 201, description = "Color created", body = ApiResponse<ColorResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_color(
    Extension(service): Extension<ColorService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(store_id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateColorRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .command
        .create_color(&user_id, store_id, &body)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/{store_id}/colors/{color_id}",
    tag = "Color",
    security(("bearer_auth" = [])),
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("color_id" = Uuid, Path, description = "Color ID")
    ),
    request_body = UpdateColorRequest,
    responses(
        (status = 200, description = "Color updated", body = ApiResponse<ColorResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Color not found")
    )
)]
pub async fn update_color(
    Extension(service): Extension<ColorService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path((store_id, color_id)): Path<(Uuid, Uuid)>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateColorRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(color_id);
    let response = service
        .command
        .update_color(&user_id, store_id, &body)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/{store_id}/colors/{color_id}",
    tag = "Color",
    security(("bearer_auth" = [])),
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("color_id" = Uuid, Path, description = "Color ID")
    ),
    responses(
        (status = 200, description = "Color deleted", body = ApiResponse<ColorResponse>),
        (status = 400, description = "Color still referenced by a product"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Color not found")
    )
)]
pub async fn delete_color(
    Extension(service): Extension<ColorService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path((store_id, color_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .command
        .delete_color(&user_id, store_id, color_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn color_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/{store_id}/colors", get(get_colors))
        .route("/api/{store_id}/colors", post(create_color))
        .route("/api/{store_id}/colors/{color_id}", get(get_color))
        .route("/api/{store_id}/colors/{color_id}", patch(update_color))
        .route("/api/{store_id}/colors/{color_id}", delete(delete_color))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.color_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
