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
        requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
        responses::{ApiResponse, ApiResponsePagination, CategoryResponse},
    },
    errors::HttpError,
    service::CategoryService,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/{store_id}/categories",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID"), FindAllCategories),
    responses(
        (status = 200, description = "Categories of the store", body = ApiResponsePagination<Vec<CategoryResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_categories(
    Extension(service): Extension<CategoryService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(store_id): Path<Uuid>,
    Query(params): Query<FindAllCategories>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_all(&user_id, store_id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/{store_id}/categories/{category_id}",
    tag = "Category",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    Extension(service): Extension<CategoryService>,
    Path((store_id, category_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_id(store_id, category_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/{store_id}/categories",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID")),
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_category(
    Extension(service): Extension<CategoryService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(store_id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .command
        .create_category(&user_id, store_id, &body)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/{store_id}/categories/{category_id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    Extension(service): Extension<CategoryService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path((store_id, category_id)): Path<(Uuid, Uuid)>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(category_id);
    let response = service
        .command
        .update_category(&user_id, store_id, &body)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/{store_id}/categories/{category_id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Category still referenced by a product"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    Extension(service): Extension<CategoryService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path((store_id, category_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .command
        .delete_category(&user_id, store_id, category_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let protected = OpenApiRouter::new()
        .route("/api/{store_id}/categories", get(get_categories))
        .route("/api/{store_id}/categories", post(create_category))
        .route(
            "/api/{store_id}/categories/{category_id}",
            patch(update_category),
        )
        .route(
            "/api/{store_id}/categories/{category_id}",
            delete(delete_category),
        )
        .route_layer(middleware::from_fn(auth_middleware));

    let public = OpenApiRouter::new().route(
        "/api/{store_id}/categories/{category_id}",
        get(get_category),
    );

    protected
        .merge(public)
        .layer(Extension(app_state.di_container.category_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
