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
        requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
        responses::{ApiResponse, ApiResponsePagination, ProductResponse},
    },
    errors::HttpError,
    service::ProductService,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/{store_id}/products",
    tag = "Product",
    params(("store_id" = Uuid, Path, description = "Store ID"), FindAllProducts),
    responses(
        (status = 200, description = "Products of the store, archived excluded", body = ApiResponsePagination<Vec<ProductResponse>>)
    )
)]
pub async fn get_products(
    Extension(service): Extension<ProductService>,
    Path(store_id): Path<Uuid>,
    Query(params): Query<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_all(store_id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/{store_id}/products/{product_id}",
    tag = "Product",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("product_id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    Extension(service): Extension<ProductService>,
    Path((store_id, product_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_id(store_id, product_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/{store_id}/products",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID")),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_product(
    Extension(service): Extension<ProductService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(store_id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .command
        .create_product(&user_id, store_id, &body)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/{store_id}/products/{product_id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("product_id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated, image collection replaced", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    Extension(service): Extension<ProductService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path((store_id, product_id)): Path<(Uuid, Uuid)>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(product_id);
    let response = service
        .command
        .update_product(&user_id, store_id, &body)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/{store_id}/products/{product_id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("product_id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Product still referenced by an order item"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    Extension(service): Extension<ProductService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path((store_id, product_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .command
        .delete_product(&user_id, store_id, product_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let protected = OpenApiRouter::new()
        .route("/api/{store_id}/products", post(create_product))
        .route(
            "/api/{store_id}/products/{product_id}",
            patch(update_product),
        )
        .route(
            "/api/{store_id}/products/{product_id}",
            delete(delete_product),
        )
        .route_layer(middleware::from_fn(auth_middleware));

    let public = OpenApiRouter::new()
        .route("/api/{store_id}/products", get(get_products))
        .route("/api/{store_id}/products/{product_id}", get(get_product));

    protected
        .merge(public)
        .layer(Extension(app_state.di_container.product_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
