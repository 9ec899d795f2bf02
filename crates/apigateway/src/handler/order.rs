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
    routing::{get, post},
};
use shared::{
    domain::{
        requests::{CreateCheckoutRequest, FindAllOrders},
        responses::{ApiResponse, ApiResponsePagination, OrderResponse},
    },
    errors::HttpError,
    service::OrderService,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/{store_id}/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID"), FindAllOrders),
    responses(
        (status = 200, description = "Orders of the store", body = ApiResponsePagination<Vec<OrderResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_orders(
    Extension(service): Extension<OrderService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(store_id): Path<Uuid>,
    Query(params): Query<FindAllOrders>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_all(&user_id, store_id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/{store_id}/orders/{order_id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("order_id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order details", body = ApiResponse<OrderResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    Extension(service): Extension<OrderService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path((store_id, order_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .query
        .find_by_id(&user_id, store_id, order_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/{store_id}/checkout",
    tag = "Checkout",
    params(("store_id" = Uuid, Path, description = "Store ID")),
    request_body = CreateCheckoutRequest,
    responses(
        (status = 201, description = "Unpaid order created", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Validation error or unknown product id")
    )
)]
pub async fn create_checkout(
    Extension(service): Extension<OrderService>,
    Path(store_id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCheckoutRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.command.create_checkout(store_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let protected = OpenApiRouter::new()
        .route("/api/{store_id}/orders", get(get_orders))
        .route("/api/{store_id}/orders/{order_id}", get(get_order))
        .route_layer(middleware::from_fn(auth_middleware));

    // checkout is driven by the public storefront, no caller identity required
    let public = OpenApiRouter::new().route("/api/{store_id}/checkout", post(create_checkout));

    protected
        .merge(public)
        .layer(Extension(app_state.di_container.order_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
