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
        requests::{CreateBillboardRequest, FindAllBillboards, UpdateBillboardRequest},
        responses::{ApiResponse, ApiResponsePagination, BillboardResponse},
    },
    errors::HttpError,
    service::BillboardService,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/{store_id}/billboards",
    tag = "Billboard",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID"), FindAllBillboards),
    responses(
        (status = 200, description = "Billboards of the store", body = ApiResponsePagination<Vec<BillboardResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_billboards(
    Extension(service): Extension<BillboardService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(store_id): Path<Uuid>,
    Query(params): Query<FindAllBillboards>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_all(&user_id, store_id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/{store_id}/billboards/{billboard_id}",
    tag = "Billboard",
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("billboard_id" = Uuid, Path, description = "Billboard ID")
    ),
    responses(
        (status = 200, description = "Billboard details", body = ApiResponse<BillboardResponse>),
        (status = 404, description = "Billboard not found")
    )
)]
pub async fn get_billboard(
    Extension(service): Extension<BillboardService>,
    Path((store_id, billboard_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_id(store_id, billboard_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/{store_id}/billboards",
    tag = "Billboard",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID")),
    request_body = CreateBillboardRequest,
    responses(
        (status = 201, description = "Billboard created", body = ApiResponse<BillboardResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_billboard(
    Extension(service): Extension<BillboardService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(store_id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateBillboardRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .command
        .create_billboard(&user_id, store_id, &body)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/{store_id}/billboards/{billboard_id}",
    tag = "Billboard",
    security(("bearer_auth" = [])),
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("billboard_id" = Uuid, Path, description = "Billboard ID")
    ),
    request_body = UpdateBillboardRequest,
    responses(
        (status = 200, description = "Billboard updated", body = ApiResponse<BillboardResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Billboard not found")
    )
)]
pub async fn update_billboard(
    Extension(service): Extension<BillboardService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path((store_id, billboard_id)): Path<(Uuid, Uuid)>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateBillboardRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(billboard_id);
    let response = service
        .command
        .update_billboard(&user_id, store_id, &body)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/{store_id}/billboards/{billboard_id}",
    tag = "Billboard",
    security(("bearer_auth" = [])),
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        ("billboard_id" = Uuid, Path, description = "Billboard ID")
    ),
    responses(
        (status = 200, description = "Billboard deleted", body = ApiResponse<BillboardResponse>),
        (status = 400, description = "Billboard still referenced by a category"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Billboard not found")
    )
)]
pub async fn delete_billboard(
    Extension(service): Extension<BillboardService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path((store_id, billboard_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .command
        .delete_billboard(&user_id, store_id, billboard_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn billboard_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let protected = OpenApiRouter::new()
        .route("/api/{store_id}/billboards", get(get_billboards))
        .route("/api/{store_id}/billboards", post(create_billboard))
        .route(
            "/api/{store_id}/billboards/{billboard_id}",
            patch(update_billboard),
        )
        .route(
            "/api/{store_id}/billboards/{billboard_id}",
            delete(delete_billboard),
        )
        .route_layer(middleware::from_fn(auth_middleware));

    let public = OpenApiRouter::new().route(
        "/api/{store_id}/billboards/{billboard_id}",
        get(get_billboard),
    );

    protected
        .merge(public)
        .layer(Extension(app_state.di_container.billboard_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
