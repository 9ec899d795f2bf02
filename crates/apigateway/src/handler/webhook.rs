use axum::{
    body::Bytes,
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use shared::{errors::HttpError, service::OrderService, state::AppState};
use std::sync::Arc;
use tracing::info;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/webhook",
    tag = "Webhook",
    request_body = String,
    responses(
        (status = 200, description = "Event acknowledged"),
        (status = 400, description = "Missing or invalid signature"),
        (status = 404, description = "Order referenced by the event does not exist")
    )
)]
pub async fn payment_webhook(
    Extension(service): Extension<OrderService>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let signature = headers
        .get("Stripe-Signature")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| HttpError::BadRequest("Missing Stripe-Signature header".to_string()))?;

    info!("📨 Payment webhook delivery received ({} bytes)", body.len());

    service.command.finalize_checkout(&body, signature).await?;

    Ok(StatusCode::OK)
}

pub fn webhook_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/webhook", post(payment_webhook))
        .layer(Extension(app_state.di_container.order_service.clone()))
}
