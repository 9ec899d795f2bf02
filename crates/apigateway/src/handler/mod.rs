mod billboard;
mod category;
mod color;
mod order;
mod product;
mod size;
mod store;
mod webhook;

use anyhow::Result;
use axum::body::Body;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use prometheus_client::encoding::text::encode;
use shared::state::AppState;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::billboard::billboard_routes;
pub use self::category::category_routes;
pub use self::color::color_routes;
pub use self::order::order_routes;
pub use self::product::product_routes;
pub use self::size::size_routes;
pub use self::store::store_routes;
pub use self::webhook::webhook_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        store::create_store,
        store::get_stores,
        store::get_store,
        store::update_store,
        store::delete_store,

        billboard::get_billboards,
        billboard::get_billboard,
        billboard::create_billboard,
        billboard::update_billboard,
        billboard::delete_billboard,

        category::get_categories,
        category::get_category,
        category::create_category,
        category::update_category,
        category::delete_category,

        size::get_sizes,
        size::get_size,
        size::create_size,
        size::update_size,
        size::delete_size,

        color::get_colors,
        color::get_color,
        color::create_color,
        color::update_color,
        color::delete_color,

        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        order::get_orders,
        order::get_order,
        order::create_checkout,

        webhook::payment_webhook,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Store", description = "Store endpoints"),
        (name = "Billboard", description = "Billboard endpoints"),
        (name = "Category", description = "Category endpoints"),
        (name = "Size", description = "Size endpoints"),
        (name = "Color", description = "Color endpoints"),
        (name = "Product", description = "Product endpoints"),
        (name = "Order", description = "Order endpoints"),
        (name = "Checkout", description = "Checkout endpoints"),
        (name = "Webhook", description = "Payment webhook endpoint"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(Body::from(format!("Failed to encode metrics: {e}")))
            .unwrap();
    }

    Response::builder()
        .status(StatusCode::OK)
        .header(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )
        .body(Body::from(buffer))
        .unwrap()
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(store_routes(shared_state.clone()))
            .merge(billboard_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()))
            .merge(size_routes(shared_state.clone()))
            .merge(color_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(webhook_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📚 API Documentation available at:");
        println!("   📖 Swagger UI: http://localhost:{port}/swagger-ui");
        println!("   📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
