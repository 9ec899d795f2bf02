use crate::{
    abstract_trait::{ColorCommandServiceTrait, DynColorCommandRepository, DynStoreQueryRepository},
    domain::{
        requests::{CreateColorRequest, UpdateColorRequest},
        responses::{ApiResponse, ColorResponse},
    },
    errors::ServiceError,
    service::ensure_store_owner,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};
use uuid::Uuid;

pub struct ColorCommandService {
    command: DynColorCommandRepository,
    store_query: DynStoreQueryRepository,
    metrics: Arc<Mutex<Metrics>>,
}

impl ColorCommandService {
    pub async fn new(
        command: DynColorCommandRepository,
        store_query: DynStoreQueryRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        registry.lock().await.register(
            "color_command_service_request_counter",
            "Total number of requests to the ColorCommandService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "color_command_service_request_duration",
            "Histogram of request durations for the ColorCommandService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            command,
            store_query,
            metrics,
        }
    }

    async fn record(&self, method: Method, status: Status, started: Instant) {
        self.metrics
            .lock()
            .await
            .record(method, status, started.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl ColorCommandServiceTrait for ColorCommandService {
    async fn create_color(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &CreateColorRequest,
    ) -> Result<ApiResponse<ColorResponse>, ServiceError> {
        let started = Instant::now();
        info!("🎨 Creating color '{}' in store {store_id}", req.name);

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let color = match self.command.create_color(store_id, req).await {
            Ok(color) => color,
            Err(e) => {
                error!("❌ Failed to create color: {e:?}");
                self.record(Method::Post, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Post, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Color created successfully".to_string(),
            data: ColorResponse::from(color),
        })
    }

    async fn update_color(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &UpdateColorRequest,
    ) -> Result<ApiResponse<ColorResponse>, ServiceError> {
        let started = Instant::now();

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let color = match self.command.update_color(store_id, req).await {
            Ok(color) => color,
            Err(e) => {
                error!("❌ Failed to update color: {e:?}");
                self.record(Method::Put, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Put, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Color updated successfully".to_string(),
            data: ColorResponse::from(color),
        })
    }

    async fn delete_color(
        &self,
        user_id: &str,
        store_id: Uuid,
        color_id: Uuid,
    ) -> Result<ApiResponse<ColorResponse>, ServiceError> {
        let started = Instant::now();

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let color = match self.command.delete_color(store_id, color_id).await {
            Ok(color) => color,
            Err(e) => {
                error!("❌ Failed to delete color {color_id}: {e:?}");
                self.record(Method::Delete, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Delete, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Color deleted successfully".to_string(),
            data: ColorResponse::from(color),
        })
    }
}
