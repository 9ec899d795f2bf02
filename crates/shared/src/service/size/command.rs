use crate::{
    abstract_trait::{DynSizeCommandRepository, DynStoreQueryRepository, SizeCommandServiceTrait},
    domain::{
        requests::{CreateSizeRequest, UpdateSizeRequest},
        responses::{ApiResponse, SizeResponse},
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

pub struct SizeCommandService {
    command: DynSizeCommandRepository,
    store_query: DynStoreQueryRepository,
    metrics: Arc<Mutex<Metrics>>,
}

impl SizeCommandService {
    pub async fn new(
        command: DynSizeCommandRepository,
        store_query: DynStoreQueryRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        registry.lock().await.register(
            "size_command_service_request_counter",
            "Total number of requests to the SizeCommandService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "size_command_service_request_duration",
            "Histogram of request durations for the SizeCommandService",
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
impl SizeCommandServiceTrait for SizeCommandService {
    async fn create_size(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &CreateSizeRequest,
    ) -> Result<ApiResponse<SizeResponse>, ServiceError> {
        let started = Instant::now();
        info!("📏 Creating size '{}' in store {store_id}", req.name);

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let size = match self.command.create_size(store_id, req).await {
            Ok(size) => size,
            Err(e) => {
                error!("❌ Failed to create size: {e:?}");
                self.record(Method::Post, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Post, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Size created successfully".to_string(),
            data: SizeResponse::from(size),
        })
    }

    async fn update_size(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &UpdateSizeRequest,
    ) -> Result<ApiResponse<SizeResponse>, ServiceError> {
        let started = Instant::now();

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let size = match self.command.update_size(store_id, req).await {
            Ok(size) => size,
            Err(e) => {
                error!("❌ Failed to update size: {e:?}");
                self.record(Method::Put, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Put, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Size updated successfully".to_string(),
            data: SizeResponse::from(size),
        })
    }

    async fn delete_size(
        &self,
        user_id: &str,
        store_id: Uuid,
        size_id: Uuid,
    ) -> Result<ApiResponse<SizeResponse>, ServiceError> {
        let started = Instant::now();

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let size = match self.command.delete_size(store_id, size_id).await {
            Ok(size) => size,
            Err(e) => {
                error!("❌ Failed to delete size {size_id}: {e:?}");
                self.record(Method::Delete, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Delete, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Size deleted successfully".to_string(),
            data: SizeResponse::from(size),
        })
    }
}
