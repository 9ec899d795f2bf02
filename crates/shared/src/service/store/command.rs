use crate::{
    abstract_trait::{DynStoreCommandRepository, StoreCommandServiceTrait},
    domain::{
        requests::{CreateStoreRequest, UpdateStoreRequest},
        responses::{ApiResponse, StoreResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};
use uuid::Uuid;

pub struct StoreCommandService {
    command: DynStoreCommandRepository,
    metrics: Arc<Mutex<Metrics>>,
}

impl StoreCommandService {
    pub async fn new(
        command: DynStoreCommandRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        registry.lock().await.register(
            "store_command_service_request_counter",
            "Total number of requests to the StoreCommandService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "store_command_service_request_duration",
            "Histogram of request durations for the StoreCommandService",
            metrics.lock().await.request_duration.clone(),
        );

        Self { command, metrics }
    }

    async fn record(&self, method: Method, status: Status, started: Instant) {
        self.metrics
            .lock()
            .await
            .record(method, status, started.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl StoreCommandServiceTrait for StoreCommandService {
    async fn create_store(
        &self,
        user_id: &str,
        req: &CreateStoreRequest,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError> {
        let started = Instant::now();
        info!("🏪 Creating store '{}' for user {user_id}", req.name);

        let store = match self.command.create_store(user_id, req).await {
            Ok(store) => store,
            Err(e) => {
                error!("❌ Failed to create store: {e:?}");
                self.record(Method::Post, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Post, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Store created successfully".to_string(),
            data: StoreResponse::from(store),
        })
    }

    async fn update_store(
        &self,
        user_id: &str,
        req: &UpdateStoreRequest,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError> {
        let started = Instant::now();

        let store = match self.command.update_store(user_id, req).await {
            Ok(store) => store,
            Err(e) => {
                error!("❌ Failed to update store: {e:?}");
                self.record(Method::Put, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Put, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Store updated successfully".to_string(),
            data: StoreResponse::from(store),
        })
    }

    async fn delete_store(
        &self,
        user_id: &str,
        store_id: Uuid,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError> {
        let started = Instant::now();

        let store = match self.command.delete_store(store_id, user_id).await {
            Ok(store) => store,
            Err(e) => {
                error!("❌ Failed to delete store {store_id}: {e:?}");
                self.record(Method::Delete, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Delete, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Store deleted successfully".to_string(),
            data: StoreResponse::from(store),
        })
    }
}
