use crate::{
    abstract_trait::{DynStoreQueryRepository, StoreQueryServiceTrait},
    domain::responses::{ApiResponse, StoreResponse},
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};
use uuid::Uuid;

pub struct StoreQueryService {
    query: DynStoreQueryRepository,
    metrics: Arc<Mutex<Metrics>>,
}

impl StoreQueryService {
    pub async fn new(
        query: DynStoreQueryRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        registry.lock().await.register(
            "store_query_service_request_counter",
            "Total number of requests to the StoreQueryService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "store_query_service_request_duration",
            "Histogram of request durations for the StoreQueryService",
            metrics.lock().await.request_duration.clone(),
        );

        Self { query, metrics }
    }

    async fn record(&self, method: Method, status: Status, started: Instant) {
        self.metrics
            .lock()
            .await
            .record(method, status, started.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl StoreQueryServiceTrait for StoreQueryService {
    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<ApiResponse<Vec<StoreResponse>>, ServiceError> {
        let started = Instant::now();

        let stores = match self.query.find_by_user(user_id).await {
            Ok(stores) => stores,
            Err(e) => {
                error!("❌ Failed to fetch stores for user {user_id}: {e:?}");
                self.record(Method::Get, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<StoreResponse> = stores.into_iter().map(StoreResponse::from).collect();

        info!("✅ Retrieved {} stores for user {user_id}", data.len());
        self.record(Method::Get, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Stores retrieved successfully".to_string(),
            data,
        })
    }

    async fn find_by_id(
        &self,
        user_id: &str,
        store_id: Uuid,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError> {
        let started = Instant::now();

        let store = match self.query.find_by_id(store_id, user_id).await {
            Ok(store) => store,
            Err(e) => {
                error!("❌ Failed to fetch store {store_id}: {e:?}");
                self.record(Method::Get, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Get, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Store retrieved successfully".to_string(),
            data: StoreResponse::from(store),
        })
    }
}
