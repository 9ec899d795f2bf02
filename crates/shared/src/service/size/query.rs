use crate::{
    abstract_trait::{DynSizeQueryRepository, DynStoreQueryRepository, SizeQueryServiceTrait},
    domain::{
        requests::FindAllSizes,
        responses::{ApiResponse, ApiResponsePagination, Pagination, SizeResponse},
    },
    errors::ServiceError,
    service::ensure_store_owner,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::error;
use uuid::Uuid;

pub struct SizeQueryService {
    query: DynSizeQueryRepository,
    store_query: DynStoreQueryRepository,
    metrics: Arc<Mutex<Metrics>>,
}

impl SizeQueryService {
    pub async fn new(
        query: DynSizeQueryRepository,
        store_query: DynStoreQueryRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        registry.lock().await.register(
            "size_query_service_request_counter",
            "Total number of requests to the SizeQueryService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "size_query_service_request_duration",
            "Histogram of request durations for the SizeQueryService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            query,
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
impl SizeQueryServiceTrait for SizeQueryService {
    async fn find_all(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &FindAllSizes,
    ) -> Result<ApiResponsePagination<Vec<SizeResponse>>, ServiceError> {
        let started = Instant::now();

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let page = req.page.max(1);
        let page_size = req.page_size.max(1);

        let (sizes, total) = match self.query.find_all(store_id, req).await {
            Ok(res) => res,
            Err(e) => {
                error!("❌ Failed to fetch sizes: {e:?}");
                self.record(Method::Get, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<SizeResponse> = sizes.into_iter().map(SizeResponse::from).collect();
        let total_pages = (((total - 1) / page_size as i64) + 1) as i32;

        self.record(Method::Get, Status::Success, started).await;

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Sizes retrieved successfully".to_string(),
            data,
            pagination: Pagination {
                page,
                page_size,
                total_items: total,
                total_pages,
            },
        })
    }

    async fn find_by_id(
        &self,
        user_id: &str,
        store_id: Uuid,
        size_id: Uuid,
    ) -> Result<ApiResponse<SizeResponse>, ServiceError> {
        let started = Instant::now();

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let size = match self.query.find_by_id(store_id, size_id).await {
            Ok(size) => size,
            Err(e) => {
                error!("❌ Failed to fetch size {size_id}: {e:?}");
                self.record(Method::Get, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Get, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Size retrieved successfully".to_string(),
            data: SizeResponse::from(size),
        })
    }
}
