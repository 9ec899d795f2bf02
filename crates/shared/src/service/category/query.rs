use crate::{
    abstract_trait::{
        CategoryQueryServiceTrait, DynCategoryQueryRepository, DynStoreQueryRepository,
    },
    cache::CacheStore,
    domain::{
        requests::FindAllCategories,
        responses::{ApiResponse, ApiResponsePagination, CategoryResponse, Pagination},
    },
    errors::ServiceError,
    service::ensure_store_owner,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use chrono::Duration;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};
use uuid::Uuid;

pub struct CategoryQueryService {
    query: DynCategoryQueryRepository,
    store_query: DynStoreQueryRepository,
    metrics: Arc<Mutex<Metrics>>,
    cache_store: Arc<CacheStore>,
}

impl CategoryQueryService {
    pub async fn new(
        query: DynCategoryQueryRepository,
        store_query: DynStoreQueryRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
        cache_store: Arc<CacheStore>,
    ) -> Self {
        registry.lock().await.register(
            "category_query_service_request_counter",
            "Total number of requests to the CategoryQueryService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "category_query_service_request_duration",
            "Histogram of request durations for the CategoryQueryService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            query,
            store_query,
            metrics,
            cache_store,
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
impl CategoryQueryServiceTrait for CategoryQueryService {
    async fn find_all(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &FindAllCategories,
    ) -> Result<ApiResponsePagination<Vec<CategoryResponse>>, ServiceError> {
        let started = Instant::now();

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let page = req.page.max(1);
        let page_size = req.page_size.max(1);

        let (categories, total) = match self.query.find_all(store_id, req).await {
            Ok(res) => res,
            Err(e) => {
                error!("❌ Failed to fetch categories: {e:?}");
                self.record(Method::Get, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<CategoryResponse> =
            categories.into_iter().map(CategoryResponse::from).collect();
        let total_pages = (((total - 1) / page_size as i64) + 1) as i32;

        self.record(Method::Get, Status::Success, started).await;

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Categories retrieved successfully".to_string(),
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
        store_id: Uuid,
        category_id: Uuid,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let started = Instant::now();

        let cache_key = format!("category:{store_id}:{category_id}");

        if let Some(cached) = self
            .cache_store
            .get_from_cache::<ApiResponse<CategoryResponse>>(&cache_key)
            .await
        {
            info!("✅ Category {category_id} served from cache");
            self.record(Method::Get, Status::Success, started).await;
            return Ok(cached);
        }

        let category = match self.query.find_by_id(store_id, category_id).await {
            Ok(category) => category,
            Err(e) => {
                error!("❌ Failed to fetch category {category_id}: {e:?}");
                self.record(Method::Get, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        let response = ApiResponse {
            status: "success".to_string(),
            message: "Category retrieved successfully".to_string(),
            data: CategoryResponse::from(category),
        };

        self.cache_store
            .set_to_cache(&cache_key, &response, Duration::minutes(5))
            .await;

        self.record(Method::Get, Status::Success, started).await;

        Ok(response)
    }
}
