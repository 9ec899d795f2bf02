use crate::{
    abstract_trait::{
        CategoryCommandServiceTrait, DynCategoryCommandRepository, DynStoreQueryRepository,
    },
    cache::CacheStore,
    domain::{
        requests::{CreateCategoryRequest, UpdateCategoryRequest},
        responses::{ApiResponse, CategoryResponse},
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

pub struct CategoryCommandService {
    command: DynCategoryCommandRepository,
    store_query: DynStoreQueryRepository,
    metrics: Arc<Mutex<Metrics>>,
    cache_store: Arc<CacheStore>,
}

impl CategoryCommandService {
    pub async fn new(
        command: DynCategoryCommandRepository,
        store_query: DynStoreQueryRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
        cache_store: Arc<CacheStore>,
    ) -> Self {
        registry.lock().await.register(
            "category_command_service_request_counter",
            "Total number of requests to the CategoryCommandService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "category_command_service_request_duration",
            "Histogram of request durations for the CategoryCommandService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            command,
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
impl CategoryCommandServiceTrait for CategoryCommandService {
    async fn create_category(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let started = Instant::now();
        info!("🏷️ Creating category '{}' in store {store_id}", req.name);

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let category = match self.command.create_category(store_id, req).await {
            Ok(category) => category,
            Err(e) => {
                error!("❌ Failed to create category: {e:?}");
                self.record(Method::Post, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Post, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Category created successfully".to_string(),
            data: CategoryResponse::from(category),
        })
    }

    async fn update_category(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let started = Instant::now();

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let category = match self.command.update_category(store_id, req).await {
            Ok(category) => category,
            Err(e) => {
                error!("❌ Failed to update category: {e:?}");
                self.record(Method::Put, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.cache_store
            .delete_from_cache(&format!("category:{store_id}:{}", category.category_id))
            .await;

        self.record(Method::Put, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Category updated successfully".to_string(),
            data: CategoryResponse::from(category),
        })
    }

    async fn delete_category(
        &self,
        user_id: &str,
        store_id: Uuid,
        category_id: Uuid,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let started = Instant::now();

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let category = match self.command.delete_category(store_id, category_id).await {
            Ok(category) => category,
            Err(e) => {
                error!("❌ Failed to delete category {category_id}: {e:?}");
                self.record(Method::Delete, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.cache_store
            .delete_from_cache(&format!("category:{store_id}:{category_id}"))
            .await;

        self.record(Method::Delete, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Category deleted successfully".to_string(),
            data: CategoryResponse::from(category),
        })
    }
}
