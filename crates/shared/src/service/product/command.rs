use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynStoreQueryRepository, ProductCommandServiceTrait,
    },
    cache::CacheStore,
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
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

pub struct ProductCommandService {
    command: DynProductCommandRepository,
    store_query: DynStoreQueryRepository,
    metrics: Arc<Mutex<Metrics>>,
    cache_store: Arc<CacheStore>,
}

impl ProductCommandService {
    pub async fn new(
        command: DynProductCommandRepository,
        store_query: DynStoreQueryRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
        cache_store: Arc<CacheStore>,
    ) -> Self {
        registry.lock().await.register(
            "product_command_service_request_counter",
            "Total number of requests to the ProductCommandService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "product_command_service_request_duration",
            "Histogram of request durations for the ProductCommandService",
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
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let started = Instant::now();
        info!("📦 Creating product '{}' in store {store_id}", req.name);

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let (product, images) = match self.command.create_product(store_id, req).await {
            Ok(res) => res,
            Err(e) => {
                error!("❌ Failed to create product: {e:?}");
                self.record(Method::Post, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Post, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product created successfully".to_string(),
            data: ProductResponse::from_model(product, images),
        })
    }

    async fn update_product(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let started = Instant::now();

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let (product, images) = match self.command.update_product(store_id, req).await {
            Ok(res) => res,
            Err(e) => {
                error!("❌ Failed to update product: {e:?}");
                self.record(Method::Put, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.cache_store
            .delete_from_cache(&format!("product:{store_id}:{}", product.product_id))
            .await;

        self.record(Method::Put, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product updated successfully".to_string(),
            data: ProductResponse::from_model(product, images),
        })
    }

    async fn delete_product(
        &self,
        user_id: &str,
        store_id: Uuid,
        product_id: Uuid,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let started = Instant::now();

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let product = match self.command.delete_product(store_id, product_id).await {
            Ok(product) => product,
            Err(e) => {
                error!("❌ Failed to delete product {product_id}: {e:?}");
                self.record(Method::Delete, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.cache_store
            .delete_from_cache(&format!("product:{store_id}:{product_id}"))
            .await;

        self.record(Method::Delete, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product deleted successfully".to_string(),
            data: ProductResponse::from_model(product, Vec::new()),
        })
    }
}
