use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    cache::CacheStore,
    domain::{
        requests::FindAllProducts,
        responses::{ApiResponse, ApiResponsePagination, Pagination, ProductResponse},
    },
    errors::ServiceError,
    model::{Product, ProductImage},
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use chrono::Duration;
use prometheus_client::registry::Registry;
use std::{collections::HashMap, sync::Arc};
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};
use uuid::Uuid;

pub struct ProductQueryService {
    query: DynProductQueryRepository,
    metrics: Arc<Mutex<Metrics>>,
    cache_store: Arc<CacheStore>,
}

impl ProductQueryService {
    pub async fn new(
        query: DynProductQueryRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
        cache_store: Arc<CacheStore>,
    ) -> Self {
        registry.lock().await.register(
            "product_query_service_request_counter",
            "Total number of requests to the ProductQueryService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "product_query_service_request_duration",
            "Histogram of request durations for the ProductQueryService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            query,
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

    fn with_images(
        products: Vec<Product>,
        images: Vec<ProductImage>,
    ) -> Vec<ProductResponse> {
        let mut by_product: HashMap<Uuid, Vec<ProductImage>> = HashMap::new();
        for image in images {
            by_product.entry(image.product_id).or_default().push(image);
        }

        products
            .into_iter()
            .map(|product| {
                let images = by_product.remove(&product.product_id).unwrap_or_default();
                ProductResponse::from_model(product, images)
            })
            .collect()
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        store_id: Uuid,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        let started = Instant::now();

        let page = req.page.max(1);
        let page_size = req.page_size.max(1);

        let cache_key = format!(
            "product:find_all:{store_id}:page:{page}:size:{page_size}:search:{}:category:{:?}:psize:{:?}:color:{:?}:featured:{:?}",
            req.search, req.category_id, req.size_id, req.color_id, req.is_featured
        );

        if let Some(cached) = self
            .cache_store
            .get_from_cache::<ApiResponsePagination<Vec<ProductResponse>>>(&cache_key)
            .await
        {
            info!("✅ Found {} products in cache", cached.data.len());
            self.record(Method::Get, Status::Success, started).await;
            return Ok(cached);
        }

        let (products, total) = match self.query.find_all(store_id, req).await {
            Ok(res) => res,
            Err(e) => {
                error!("❌ Failed to fetch products: {e:?}");
                self.record(Method::Get, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        let product_ids: Vec<Uuid> = products.iter().map(|p| p.product_id).collect();
        let images = match self.query.find_images(&product_ids).await {
            Ok(images) => images,
            Err(e) => {
                error!("❌ Failed to fetch product images: {e:?}");
                self.record(Method::Get, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        let data = Self::with_images(products, images);
        let total_pages = (((total - 1) / page_size as i64) + 1) as i32;

        let response = ApiResponsePagination {
            status: "success".to_string(),
            message: "Products retrieved successfully".to_string(),
            data,
            pagination: Pagination {
                page,
                page_size,
                total_items: total,
                total_pages,
            },
        };

        self.cache_store
            .set_to_cache(&cache_key, &response, Duration::minutes(5))
            .await;

        self.record(Method::Get, Status::Success, started).await;

        Ok(response)
    }

    async fn find_by_id(
        &self,
        store_id: Uuid,
        product_id: Uuid,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let started = Instant::now();

        let cache_key = format!("product:{store_id}:{product_id}");

        if let Some(cached) = self
            .cache_store
            .get_from_cache::<ApiResponse<ProductResponse>>(&cache_key)
            .await
        {
            info!("✅ Product {product_id} served from cache");
            self.record(Method::Get, Status::Success, started).await;
            return Ok(cached);
        }

        let product = match self.query.find_by_id(store_id, product_id).await {
            Ok(product) => product,
            Err(e) => {
                error!("❌ Failed to fetch product {product_id}: {e:?}");
                self.record(Method::Get, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        let images = match self.query.find_images(&[product_id]).await {
            Ok(images) => images,
            Err(e) => {
                error!("❌ Failed to fetch images for product {product_id}: {e:?}");
                self.record(Method::Get, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        let response = ApiResponse {
            status: "success".to_string(),
            message: "Product retrieved successfully".to_string(),
            data: ProductResponse::from_model(product, images),
        };

        self.cache_store
            .set_to_cache(&cache_key, &response, Duration::minutes(5))
            .await;

        self.record(Method::Get, Status::Success, started).await;

        Ok(response)
    }
}
