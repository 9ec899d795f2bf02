use crate::{
    abstract_trait::DynWebhookVerifier,
    cache::CacheStore,
    config::{ConnectionPool, RedisClient},
    repository::{
        BillboardRepository, CategoryRepository, ColorRepository, OrderRepository,
        ProductRepository, SizeRepository, StoreRepository,
    },
    service::{
        BillboardService, CategoryService, ColorService, OrderService, OrderServiceDeps,
        ProductService, SizeService, StoreService,
    },
    utils::Metrics,
};
use anyhow::Result;
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub store_service: StoreService,
    pub billboard_service: BillboardService,
    pub category_service: CategoryService,
    pub size_service: SizeService,
    pub color_service: ColorService,
    pub product_service: ProductService,
    pub order_service: OrderService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("store_service", &"<StoreService>")
            .field("billboard_service", &"<BillboardService>")
            .field("category_service", &"<CategoryService>")
            .field("size_service", &"<SizeService>")
            .field("color_service", &"<ColorService>")
            .field("product_service", &"<ProductService>")
            .field("order_service", &"<OrderService>")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub webhook_verifier: DynWebhookVerifier,
    pub metrics: Arc<Mutex<Metrics>>,
    pub registry: Arc<Mutex<Registry>>,
    pub redis: RedisClient,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps) -> Result<Self> {
        let DependenciesInjectDeps {
            pool,
            webhook_verifier,
            metrics,
            registry,
            redis,
        } = deps;

        let store_repository = StoreRepository::new(pool.clone());
        let billboard_repository = BillboardRepository::new(pool.clone());
        let category_repository = CategoryRepository::new(pool.clone());
        let size_repository = SizeRepository::new(pool.clone());
        let color_repository = ColorRepository::new(pool.clone());
        let product_repository = ProductRepository::new(pool.clone());
        let order_repository = OrderRepository::new(pool.clone());

        let cache = Arc::new(CacheStore::new(redis.pool.clone()));

        let store_service = StoreService::new(
            store_repository.query.clone(),
            store_repository.command.clone(),
            metrics.clone(),
            registry.clone(),
        )
        .await?;

        let billboard_service = BillboardService::new(
            billboard_repository.query.clone(),
            billboard_repository.command.clone(),
            store_repository.query.clone(),
            metrics.clone(),
            registry.clone(),
            cache.clone(),
        )
        .await?;

        let category_service = CategoryService::new(
            category_repository.query.clone(),
            category_repository.command.clone(),
            store_repository.query.clone(),
            metrics.clone(),
            registry.clone(),
            cache.clone(),
        )
        .await?;

        let size_service = SizeService::new(
            size_repository.query.clone(),
            size_repository.command.clone(),
            store_repository.query.clone(),
            metrics.clone(),
            registry.clone(),
        )
        .await?;

        let color_service = ColorService::new(
            color_repository.query.clone(),
            color_repository.command.clone(),
            store_repository.query.clone(),
            metrics.clone(),
            registry.clone(),
        )
        .await?;

        let product_service = ProductService::new(
            product_repository.query.clone(),
            product_repository.command.clone(),
            store_repository.query.clone(),
            metrics.clone(),
            registry.clone(),
            cache.clone(),
        )
        .await?;

        let order_deps = OrderServiceDeps {
            query: order_repository.query.clone(),
            command: order_repository.command.clone(),
            product_command: product_repository.command.clone(),
            store_query: store_repository.query.clone(),
            webhook_verifier,
            metrics: metrics.clone(),
            registry: registry.clone(),
        };

        let order_service = OrderService::new(order_deps).await?;

        Ok(Self {
            store_service,
            billboard_service,
            category_service,
            size_service,
            color_service,
            product_service,
            order_service,
        })
    }
}
