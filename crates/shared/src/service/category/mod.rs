mod command;
mod query;

use self::command::CategoryCommandService;
use self::query::CategoryQueryService;
use crate::{
    abstract_trait::{
        DynCategoryCommandRepository, DynCategoryCommandService, DynCategoryQueryRepository,
        DynCategoryQueryService, DynStoreQueryRepository,
    },
    cache::CacheStore,
    utils::Metrics,
};
use anyhow::Result;
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct CategoryService {
    pub query: DynCategoryQueryService,
    pub command: DynCategoryCommandService,
}

impl fmt::Debug for CategoryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryService")
            .field("query", &"Arc<dyn CategoryQueryServiceTrait>")
            .field("command", &"Arc<dyn CategoryCommandServiceTrait>")
            .finish()
    }
}

impl CategoryService {
    pub async fn new(
        query: DynCategoryQueryRepository,
        command: DynCategoryCommandRepository,
        store_query: DynStoreQueryRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
        cache_store: Arc<CacheStore>,
    ) -> Result<Self> {
        let query_service = Arc::new(
            CategoryQueryService::new(
                query,
                store_query.clone(),
                metrics.clone(),
                registry.clone(),
                cache_store.clone(),
            )
            .await,
        ) as DynCategoryQueryService;

        let command_service = Arc::new(
            CategoryCommandService::new(
                command,
                store_query,
                metrics.clone(),
                registry.clone(),
                cache_store.clone(),
            )
            .await,
        ) as DynCategoryCommandService;

        Ok(Self {
            query: query_service,
            command: command_service,
        })
    }
}
