mod command;
mod query;

use self::command::BillboardCommandService;
use self::query::BillboardQueryService;
use crate::{
    abstract_trait::{
        DynBillboardCommandRepository, DynBillboardCommandService, DynBillboardQueryRepository,
        DynBillboardQueryService, DynStoreQueryRepository,
    },
    cache::CacheStore,
    utils::Metrics,
};
use anyhow::Result;
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct BillboardService {
    pub query: DynBillboardQueryService,
    pub command: DynBillboardCommandService,
}

impl fmt::Debug for BillboardService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BillboardService")
            .field("query", &"Arc<dyn BillboardQueryServiceTrait>")
            .field("command", &"Arc<dyn BillboardCommandServiceTrait>")
            .finish()
    }
}

impl BillboardService {
    pub async fn new(
        query: DynBillboardQueryRepository,
        command: DynBillboardCommandRepository,
        store_query: DynStoreQueryRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
        cache_store: Arc<CacheStore>,
    ) -> Result<Self> {
        let query_service = Arc::new(
            BillboardQueryService::new(
                query,
                store_query.clone(),
                metrics.clone(),
                registry.clone(),
                cache_store.clone(),
            )
            .await,
        ) as DynBillboardQueryService;

        let command_service = Arc::new(
            BillboardCommandService::new(
                command,
                store_query,
                metrics.clone(),
                registry.clone(),
                cache_store.clone(),
            )
            .await,
        ) as DynBillboardCommandService;

        Ok(Self {
            query: query_service,
            command: command_service,
        })
    }
}
