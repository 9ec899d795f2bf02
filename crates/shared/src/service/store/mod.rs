mod command;
mod query;

use self::command::StoreCommandService;
use self::query::StoreQueryService;
use crate::{
    abstract_trait::{
        DynStoreCommandRepository, DynStoreCommandService, DynStoreQueryRepository,
        DynStoreQueryService,
    },
    utils::Metrics,
};
use anyhow::Result;
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct StoreService {
    pub query: DynStoreQueryService,
    pub command: DynStoreCommandService,
}

impl fmt::Debug for StoreService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreService")
            .field("query", &"Arc<dyn StoreQueryServiceTrait>")
            .field("command", &"Arc<dyn StoreCommandServiceTrait>")
            .finish()
    }
}

impl StoreService {
    pub async fn new(
        query: DynStoreQueryRepository,
        command: DynStoreCommandRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
    ) -> Result<Self> {
        let query_service = Arc::new(
            StoreQueryService::new(query, metrics.clone(), registry.clone()).await,
        ) as DynStoreQueryService;

        let command_service =
            Arc::new(StoreCommandService::new(command, metrics.clone(), registry.clone()).await)
                as DynStoreCommandService;

        Ok(Self {
            query: query_service,
            command: command_service,
        })
    }
}
