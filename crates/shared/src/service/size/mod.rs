mod command;
mod query;

use self::command::SizeCommandService;
use self::query::SizeQueryService;
use crate::{
    abstract_trait::{
        DynSizeCommandRepository, DynSizeCommandService, DynSizeQueryRepository,
        DynSizeQueryService, DynStoreQueryRepository,
    },
    utils::Metrics,
};
use anyhow::Result;
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct SizeService {
    pub query: DynSizeQueryService,
    pub command: DynSizeCommandService,
}

impl fmt::Debug for SizeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizeService")
            .field("query", &"Arc<dyn SizeQueryServiceTrait>")
            .field("command", &"Arc<dyn SizeCommandServiceTrait>")
            .finish()
    }
}

impl SizeService {
    pub async fn new(
        query: DynSizeQueryRepository,
        command: DynSizeCommandRepository,
        store_query: DynStoreQueryRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
    ) -> Result<Self> {
        let query_service = Arc::new(
            SizeQueryService::new(
                query,
                store_query.clone(),
                metrics.clone(),
                registry.clone(),
            )
            .await,
        ) as DynSizeQueryService;

        let command_service = Arc::new(
            SizeCommandService::new(command, store_query, metrics.clone(), registry.clone()).await,
        ) as DynSizeCommandService;

        Ok(Self {
            query: query_service,
            command: command_service,
        })
    }
}
