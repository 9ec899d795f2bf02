mod command;
mod query;

use self::command::ColorCommandService;
use self::query::ColorQueryService;
use crate::{
    abstract_trait::{
        DynColorCommandRepository, DynColorCommandService, DynColorQueryRepository,
        DynColorQueryService, DynStoreQueryRepository,
    },
    utils::Metrics,
};
use anyhow::Result;
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct ColorService {
    pub query: DynColorQueryService,
    pub command: DynColorCommandService,
}

impl fmt::Debug for ColorService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorService")
            .field("query", &"Arc<dyn ColorQueryServiceTrait>")
            .field("command", &"Arc<dyn ColorCommandServiceTrait>")
            .finish()
    }
}

impl ColorService {
    pub async fn new(
        query: DynColorQueryRepository,
        command: DynColorCommandRepository,
        store_query: DynStoreQueryRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
    ) -> Result<Self> {
        let query_service = Arc::new(
            ColorQueryService::new(
                query,
                store_query.clone(),
                metrics.clone(),
                registry.clone(),
            )
            .await,
        ) as DynColorQueryService;

        let command_service = Arc::new(
            ColorCommandService::new(command, store_query, metrics.clone(), registry.clone())
                .await,
        ) as DynColorCommandService;

        Ok(Self {
            query: query_service,
            command: command_service,
        })
    }
}
