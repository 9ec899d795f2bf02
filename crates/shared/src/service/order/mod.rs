mod command;
mod query;

use self::command::OrderCommandService;
use self::query::OrderQueryService;
use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
        DynOrderQueryService, DynProductCommandRepository, DynStoreQueryRepository,
        DynWebhookVerifier,
    },
    utils::Metrics,
};
use anyhow::Result;
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct OrderServiceDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
    pub product_command: DynProductCommandRepository,
    pub store_query: DynStoreQueryRepository,
    pub webhook_verifier: DynWebhookVerifier,
    pub metrics: Arc<Mutex<Metrics>>,
    pub registry: Arc<Mutex<Registry>>,
}

#[derive(Clone)]
pub struct OrderService {
    pub query: DynOrderQueryService,
    pub command: DynOrderCommandService,
}

impl fmt::Debug for OrderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderService")
            .field("query", &"Arc<dyn OrderQueryServiceTrait>")
            .field("command", &"Arc<dyn OrderCommandServiceTrait>")
            .finish()
    }
}

impl OrderService {
    pub async fn new(deps: OrderServiceDeps) -> Result<Self> {
        let OrderServiceDeps {
            query,
            command,
            product_command,
            store_query,
            webhook_verifier,
            metrics,
            registry,
        } = deps;

        let query_service = Arc::new(
            OrderQueryService::new(query, store_query, metrics.clone(), registry.clone()).await,
        ) as DynOrderQueryService;

        let command_service = Arc::new(
            OrderCommandService::new(
                command,
                product_command,
                webhook_verifier,
                metrics.clone(),
                registry.clone(),
            )
            .await,
        ) as DynOrderCommandService;

        Ok(Self {
            query: query_service,
            command: command_service,
        })
    }
}
