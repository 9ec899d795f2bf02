use crate::{
    abstract_trait::{DynJwtService, DynWebhookVerifier},
    config::{Config, ConnectionPool, JwtConfig, RedisClient, WebhookVerifier},
    di::{DependenciesInject, DependenciesInjectDeps},
    utils::{Metrics, SystemMetrics, run_metrics_collector},
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
    pub webhook_verifier: DynWebhookVerifier,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Arc<Mutex<Metrics>>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("jwt_config", &"<dyn JwtService>")
            .field("webhook_verifier", &"<dyn WebhookVerifier>")
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let webhook_verifier =
            Arc::new(WebhookVerifier::new(&config.webhook_secret)) as DynWebhookVerifier;
        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Arc::new(Mutex::new(Metrics::new()));
        let system_metrics = Arc::new(SystemMetrics::new());

        let redis = RedisClient::new(&config.redis)
            .await
            .context("Failed to connect to Redis")?;

        redis.ping().context("Failed to ping Redis server")?;

        let deps = DependenciesInjectDeps {
            pool: pool.clone(),
            webhook_verifier: webhook_verifier.clone(),
            metrics: metrics.clone(),
            registry: registry.clone(),
            redis: redis.clone(),
        };

        let di_container = DependenciesInject::new(deps)
            .await
            .context("Failed to initialize dependency injection container")?;

        {
            let mut registry_guard = registry.lock().await;
            system_metrics.register(&mut registry_guard);
        }

        tokio::spawn(run_metrics_collector(system_metrics.clone()));

        Ok(Self {
            di_container,
            jwt_config,
            webhook_verifier,
            registry,
            metrics,
            system_metrics,
        })
    }
}
