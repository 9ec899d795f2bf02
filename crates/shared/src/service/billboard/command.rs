use crate::{
    abstract_trait::{
        BillboardCommandServiceTrait, DynBillboardCommandRepository, DynStoreQueryRepository,
    },
    cache::CacheStore,
    domain::{
        requests::{CreateBillboardRequest, UpdateBillboardRequest},
        responses::{ApiResponse, BillboardResponse},
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

pub struct BillboardCommandService {
    command: DynBillboardCommandRepository,
    store_query: DynStoreQueryRepository,
    metrics: Arc<Mutex<Metrics>>,
    cache_store: Arc<CacheStore>,
}

impl BillboardCommandService {
    pub async fn new(
        command: DynBillboardCommandRepository,
        store_query: DynStoreQueryRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
        cache_store: Arc<CacheStore>,
    ) -> Self {
        registry.lock().await.register(
            "billboard_command_service_request_counter",
            "Total number of requests to the BillboardCommandService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "billboard_command_service_request_duration",
            "Histogram of request durations for the BillboardCommandService",
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
impl BillboardCommandServiceTrait for BillboardCommandService {
    async fn create_billboard(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &CreateBillboardRequest,
    ) -> Result<ApiResponse<BillboardResponse>, ServiceError> {
        let started = Instant::now();
        info!("🖼️ Creating billboard '{}' in store {store_id}", req.label);

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let billboard = match self.command.create_billboard(store_id, req).await {
            Ok(billboard) => billboard,
            Err(e) => {
                error!("❌ Failed to create billboard: {e:?}");
                self.record(Method::Post, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Post, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Billboard created successfully".to_string(),
            data: BillboardResponse::from(billboard),
        })
    }

    async fn update_billboard(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &UpdateBillboardRequest,
    ) -> Result<ApiResponse<BillboardResponse>, ServiceError> {
        let started = Instant::now();

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let billboard = match self.command.update_billboard(store_id, req).await {
            Ok(billboard) => billboard,
            Err(e) => {
                error!("❌ Failed to update billboard: {e:?}");
                self.record(Method::Put, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.cache_store
            .delete_from_cache(&format!("billboard:{store_id}:{}", billboard.billboard_id))
            .await;

        self.record(Method::Put, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Billboard updated successfully".to_string(),
            data: BillboardResponse::from(billboard),
        })
    }

    async fn delete_billboard(
        &self,
        user_id: &str,
        store_id: Uuid,
        billboard_id: Uuid,
    ) -> Result<ApiResponse<BillboardResponse>, ServiceError> {
        let started = Instant::now();

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let billboard = match self.command.delete_billboard(store_id, billboard_id).await {
            Ok(billboard) => billboard,
            Err(e) => {
                error!("❌ Failed to delete billboard {billboard_id}: {e:?}");
                self.record(Method::Delete, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.cache_store
            .delete_from_cache(&format!("billboard:{store_id}:{billboard_id}"))
            .await;

        self.record(Method::Delete, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Billboard deleted successfully".to_string(),
            data: BillboardResponse::from(billboard),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            BillboardCommandRepositoryTrait, DynBillboardCommandRepository,
            DynStoreQueryRepository, StoreQueryRepositoryTrait,
        },
        errors::RepositoryError,
        model::{Billboard, Store},
    };
    use std::sync::atomic::{AtomicBool, Ordering};

    struct FakeStoreQueryRepository {
        owner: Option<String>,
    }

    #[async_trait]
    impl StoreQueryRepositoryTrait for FakeStoreQueryRepository {
        async fn find_by_user(&self, _user_id: &str) -> Result<Vec<Store>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_by_id(
            &self,
            _store_id: Uuid,
            _user_id: &str,
        ) -> Result<Store, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn find_owned(
            &self,
            store_id: Uuid,
            user_id: &str,
        ) -> Result<Option<Store>, RepositoryError> {
            Ok(self
                .owner
                .as_deref()
                .filter(|owner| *owner == user_id)
                .map(|owner| Store {
                    store_id,
                    name: "test store".to_string(),
                    user_id: owner.to_string(),
                    created_at: None,
                    updated_at: None,
                }))
        }
    }

    struct RecordingBillboardCommandRepository {
        called: AtomicBool,
    }

    impl RecordingBillboardCommandRepository {
        fn billboard(store_id: Uuid) -> Billboard {
            Billboard {
                billboard_id: Uuid::new_v4(),
                store_id,
                label: "Summer sale".to_string(),
                image_url: "https://cdn.example.com/summer.png".to_string(),
                created_at: None,
                updated_at: None,
            }
        }
    }

    #[async_trait]
    impl BillboardCommandRepositoryTrait for RecordingBillboardCommandRepository {
        async fn create_billboard(
            &self,
            store_id: Uuid,
            _billboard: &CreateBillboardRequest,
        ) -> Result<Billboard, RepositoryError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(Self::billboard(store_id))
        }

        async fn update_billboard(
            &self,
            store_id: Uuid,
            _billboard: &UpdateBillboardRequest,
        ) -> Result<Billboard, RepositoryError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(Self::billboard(store_id))
        }

        async fn delete_billboard(
            &self,
            store_id: Uuid,
            _billboard_id: Uuid,
        ) -> Result<Billboard, RepositoryError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(Self::billboard(store_id))
        }
    }

    fn test_cache() -> Arc<CacheStore> {
        let pool = deadpool_redis::Config::from_url("redis://127.0.0.1:6379")
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .unwrap();
        Arc::new(CacheStore::new(pool))
    }

    async fn service_with(
        owner: Option<&str>,
    ) -> (BillboardCommandService, Arc<RecordingBillboardCommandRepository>) {
        let command = Arc::new(RecordingBillboardCommandRepository {
            called: AtomicBool::new(false),
        });
        let store_query = Arc::new(FakeStoreQueryRepository {
            owner: owner.map(str::to_string),
        }) as DynStoreQueryRepository;

        let service = BillboardCommandService::new(
            command.clone() as DynBillboardCommandRepository,
            store_query,
            Arc::new(Mutex::new(Metrics::new())),
            Arc::new(Mutex::new(Registry::default())),
            test_cache(),
        )
        .await;

        (service, command)
    }

    #[tokio::test]
    async fn rejects_create_when_caller_does_not_own_store() {
        let (service, command) = service_with(Some("user_owner")).await;

        let req = CreateBillboardRequest {
            label: "Summer sale".to_string(),
            image_url: "https://cdn.example.com/summer.png".to_string(),
        };

        let result = service
            .create_billboard("user_intruder", Uuid::new_v4(), &req)
            .await;

        assert!(matches!(result, Err(ServiceError::Unauthorized(_))));
        assert!(!command.called.load(Ordering::SeqCst), "no write may happen");
    }

    #[tokio::test]
    async fn allows_create_for_store_owner() {
        let (service, command) = service_with(Some("user_owner")).await;

        let req = CreateBillboardRequest {
            label: "Summer sale".to_string(),
            image_url: "https://cdn.example.com/summer.png".to_string(),
        };

        let result = service
            .create_billboard("user_owner", Uuid::new_v4(), &req)
            .await
            .unwrap();

        assert_eq!(result.status, "success");
        assert_eq!(result.data.label, "Summer sale");
        assert!(command.called.load(Ordering::SeqCst));
    }
}
