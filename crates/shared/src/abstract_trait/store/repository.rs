use crate::{
    domain::requests::{CreateStoreRequest, UpdateStoreRequest},
    errors::RepositoryError,
    model::Store,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait StoreQueryRepositoryTrait {
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Store>, RepositoryError>;
    async fn find_by_id(&self, store_id: Uuid, user_id: &str) -> Result<Store, RepositoryError>;
    async fn find_owned(
        &self,
        store_id: Uuid,
        user_id: &str,
    ) -> Result<Option<Store>, RepositoryError>;
}

pub type DynStoreQueryRepository = Arc<dyn StoreQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait StoreCommandRepositoryTrait {
    async fn create_store(
        &self,
        user_id: &str,
        store: &CreateStoreRequest,
    ) -> Result<Store, RepositoryError>;
    async fn update_store(
        &self,
        user_id: &str,
        store: &UpdateStoreRequest,
    ) -> Result<Store, RepositoryError>;
    async fn delete_store(&self, store_id: Uuid, user_id: &str) -> Result<Store, RepositoryError>;
}

pub type DynStoreCommandRepository = Arc<dyn StoreCommandRepositoryTrait + Send + Sync>;
