use crate::{
    domain::requests::{CreateSizeRequest, FindAllSizes, UpdateSizeRequest},
    errors::RepositoryError,
    model::Size,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait SizeQueryRepositoryTrait {
    async fn find_all(
        &self,
        store_id: Uuid,
        req: &FindAllSizes,
    ) -> Result<(Vec<Size>, i64), RepositoryError>;
    async fn find_by_id(&self, store_id: Uuid, size_id: Uuid) -> Result<Size, RepositoryError>;
}

pub type DynSizeQueryRepository = Arc<dyn SizeQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SizeCommandRepositoryTrait {
    async fn create_size(
        &self,
        store_id: Uuid,
        size: &CreateSizeRequest,
    ) -> Result<Size, RepositoryError>;
    async fn update_size(
        &self,
        store_id: Uuid,
        size: &UpdateSizeRequest,
    ) -> Result<Size, RepositoryError>;
    async fn delete_size(&self, store_id: Uuid, size_id: Uuid) -> Result<Size, RepositoryError>;
}

pub type DynSizeCommandRepository = Arc<dyn SizeCommandRepositoryTrait + Send + Sync>;
