use crate::{
    domain::requests::{CreateBillboardRequest, FindAllBillboards, UpdateBillboardRequest},
    errors::RepositoryError,
    model::Billboard,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait BillboardQueryRepositoryTrait {
    async fn find_all(
        &self,
        store_id: Uuid,
        req: &FindAllBillboards,
    ) -> Result<(Vec<Billboard>, i64), RepositoryError>;
    async fn find_by_id(
        &self,
        store_id: Uuid,
        billboard_id: Uuid,
    ) -> Result<Billboard, RepositoryError>;
}

pub type DynBillboardQueryRepository = Arc<dyn BillboardQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait BillboardCommandRepositoryTrait {
    async fn create_billboard(
        &self,
        store_id: Uuid,
        billboard: &CreateBillboardRequest,
    ) -> Result<Billboard, RepositoryError>;
    async fn update_billboard(
        &self,
        store_id: Uuid,
        billboard: &UpdateBillboardRequest,
    ) -> Result<Billboard, RepositoryError>;
    async fn delete_billboard(
        &self,
        store_id: Uuid,
        billboard_id: Uuid,
    ) -> Result<Billboard, RepositoryError>;
}

pub type DynBillboardCommandRepository = Arc<dyn BillboardCommandRepositoryTrait + Send + Sync>;
