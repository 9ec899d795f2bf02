use crate::{
    domain::{
        requests::{CreateStoreRequest, UpdateStoreRequest},
        responses::{ApiResponse, StoreResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait StoreQueryServiceTrait {
    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<ApiResponse<Vec<StoreResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        user_id: &str,
        store_id: Uuid,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError>;
}

pub type DynStoreQueryService = Arc<dyn StoreQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait StoreCommandServiceTrait {
    async fn create_store(
        &self,
        user_id: &str,
        req: &CreateStoreRequest,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError>;
    async fn update_store(
        &self,
        user_id: &str,
        req: &UpdateStoreRequest,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError>;
    async fn delete_store(
        &self,
        user_id: &str,
        store_id: Uuid,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError>;
}

pub type DynStoreCommandService = Arc<dyn StoreCommandServiceTrait + Send + Sync>;
