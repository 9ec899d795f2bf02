use crate::{
    domain::{
        requests::{CreateSizeRequest, FindAllSizes, UpdateSizeRequest},
        responses::{ApiResponse, ApiResponsePagination, SizeResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait SizeQueryServiceTrait {
    async fn find_all(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &FindAllSizes,
    ) -> Result<ApiResponsePagination<Vec<SizeResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        user_id: &str,
        store_id: Uuid,
        size_id: Uuid,
    ) -> Result<ApiResponse<SizeResponse>, ServiceError>;
}

pub type DynSizeQueryService = Arc<dyn SizeQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait SizeCommandServiceTrait {
    async fn create_size(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &CreateSizeRequest,
    ) -> Result<ApiResponse<SizeResponse>, ServiceError>;
    async fn update_size(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &UpdateSizeRequest,
    ) -> Result<ApiResponse<SizeResponse>, ServiceError>;
    async fn delete_size(
        &self,
        user_id: &str,
        store_id: Uuid,
        size_id: Uuid,
    ) -> Result<ApiResponse<SizeResponse>, ServiceError>;
}

pub type DynSizeCommandService = Arc<dyn SizeCommandServiceTrait + Send + Sync>;
