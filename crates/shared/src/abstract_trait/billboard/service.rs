use crate::{
    domain::{
        requests::{CreateBillboardRequest, FindAllBillboards, UpdateBillboardRequest},
        responses::{ApiResponse, ApiResponsePagination, BillboardResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait BillboardQueryServiceTrait {
    async fn find_all(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &FindAllBillboards,
    ) -> Result<ApiResponsePagination<Vec<BillboardResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        store_id: Uuid,
        billboard_id: Uuid,
    ) -> Result<ApiResponse<BillboardResponse>, ServiceError>;
}

pub type DynBillboardQueryService = Arc<dyn BillboardQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait BillboardCommandServiceTrait {
    async fn create_billboard(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &CreateBillboardRequest,
    ) -> Result<ApiResponse<BillboardResponse>, ServiceError>;
    async fn update_billboard(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &UpdateBillboardRequest,
    ) -> Result<ApiResponse<BillboardResponse>, ServiceError>;
    async fn delete_billboard(
        &self,
        user_id: &str,
        store_id: Uuid,
        billboard_id: Uuid,
    ) -> Result<ApiResponse<BillboardResponse>, ServiceError>;
}

pub type DynBillboardCommandService = Arc<dyn BillboardCommandServiceTrait + Send + Sync>;
