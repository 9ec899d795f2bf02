use crate::{
    domain::{
        requests::{CreateCheckoutRequest, FindAllOrders},
        responses::{ApiResponse, ApiResponsePagination, OrderResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        user_id: &str,
        store_id: Uuid,
        order_id: Uuid,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_checkout(
        &self,
        store_id: Uuid,
        req: &CreateCheckoutRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;

    async fn finalize_checkout(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<(), ServiceError>;
}

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;
