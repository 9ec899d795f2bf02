use crate::{
    domain::{
        requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
        responses::{ApiResponse, ApiResponsePagination, ProductResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(
        &self,
        store_id: Uuid,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        store_id: Uuid,
        product_id: Uuid,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
}

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn update_product(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn delete_product(
        &self,
        user_id: &str,
        store_id: Uuid,
        product_id: Uuid,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
}

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;
