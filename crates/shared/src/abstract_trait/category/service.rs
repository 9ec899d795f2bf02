use crate::{
    domain::{
        requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
        responses::{ApiResponse, ApiResponsePagination, CategoryResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait CategoryQueryServiceTrait {
    async fn find_all(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &FindAllCategories,
    ) -> Result<ApiResponsePagination<Vec<CategoryResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        store_id: Uuid,
        category_id: Uuid,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
}

pub type DynCategoryQueryService = Arc<dyn CategoryQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryCommandServiceTrait {
    async fn create_category(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn update_category(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn delete_category(
        &self,
        user_id: &str,
        store_id: Uuid,
        category_id: Uuid,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
}

pub type DynCategoryCommandService = Arc<dyn CategoryCommandServiceTrait + Send + Sync>;
