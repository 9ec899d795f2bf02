use crate::{
    domain::{
        requests::{CreateColorRequest, FindAllColors, UpdateColorRequest},
        responses::{ApiResponse, ApiResponsePagination, ColorResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait ColorQueryServiceTrait {
    async fn find_all(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &FindAllColors,
    ) -> Result<ApiResponsePagination<Vec<ColorResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        user_id: &str,
        store_id: Uuid,
        color_id: Uuid,
    ) -> Result<ApiResponse<ColorResponse>, ServiceError>;
}

pub type DynColorQueryService = Arc<dyn ColorQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ColorCommandServiceTrait {
    async fn create_color(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &CreateColorRequest,
    ) -> Result<ApiResponse<ColorResponse>, ServiceError>;
    async fn update_color(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &UpdateColorRequest,
    ) -> Result<ApiResponse<ColorResponse>, ServiceError>;
    async fn delete_color(
        &self,
        user_id: &str,
        store_id: Uuid,
        color_id: Uuid,
    ) -> Result<ApiResponse<ColorResponse>, ServiceError>;
}

pub type DynColorCommandService = Arc<dyn ColorCommandServiceTrait + Send + Sync>;
