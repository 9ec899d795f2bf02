use crate::{
    domain::requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
    errors::RepositoryError,
    model::Category,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait CategoryQueryRepositoryTrait {
    async fn find_all(
        &self,
        store_id: Uuid,
        req: &FindAllCategories,
    ) -> Result<(Vec<Category>, i64), RepositoryError>;
    async fn find_by_id(
        &self,
        store_id: Uuid,
        category_id: Uuid,
    ) -> Result<Category, RepositoryError>;
}

pub type DynCategoryQueryRepository = Arc<dyn CategoryQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryCommandRepositoryTrait {
    async fn create_category(
        &self,
        store_id: Uuid,
        category: &CreateCategoryRequest,
    ) -> Result<Category, RepositoryError>;
    async fn update_category(
        &self,
        store_id: Uuid,
        category: &UpdateCategoryRequest,
    ) -> Result<Category, RepositoryError>;
    async fn delete_category(
        &self,
        store_id: Uuid,
        category_id: Uuid,
    ) -> Result<Category, RepositoryError>;
}

pub type DynCategoryCommandRepository = Arc<dyn CategoryCommandRepositoryTrait + Send + Sync>;
