use crate::{
    domain::requests::{CreateColorRequest, FindAllColors, UpdateColorRequest},
    errors::RepositoryError,
    model::Color,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait ColorQueryRepositoryTrait {
    async fn find_all(
        &self,
        store_id: Uuid,
        req: &FindAllColors,
    ) -> Result<(Vec<Color>, i64), RepositoryError>;
    async fn find_by_id(&self, store_id: Uuid, color_id: Uuid) -> Result<Color, RepositoryError>;
}

pub type DynColorQueryRepository = Arc<dyn ColorQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ColorCommandRepositoryTrait {
    async fn create_color(
        &self,
        store_id: Uuid,
        color: &CreateColorRequest,
    ) -> Result<Color, RepositoryError>;
    async fn update_color(
        &self,
        store_id: Uuid,
        color: &UpdateColorRequest,
    ) -> Result<Color, RepositoryError>;
    async fn delete_color(&self, store_id: Uuid, color_id: Uuid) -> Result<Color, RepositoryError>;
}

pub type DynColorCommandRepository = Arc<dyn ColorCommandRepositoryTrait + Send + Sync>;
