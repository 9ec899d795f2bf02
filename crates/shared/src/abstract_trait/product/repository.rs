use crate::{
    domain::requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
    errors::RepositoryError,
    model::{Product, ProductImage},
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(
        &self,
        store_id: Uuid,
        req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError>;
    async fn find_by_id(
        &self,
        store_id: Uuid,
        product_id: Uuid,
    ) -> Result<Product, RepositoryError>;
    async fn find_images(
        &self,
        product_ids: &[Uuid],
    ) -> Result<Vec<ProductImage>, RepositoryError>;
}

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        store_id: Uuid,
        product: &CreateProductRequest,
    ) -> Result<(Product, Vec<ProductImage>), RepositoryError>;
    async fn update_product(
        &self,
        store_id: Uuid,
        product: &UpdateProductRequest,
    ) -> Result<(Product, Vec<ProductImage>), RepositoryError>;
    async fn delete_product(
        &self,
        store_id: Uuid,
        product_id: Uuid,
    ) -> Result<Product, RepositoryError>;
    async fn archive_products(&self, product_ids: &[Uuid]) -> Result<u64, RepositoryError>;
}

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;
