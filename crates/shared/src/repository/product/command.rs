use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, ProductImageRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::{Product as ProductModel, ProductImage},
};
use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use tracing::{error, info};
use uuid::Uuid;

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn insert_images(
        tx: &mut Transaction<'_, Postgres>,
        product_id: Uuid,
        images: &[ProductImageRequest],
    ) -> Result<Vec<ProductImage>, RepositoryError> {
        let mut inserted = Vec::with_capacity(images.len());

        for image in images {
            let row = sqlx::query_as::<_, ProductImage>(
                r#"
                INSERT INTO product_images (image_id, product_id, url, created_at)
                VALUES ($1, $2, $3, current_timestamp)
                RETURNING image_id, product_id, url, created_at
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(product_id)
            .bind(&image.url)
            .fetch_one(&mut **tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert image for product {product_id}: {:?}", e);
                RepositoryError::from(e)
            })?;

            inserted.push(row);
        }

        Ok(inserted)
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        store_id: Uuid,
        product: &CreateProductRequest,
    ) -> Result<(ProductModel, Vec<ProductImage>), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (product_id, store_id, category_id, size_id, color_id, name,
                                  price, is_featured, is_archived, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, current_timestamp, current_timestamp)
            RETURNING product_id, store_id, category_id, size_id, color_id, name, price,
                      is_featured, is_archived, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(store_id)
        .bind(product.category_id)
        .bind(product.size_id)
        .bind(product.color_id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.is_featured)
        .bind(product.is_archived)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", product.name, err);
            RepositoryError::from(err)
        })?;

        let images = Self::insert_images(&mut tx, result.product_id, &product.images).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Created product {} ({})", result.product_id, result.name);
        Ok((result, images))
    }

    async fn update_product(
        &self,
        store_id: Uuid,
        product: &UpdateProductRequest,
    ) -> Result<(ProductModel, Vec<ProductImage>), RepositoryError> {
        let product_id = product
            .id
            .ok_or_else(|| RepositoryError::Custom("Missing product id".to_string()))?;

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET name = $3,
                price = $4,
                category_id = $5,
                size_id = $6,
                color_id = $7,
                is_featured = $8,
                is_archived = $9,
                updated_at = current_timestamp
            WHERE product_id = $1 AND store_id = $2
            RETURNING product_id, store_id, category_id, size_id, color_id, name, price,
                      is_featured, is_archived, created_at, updated_at
            "#,
        )
        .bind(product_id)
        .bind(store_id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.category_id)
        .bind(product.size_id)
        .bind(product.color_id)
        .bind(product.is_featured)
        .bind(product.is_archived)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product {product_id}: {:?}", err);
            RepositoryError::from(err)
        })?;

        // image collection is replaced wholesale, not diffed
        sqlx::query("DELETE FROM product_images WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to clear images for product {product_id}: {:?}", e);
                RepositoryError::from(e)
            })?;

        let images = Self::insert_images(&mut tx, product_id, &product.images).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔄 Updated product {product_id}");
        Ok((result, images))
    }

    async fn delete_product(
        &self,
        store_id: Uuid,
        product_id: Uuid,
    ) -> Result<ProductModel, RepositoryError> {
        info!("🗑️ Deleting product {product_id}");

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM product_images WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to clear images for product {product_id}: {:?}", e);
                RepositoryError::from(e)
            })?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            DELETE FROM products
            WHERE product_id = $1 AND store_id = $2
            RETURNING product_id, store_id, category_id, size_id, color_id, name, price,
                      is_featured, is_archived, created_at, updated_at
            "#,
        )
        .bind(product_id)
        .bind(store_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete product {product_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Product {product_id} deleted");
        Ok(product)
    }

    async fn archive_products(&self, product_ids: &[Uuid]) -> Result<u64, RepositoryError> {
        if product_ids.is_empty() {
            return Ok(0);
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE products
            SET is_archived = TRUE,
                updated_at = current_timestamp
            WHERE product_id = ANY($1)
            "#,
        )
        .bind(product_ids)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to archive products: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Archived {} products", result.rows_affected());
        Ok(result.rows_affected())
    }
}
