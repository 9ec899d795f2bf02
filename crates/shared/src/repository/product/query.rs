use crate::{
    abstract_trait::ProductQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::FindAllProducts,
    errors::RepositoryError,
    model::{Product as ProductModel, ProductImage},
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        store_id: Uuid,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!("🔍 Fetching products for store {store_id}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let limit = req.page_size.max(1) as i64;
        let offset = ((req.page - 1).max(0) as i64) * limit;

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(req.search.as_str())
        };

        // archived products never appear in the public listing
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM products
            WHERE store_id = $1
              AND is_archived = FALSE
              AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%')
              AND ($3::UUID IS NULL OR category_id = $3)
              AND ($4::UUID IS NULL OR size_id = $4)
              AND ($5::UUID IS NULL OR color_id = $5)
              AND ($6::BOOL IS NULL OR is_featured = $6)
            "#,
        )
        .bind(store_id)
        .bind(search_pattern)
        .bind(req.category_id)
        .bind(req.size_id)
        .bind(req.color_id)
        .bind(req.is_featured)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to count products: {:?}", e);
            RepositoryError::from(e)
        })?;

        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT product_id, store_id, category_id, size_id, color_id, name, price,
                   is_featured, is_archived, created_at, updated_at
            FROM products
            WHERE store_id = $1
              AND is_archived = FALSE
              AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%')
              AND ($3::UUID IS NULL OR category_id = $3)
              AND ($4::UUID IS NULL OR size_id = $4)
              AND ($5::UUID IS NULL OR color_id = $5)
              AND ($6::BOOL IS NULL OR is_featured = $6)
            ORDER BY created_at DESC
            LIMIT $7 OFFSET $8
            "#,
        )
        .bind(store_id)
        .bind(search_pattern)
        .bind(req.category_id)
        .bind(req.size_id)
        .bind(req.color_id)
        .bind(req.is_featured)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved {} products", products.len());
        Ok((products, total))
    }

    async fn find_by_id(
        &self,
        store_id: Uuid,
        product_id: Uuid,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT product_id, store_id, category_id, size_id, color_id, name, price,
                   is_featured, is_archived, created_at, updated_at
            FROM products
            WHERE product_id = $1 AND store_id = $2
            "#,
        )
        .bind(product_id)
        .bind(store_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product {product_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(product)
    }

    async fn find_images(
        &self,
        product_ids: &[Uuid],
    ) -> Result<Vec<ProductImage>, RepositoryError> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let images = sqlx::query_as::<_, ProductImage>(
            r#"
            SELECT image_id, product_id, url, created_at
            FROM product_images
            WHERE product_id = ANY($1)
            ORDER BY created_at ASC
            "#,
        )
        .bind(product_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product images: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(images)
    }
}
