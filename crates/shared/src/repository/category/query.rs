use crate::{
    abstract_trait::CategoryQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllCategories, errors::RepositoryError, model::Category as CategoryModel,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct CategoryQueryRepository {
    db: ConnectionPool,
}

impl CategoryQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for CategoryQueryRepository {
    async fn find_all(
        &self,
        store_id: Uuid,
        req: &FindAllCategories,
    ) -> Result<(Vec<CategoryModel>, i64), RepositoryError> {
        info!("🔍 Fetching categories for store {store_id}");

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

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM categories
            WHERE store_id = $1
              AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%')
            "#,
        )
        .bind(store_id)
        .bind(search_pattern)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to count categories: {:?}", e);
            RepositoryError::from(e)
        })?;

        let categories = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT category_id, store_id, billboard_id, name, created_at, updated_at
            FROM categories
            WHERE store_id = $1
              AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%')
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(store_id)
        .bind(search_pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch categories: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved {} categories", categories.len());
        Ok((categories, total))
    }

    async fn find_by_id(
        &self,
        store_id: Uuid,
        category_id: Uuid,
    ) -> Result<CategoryModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT category_id, store_id, billboard_id, name, created_at, updated_at
            FROM categories
            WHERE category_id = $1 AND store_id = $2
            "#,
        )
        .bind(category_id)
        .bind(store_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch category {category_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(category)
    }
}
