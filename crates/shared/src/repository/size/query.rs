use crate::{
    abstract_trait::SizeQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllSizes, errors::RepositoryError, model::Size as SizeModel,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct SizeQueryRepository {
    db: ConnectionPool,
}

impl SizeQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SizeQueryRepositoryTrait for SizeQueryRepository {
    async fn find_all(
        &self,
        store_id: Uuid,
        req: &FindAllSizes,
    ) -> Result<(Vec<SizeModel>, i64), RepositoryError> {
        info!("🔍 Fetching sizes for store {store_id}");

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
            FROM sizes
            WHERE store_id = $1
              AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%')
            "#,
        )
        .bind(store_id)
        .bind(search_pattern)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to count sizes: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sizes = sqlx::query_as::<_, SizeModel>(
            r#"
            SELECT size_id, store_id, name, value, created_at, updated_at
            FROM sizes
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
            error!("❌ Failed to fetch sizes: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved {} sizes", sizes.len());
        Ok((sizes, total))
    }

    async fn find_by_id(&self, store_id: Uuid, size_id: Uuid) -> Result<SizeModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let size = sqlx::query_as::<_, SizeModel>(
            r#"
            SELECT size_id, store_id, name, value, created_at, updated_at
            FROM sizes
            WHERE size_id = $1 AND store_id = $2
            "#,
        )
        .bind(size_id)
        .bind(store_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch size {size_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(size)
    }
}
