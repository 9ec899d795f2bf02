use crate::{
    abstract_trait::ColorQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllColors, errors::RepositoryError, model::Color as ColorModel,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct ColorQueryRepository {
    db: ConnectionPool,
}

impl ColorQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ColorQueryRepositoryTrait for ColorQueryRepository {
    async fn find_all(
        &self,
        store_id: Uuid,
        req: &FindAllColors,
    ) -> Result<(Vec<ColorModel>, i64), RepositoryError> {
        info!("🔍 Fetching colors for store {store_id}");

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
            FROM colors
            WHERE store_id = $1
              AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%')
            "#,
        )
        .bind(store_id)
        .bind(search_pattern)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to count colors: {:?}", e);
            RepositoryError::from(e)
        })?;

        let colors = sqlx::query_as::<_, ColorModel>(
            r#"
            SELECT color_id, store_id, name, value, created_at, updated_at
            FROM colors
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
            error!("❌ Failed to fetch colors: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved {} colors", colors.len());
        Ok((colors, total))
    }

    async fn find_by_id(
        &self,
        store_id: Uuid,
        color_id: Uuid,
    ) -> Result<ColorModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let color = sqlx::query_as::<_, ColorModel>(
            r#"
            SELECT color_id, store_id, name, value, created_at, updated_at
            FROM colors
            WHERE color_id = $1 AND store_id = $2
            "#,
        )
        .bind(color_id)
        .bind(store_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch color {color_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(color)
    }
}
