use crate::{
    abstract_trait::BillboardQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllBillboards, errors::RepositoryError,
    model::Billboard as BillboardModel,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct BillboardQueryRepository {
    db: ConnectionPool,
}

impl BillboardQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BillboardQueryRepositoryTrait for BillboardQueryRepository {
    async fn find_all(
        &self,
        store_id: Uuid,
        req: &FindAllBillboards,
    ) -> Result<(Vec<BillboardModel>, i64), RepositoryError> {
        info!("🔍 Fetching billboards for store {store_id}");

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
            FROM billboards
            WHERE store_id = $1
              AND ($2::TEXT IS NULL OR label ILIKE '%' || $2 || '%')
            "#,
        )
        .bind(store_id)
        .bind(search_pattern)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to count billboards: {:?}", e);
            RepositoryError::from(e)
        })?;

        let billboards = sqlx::query_as::<_, BillboardModel>(
            r#"
            SELECT billboard_id, store_id, label, image_url, created_at, updated_at
            FROM billboards
            WHERE store_id = $1
              AND ($2::TEXT IS NULL OR label ILIKE '%' || $2 || '%')
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
            error!("❌ Failed to fetch billboards: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved {} billboards", billboards.len());
        Ok((billboards, total))
    }

    async fn find_by_id(
        &self,
        store_id: Uuid,
        billboard_id: Uuid,
    ) -> Result<BillboardModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let billboard = sqlx::query_as::<_, BillboardModel>(
            r#"
            SELECT billboard_id, store_id, label, image_url, created_at, updated_at
            FROM billboards
            WHERE billboard_id = $1 AND store_id = $2
            "#,
        )
        .bind(billboard_id)
        .bind(store_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch billboard {billboard_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(billboard)
    }
}
