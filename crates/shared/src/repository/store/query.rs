use crate::{
    abstract_trait::StoreQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Store as StoreModel,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct StoreQueryRepository {
    db: ConnectionPool,
}

impl StoreQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoreQueryRepositoryTrait for StoreQueryRepository {
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<StoreModel>, RepositoryError> {
        info!("🔍 Fetching stores for user {user_id}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let stores = sqlx::query_as::<_, StoreModel>(
            r#"
            SELECT store_id, name, user_id, created_at, updated_at
            FROM stores
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch stores for user {user_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved {} stores", stores.len());
        Ok(stores)
    }

    async fn find_by_id(
        &self,
        store_id: Uuid,
        user_id: &str,
    ) -> Result<StoreModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let store = sqlx::query_as::<_, StoreModel>(
            r#"
            SELECT store_id, name, user_id, created_at, updated_at
            FROM stores
            WHERE store_id = $1 AND user_id = $2
            "#,
        )
        .bind(store_id)
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch store {store_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(store)
    }

    async fn find_owned(
        &self,
        store_id: Uuid,
        user_id: &str,
    ) -> Result<Option<StoreModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let store = sqlx::query_as::<_, StoreModel>(
            r#"
            SELECT store_id, name, user_id, created_at, updated_at
            FROM stores
            WHERE store_id = $1 AND user_id = $2
            "#,
        )
        .bind(store_id)
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Ownership lookup failed for store {store_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(store)
    }
}
