use crate::{
    abstract_trait::StoreCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateStoreRequest, UpdateStoreRequest},
    errors::RepositoryError,
    model::Store as StoreModel,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct StoreCommandRepository {
    db: ConnectionPool,
}

impl StoreCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoreCommandRepositoryTrait for StoreCommandRepository {
    async fn create_store(
        &self,
        user_id: &str,
        store: &CreateStoreRequest,
    ) -> Result<StoreModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, StoreModel>(
            r#"
            INSERT INTO stores (store_id, name, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, current_timestamp, current_timestamp)
            RETURNING store_id, name, user_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&store.name)
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create store {}: {:?}", store.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created store {} ({})", result.store_id, result.name);
        Ok(result)
    }

    async fn update_store(
        &self,
        user_id: &str,
        store: &UpdateStoreRequest,
    ) -> Result<StoreModel, RepositoryError> {
        let store_id = store
            .id
            .ok_or_else(|| RepositoryError::Custom("Missing store id".to_string()))?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, StoreModel>(
            r#"
            UPDATE stores
            SET name = $3,
                updated_at = current_timestamp
            WHERE store_id = $1 AND user_id = $2
            RETURNING store_id, name, user_id, created_at, updated_at
            "#,
        )
        .bind(store_id)
        .bind(user_id)
        .bind(&store.name)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update store {store_id}: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated store {store_id}");
        Ok(result)
    }

    async fn delete_store(
        &self,
        store_id: Uuid,
        user_id: &str,
    ) -> Result<StoreModel, RepositoryError> {
        info!("🗑️ Deleting store {store_id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let store = sqlx::query_as::<_, StoreModel>(
            r#"
            DELETE FROM stores
            WHERE store_id = $1 AND user_id = $2
            RETURNING store_id, name, user_id, created_at, updated_at
            "#,
        )
        .bind(store_id)
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete store {store_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Store {store_id} deleted");
        Ok(store)
    }
}
