use crate::{
    abstract_trait::SizeCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateSizeRequest, UpdateSizeRequest},
    errors::RepositoryError,
    model::Size as SizeModel,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct SizeCommandRepository {
    db: ConnectionPool,
}

impl SizeCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SizeCommandRepositoryTrait for SizeCommandRepository {
    async fn create_size(
        &self,
        store_id: Uuid,
        size: &CreateSizeRequest,
    ) -> Result<SizeModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, SizeModel>(
            r#"
            INSERT INTO sizes (size_id, store_id, name, value, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING size_id, store_id, name, value, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(store_id)
        .bind(&size.name)
        .bind(&size.value)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create size {}: {:?}", size.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created size {} ({})", result.size_id, result.name);
        Ok(result)
    }

    async fn update_size(
        &self,
        store_id: Uuid,
        size: &UpdateSizeRequest,
    ) -> Result<SizeModel, RepositoryError> {
        let size_id = size
            .id
            .ok_or_else(|| RepositoryError::Custom("Missing size id".to_string()))?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, SizeModel>(
            r#"
            UPDATE sizes
            SET name = $3,
                value = $4,
                updated_at = current_timestamp
            WHERE size_id = $1 AND store_id = $2
            RETURNING size_id, store_id, name, value, created_at, updated_at
            "#,
        )
        .bind(size_id)
        .bind(store_id)
        .bind(&size.name)
        .bind(&size.value)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update size {size_id}: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated size {size_id}");
        Ok(result)
    }

    async fn delete_size(&self, store_id: Uuid, size_id: Uuid) -> Result<SizeModel, RepositoryError> {
        info!("🗑️ Deleting size {size_id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let size = sqlx::query_as::<_, SizeModel>(
            r#"
            DELETE FROM sizes
            WHERE size_id = $1 AND store_id = $2
            RETURNING size_id, store_id, name, value, created_at, updated_at
            "#,
        )
        .bind(size_id)
        .bind(store_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete size {size_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Size {size_id} deleted");
        Ok(size)
    }
}
