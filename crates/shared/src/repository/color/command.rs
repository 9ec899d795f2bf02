use crate::{
    abstract_trait::ColorCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateColorRequest, UpdateColorRequest},
    errors::RepositoryError,
    model::Color as ColorModel,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct ColorCommandRepository {
    db: ConnectionPool,
}

impl ColorCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ColorCommandRepositoryTrait for ColorCommandRepository {
    async fn create_color(
        &self,
        store_id: Uuid,
        color: &CreateColorRequest,
    ) -> Result<ColorModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ColorModel>(
            r#"
            INSERT INTO colors (color_id, store_id, name, value, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING color_id, store_id, name, value, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(store_id)
        .bind(&color.name)
        .bind(&color.value)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create color {}: {:?}", color.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created color {} ({})", result.color_id, result.name);
        Ok(result)
    }

    async fn update_color(
        &self,
        store_id: Uuid,
        color: &UpdateColorRequest,
    ) -> Result<ColorModel, RepositoryError> {
        let color_id = color
            .id
            .ok_or_else(|| RepositoryError::Custom("Missing color id".to_string()))?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ColorModel>(
            r#"
            UPDATE colors
            SET name = $3,
                value = $4,
                updated_at = current_timestamp
            WHERE color_id = $1 AND store_id = $2
            RETURNING color_id, store_id, name, value, created_at, updated_at
            "#,
        )
        .bind(color_id)
        .bind(store_id)
        .bind(&color.name)
        .bind(&color.value)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update color {color_id}: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated color {color_id}");
        Ok(result)
    }

    async fn delete_color(
        &self,
        store_id: Uuid,
        color_id: Uuid,
    ) -> Result<ColorModel, RepositoryError> {
        info!("🗑️ Deleting color {color_id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let color = sqlx::query_as::<_, ColorModel>(
            r#"
            DELETE FROM colors
            WHERE color_id = $1 AND store_id = $2
            RETURNING color_id, store_id, name, value, created_at, updated_at
            "#,
        )
        .bind(color_id)
        .bind(store_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete color {color_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Color {color_id} deleted");
        Ok(color)
    }
}
