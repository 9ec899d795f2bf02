use crate::{
    abstract_trait::BillboardCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateBillboardRequest, UpdateBillboardRequest},
    errors::RepositoryError,
    model::Billboard as BillboardModel,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct BillboardCommandRepository {
    db: ConnectionPool,
}

impl BillboardCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BillboardCommandRepositoryTrait for BillboardCommandRepository {
    async fn create_billboard(
        &self,
        store_id: Uuid,
        billboard: &CreateBillboardRequest,
    ) -> Result<BillboardModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, BillboardModel>(
            r#"
            INSERT INTO billboards (billboard_id, store_id, label, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING billboard_id, store_id, label, image_url, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(store_id)
        .bind(&billboard.label)
        .bind(&billboard.image_url)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create billboard {}: {:?}", billboard.label, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created billboard {} ({})",
            result.billboard_id, result.label
        );
        Ok(result)
    }

    async fn update_billboard(
        &self,
        store_id: Uuid,
        billboard: &UpdateBillboardRequest,
    ) -> Result<BillboardModel, RepositoryError> {
        let billboard_id = billboard
            .id
            .ok_or_else(|| RepositoryError::Custom("Missing billboard id".to_string()))?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, BillboardModel>(
            r#"
            UPDATE billboards
            SET label = $3,
                image_url = $4,
                updated_at = current_timestamp
            WHERE billboard_id = $1 AND store_id = $2
            RETURNING billboard_id, store_id, label, image_url, created_at, updated_at
            "#,
        )
        .bind(billboard_id)
        .bind(store_id)
        .bind(&billboard.label)
        .bind(&billboard.image_url)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update billboard {billboard_id}: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated billboard {billboard_id}");
        Ok(result)
    }

    async fn delete_billboard(
        &self,
        store_id: Uuid,
        billboard_id: Uuid,
    ) -> Result<BillboardModel, RepositoryError> {
        info!("🗑️ Deleting billboard {billboard_id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // fails with a foreign key violation while a category still references it
        let billboard = sqlx::query_as::<_, BillboardModel>(
            r#"
            DELETE FROM billboards
            WHERE billboard_id = $1 AND store_id = $2
            RETURNING billboard_id, store_id, label, image_url, created_at, updated_at
            "#,
        )
        .bind(billboard_id)
        .bind(store_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete billboard {billboard_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Billboard {billboard_id} deleted");
        Ok(billboard)
    }
}
