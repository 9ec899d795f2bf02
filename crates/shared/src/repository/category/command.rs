use crate::{
    abstract_trait::CategoryCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateCategoryRequest, UpdateCategoryRequest},
    errors::RepositoryError,
    model::Category as CategoryModel,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct CategoryCommandRepository {
    db: ConnectionPool,
}

impl CategoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for CategoryCommandRepository {
    async fn create_category(
        &self,
        store_id: Uuid,
        category: &CreateCategoryRequest,
    ) -> Result<CategoryModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            INSERT INTO categories (category_id, store_id, billboard_id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING category_id, store_id, billboard_id, name, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(store_id)
        .bind(category.billboard_id)
        .bind(&category.name)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create category {}: {:?}", category.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created category {} ({})", result.category_id, result.name);
        Ok(result)
    }

    async fn update_category(
        &self,
        store_id: Uuid,
        category: &UpdateCategoryRequest,
    ) -> Result<CategoryModel, RepositoryError> {
        let category_id = category
            .id
            .ok_or_else(|| RepositoryError::Custom("Missing category id".to_string()))?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            UPDATE categories
            SET name = $3,
                billboard_id = $4,
                updated_at = current_timestamp
            WHERE category_id = $1 AND store_id = $2
            RETURNING category_id, store_id, billboard_id, name, created_at, updated_at
            "#,
        )
        .bind(category_id)
        .bind(store_id)
        .bind(&category.name)
        .bind(category.billboard_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update category {category_id}: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated category {category_id}");
        Ok(result)
    }

    async fn delete_category(
        &self,
        store_id: Uuid,
        category_id: Uuid,
    ) -> Result<CategoryModel, RepositoryError> {
        info!("🗑️ Deleting category {category_id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, CategoryModel>(
            r#"
            DELETE FROM categories
            WHERE category_id = $1 AND store_id = $2
            RETURNING category_id, store_id, billboard_id, name, created_at, updated_at
            "#,
        )
        .bind(category_id)
        .bind(store_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete category {category_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Category {category_id} deleted");
        Ok(category)
    }
}
