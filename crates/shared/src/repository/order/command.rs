use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::CreateCheckoutRequest,
    errors::RepositoryError,
    model::{Order as OrderModel, OrderItem},
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        store_id: Uuid,
        checkout: &CreateCheckoutRequest,
    ) -> Result<(OrderModel, Vec<OrderItem>), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (order_id, store_id, is_paid, phone, address, created_at, updated_at)
            VALUES ($1, $2, FALSE, $3, '', current_timestamp, current_timestamp)
            RETURNING order_id, store_id, is_paid, phone, address, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(store_id)
        .bind(checkout.phone.clone().unwrap_or_default())
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create order for store {store_id}: {:?}", err);
            RepositoryError::from(err)
        })?;

        let mut items = Vec::with_capacity(checkout.product_ids.len());

        for product_id in &checkout.product_ids {
            let item = sqlx::query_as::<_, OrderItem>(
                r#"
                INSERT INTO order_items (order_item_id, order_id, product_id)
                VALUES ($1, $2, $3)
                RETURNING order_item_id, order_id, product_id
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(order.order_id)
            .bind(product_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to add product {product_id} to order {}: {:?}",
                    order.order_id, e
                );
                RepositoryError::from(e)
            })?;

            items.push(item);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order {} with {} items",
            order.order_id,
            items.len()
        );
        Ok((order, items))
    }

    async fn mark_paid(
        &self,
        order_id: Uuid,
        address: &str,
        phone: &str,
    ) -> Result<Option<(OrderModel, Vec<OrderItem>)>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // the is_paid guard makes duplicate webhook delivery a no-op
        let updated = sqlx::query_as::<_, OrderModel>(
            r#"
            UPDATE orders
            SET is_paid = TRUE,
                address = $2,
                phone = $3,
                updated_at = current_timestamp
            WHERE order_id = $1 AND is_paid = FALSE
            RETURNING order_id, store_id, is_paid, phone, address, created_at, updated_at
            "#,
        )
        .bind(order_id)
        .bind(address)
        .bind(phone)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to mark order {order_id} paid: {:?}", err);
            RepositoryError::from(err)
        })?;

        let Some(order) = updated else {
            let exists: Option<Uuid> =
                sqlx::query_scalar("SELECT order_id FROM orders WHERE order_id = $1")
                    .bind(order_id)
                    .fetch_optional(&mut *conn)
                    .await
                    .map_err(RepositoryError::from)?;

            return if exists.is_some() {
                info!("ℹ️ Order {order_id} already marked paid, skipping");
                Ok(None)
            } else {
                error!("❌ Order {order_id} not found");
                Err(RepositoryError::NotFound)
            };
        };

        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT order_item_id, order_id, product_id
            FROM order_items
            WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch items for order {order_id}: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Order {order_id} marked paid ({} items)", items.len());
        Ok(Some((order, items)))
    }
}
