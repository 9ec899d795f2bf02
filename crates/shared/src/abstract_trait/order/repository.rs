use crate::{
    domain::requests::{CreateCheckoutRequest, FindAllOrders},
    errors::RepositoryError,
    model::{Order, OrderItem},
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(
        &self,
        store_id: Uuid,
        req: &FindAllOrders,
    ) -> Result<(Vec<Order>, i64), RepositoryError>;
    async fn find_by_id(&self, store_id: Uuid, order_id: Uuid) -> Result<Order, RepositoryError>;
    async fn find_items(&self, order_ids: &[Uuid]) -> Result<Vec<OrderItem>, RepositoryError>;
}

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create_order(
        &self,
        store_id: Uuid,
        checkout: &CreateCheckoutRequest,
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError>;

    // `Ok(None)` means the order exists but was already paid (duplicate delivery).
    async fn mark_paid(
        &self,
        order_id: Uuid,
        address: &str,
        phone: &str,
    ) -> Result<Option<(Order, Vec<OrderItem>)>, RepositoryError>;
}

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
