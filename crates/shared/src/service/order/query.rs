use crate::{
    abstract_trait::{DynOrderQueryRepository, DynStoreQueryRepository, OrderQueryServiceTrait},
    domain::{
        requests::FindAllOrders,
        responses::{ApiResponse, ApiResponsePagination, OrderResponse, Pagination},
    },
    errors::ServiceError,
    model::OrderItem,
    service::ensure_store_owner,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::{collections::HashMap, sync::Arc};
use tokio::{sync::Mutex, time::Instant};
use tracing::error;
use uuid::Uuid;

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    store_query: DynStoreQueryRepository,
    metrics: Arc<Mutex<Metrics>>,
}

impl OrderQueryService {
    pub async fn new(
        query: DynOrderQueryRepository,
        store_query: DynStoreQueryRepository,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        registry.lock().await.register(
            "order_query_service_request_counter",
            "Total number of requests to the OrderQueryService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "order_query_service_request_duration",
            "Histogram of request durations for the OrderQueryService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            query,
            store_query,
            metrics,
        }
    }

    async fn record(&self, method: Method, status: Status, started: Instant) {
        self.metrics
            .lock()
            .await
            .record(method, status, started.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        user_id: &str,
        store_id: Uuid,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError> {
        let started = Instant::now();

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let page = req.page.max(1);
        let page_size = req.page_size.max(1);

        let (orders, total) = match self.query.find_all(store_id, req).await {
            Ok(res) => res,
            Err(e) => {
                error!("❌ Failed to fetch orders: {e:?}");
                self.record(Method::Get, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        let order_ids: Vec<Uuid> = orders.iter().map(|o| o.order_id).collect();
        let items = match self.query.find_items(&order_ids).await {
            Ok(items) => items,
            Err(e) => {
                error!("❌ Failed to fetch order items: {e:?}");
                self.record(Method::Get, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        let mut by_order: HashMap<Uuid, Vec<OrderItem>> = HashMap::new();
        for item in items {
            by_order.entry(item.order_id).or_default().push(item);
        }

        let data: Vec<OrderResponse> = orders
            .into_iter()
            .map(|order| {
                let items = by_order.remove(&order.order_id).unwrap_or_default();
                OrderResponse::from_model(order, items)
            })
            .collect();
        let total_pages = (((total - 1) / page_size as i64) + 1) as i32;

        self.record(Method::Get, Status::Success, started).await;

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Orders retrieved successfully".to_string(),
            data,
            pagination: Pagination {
                page,
                page_size,
                total_items: total,
                total_pages,
            },
        })
    }

    async fn find_by_id(
        &self,
        user_id: &str,
        store_id: Uuid,
        order_id: Uuid,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let started = Instant::now();

        ensure_store_owner(&self.store_query, store_id, user_id).await?;

        let order = match self.query.find_by_id(store_id, order_id).await {
            Ok(order) => order,
            Err(e) => {
                error!("❌ Failed to fetch order {order_id}: {e:?}");
                self.record(Method::Get, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        let items = match self.query.find_items(&[order_id]).await {
            Ok(items) => items,
            Err(e) => {
                error!("❌ Failed to fetch items for order {order_id}: {e:?}");
                self.record(Method::Get, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Get, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order retrieved successfully".to_string(),
            data: OrderResponse::from_model(order, items),
        })
    }
}
