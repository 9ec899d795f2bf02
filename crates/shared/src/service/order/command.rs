use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynProductCommandRepository, DynWebhookVerifier,
        OrderCommandServiceTrait,
    },
    domain::{
        event::CHECKOUT_SESSION_COMPLETED,
        requests::CreateCheckoutRequest,
        responses::{ApiResponse, OrderResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};
use uuid::Uuid;

pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    product_command: DynProductCommandRepository,
    webhook_verifier: DynWebhookVerifier,
    metrics: Arc<Mutex<Metrics>>,
}

impl OrderCommandService {
    pub async fn new(
        command: DynOrderCommandRepository,
        product_command: DynProductCommandRepository,
        webhook_verifier: DynWebhookVerifier,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        registry.lock().await.register(
            "order_command_service_request_counter",
            "Total number of requests to the OrderCommandService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "order_command_service_request_duration",
            "Histogram of request durations for the OrderCommandService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            command,
            product_command,
            webhook_verifier,
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
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_checkout(
        &self,
        store_id: Uuid,
        req: &CreateCheckoutRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let started = Instant::now();
        info!(
            "🛒 Creating checkout order with {} products for store {store_id}",
            req.product_ids.len()
        );

        let (order, items) = match self.command.create_order(store_id, req).await {
            Ok(res) => res,
            Err(e) => {
                error!("❌ Failed to create checkout order: {e:?}");
                self.record(Method::Post, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Post, Status::Success, started).await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order created successfully".to_string(),
            data: OrderResponse::from_model(order, items),
        })
    }

    async fn finalize_checkout(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<(), ServiceError> {
        let started = Instant::now();

        // signature failure rejects the delivery before any state change
        let event = self
            .webhook_verifier
            .construct_event(payload, signature_header)?;

        if event.event_type != CHECKOUT_SESSION_COMPLETED {
            // verified but unhandled event types are acknowledged and dropped
            info!(
                "ℹ️ Ignoring webhook event {} of type {}",
                event.id, event.event_type
            );
            self.record(Method::Post, Status::Success, started).await;
            return Ok(());
        }

        let session = &event.data.object;

        let order_id = session
            .order_id()
            .and_then(|raw| Uuid::parse_str(raw).ok())
            .ok_or_else(|| {
                error!("❌ Event {} carries no usable orderId", event.id);
                ServiceError::Custom("Event metadata is missing a valid orderId".to_string())
            })?;

        let address = session.shipping_address();
        let phone = session.phone();

        let marked = match self.command.mark_paid(order_id, &address, &phone).await {
            Ok(marked) => marked,
            Err(e) => {
                error!("❌ Failed to finalize order {order_id}: {e:?}");
                self.record(Method::Post, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        let Some((order, items)) = marked else {
            // duplicate delivery of an already-finalized session
            self.record(Method::Post, Status::Success, started).await;
            return Ok(());
        };

        let product_ids: Vec<Uuid> = items.iter().map(|item| item.product_id).collect();

        // second write is sequential and not transactional with the first
        let archived = match self.product_command.archive_products(&product_ids).await {
            Ok(archived) => archived,
            Err(e) => {
                error!(
                    "❌ Order {} marked paid but archiving products failed: {e:?}",
                    order.order_id
                );
                self.record(Method::Post, Status::Error, started).await;
                return Err(ServiceError::Repo(e));
            }
        };

        info!(
            "✅ Order {} finalized, {archived} products archived",
            order.order_id
        );
        self.record(Method::Post, Status::Success, started).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            OrderCommandRepositoryTrait, ProductCommandRepositoryTrait, WebhookVerifierTrait,
        },
        domain::{
            event::{
                CheckoutSession, CustomerDetails, PaymentEvent, PaymentEventData, ShippingAddress,
            },
            requests::{CreateProductRequest, UpdateProductRequest},
        },
        errors::RepositoryError,
        model::{Order, OrderItem, Product, ProductImage},
    };
    use std::collections::HashMap;

    struct FakeVerifier {
        event: PaymentEvent,
    }

    impl WebhookVerifierTrait for FakeVerifier {
        fn construct_event(
            &self,
            _payload: &[u8],
            _signature_header: &str,
        ) -> Result<PaymentEvent, ServiceError> {
            Ok(self.event.clone())
        }
    }

    struct RejectingVerifier;

    impl WebhookVerifierTrait for RejectingVerifier {
        fn construct_event(
            &self,
            _payload: &[u8],
            _signature_header: &str,
        ) -> Result<PaymentEvent, ServiceError> {
            Err(ServiceError::WebhookSignature(
                "Signature does not match payload".to_string(),
            ))
        }
    }

    #[derive(Default)]
    struct FakeOrderCommandRepository {
        orders: Mutex<HashMap<Uuid, (Order, Vec<OrderItem>)>>,
    }

    impl FakeOrderCommandRepository {
        async fn insert_unpaid(&self, order_id: Uuid, product_ids: &[Uuid]) {
            let order = Order {
                order_id,
                store_id: Uuid::new_v4(),
                is_paid: false,
                phone: String::new(),
                address: String::new(),
                created_at: None,
                updated_at: None,
            };
            let items = product_ids
                .iter()
                .map(|product_id| OrderItem {
                    order_item_id: Uuid::new_v4(),
                    order_id,
                    product_id: *product_id,
                })
                .collect();
            self.orders.lock().await.insert(order_id, (order, items));
        }

        async fn get(&self, order_id: Uuid) -> Option<Order> {
            self.orders
                .lock()
                .await
                .get(&order_id)
                .map(|(order, _)| order.clone())
        }
    }

    #[async_trait]
    impl OrderCommandRepositoryTrait for FakeOrderCommandRepository {
        async fn create_order(
            &self,
            store_id: Uuid,
            checkout: &CreateCheckoutRequest,
        ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
            let order = Order {
                order_id: Uuid::new_v4(),
                store_id,
                is_paid: false,
                phone: checkout.phone.clone().unwrap_or_default(),
                address: String::new(),
                created_at: None,
                updated_at: None,
            };
            let items: Vec<OrderItem> = checkout
                .product_ids
                .iter()
                .map(|product_id| OrderItem {
                    order_item_id: Uuid::new_v4(),
                    order_id: order.order_id,
                    product_id: *product_id,
                })
                .collect();
            self.orders
                .lock()
                .await
                .insert(order.order_id, (order.clone(), items.clone()));
            Ok((order, items))
        }

        async fn mark_paid(
            &self,
            order_id: Uuid,
            address: &str,
            phone: &str,
        ) -> Result<Option<(Order, Vec<OrderItem>)>, RepositoryError> {
            let mut orders = self.orders.lock().await;
            let Some((order, items)) = orders.get_mut(&order_id) else {
                return Err(RepositoryError::NotFound);
            };

            if order.is_paid {
                return Ok(None);
            }

            order.is_paid = true;
            order.address = address.to_string();
            order.phone = phone.to_string();
            Ok(Some((order.clone(), items.clone())))
        }
    }

    #[derive(Default)]
    struct FakeProductCommandRepository {
        archived: Mutex<Vec<Uuid>>,
    }

    #[async_trait]
    impl ProductCommandRepositoryTrait for FakeProductCommandRepository {
        async fn create_product(
            &self,
            _store_id: Uuid,
            _product: &CreateProductRequest,
        ) -> Result<(Product, Vec<ProductImage>), RepositoryError> {
            unreachable!("not exercised by these tests")
        }

        async fn update_product(
            &self,
            _store_id: Uuid,
            _product: &UpdateProductRequest,
        ) -> Result<(Product, Vec<ProductImage>), RepositoryError> {
            unreachable!("not exercised by these tests")
        }

        async fn delete_product(
            &self,
            _store_id: Uuid,
            _product_id: Uuid,
        ) -> Result<Product, RepositoryError> {
            unreachable!("not exercised by these tests")
        }

        async fn archive_products(&self, product_ids: &[Uuid]) -> Result<u64, RepositoryError> {
            let mut archived = self.archived.lock().await;
            archived.extend_from_slice(product_ids);
            Ok(product_ids.len() as u64)
        }
    }

    fn completed_event(order_id: Uuid) -> PaymentEvent {
        PaymentEvent {
            id: "evt_1".to_string(),
            event_type: CHECKOUT_SESSION_COMPLETED.to_string(),
            data: PaymentEventData {
                object: CheckoutSession {
                    id: "cs_test_1".to_string(),
                    metadata: HashMap::from([("orderId".to_string(), order_id.to_string())]),
                    customer_details: Some(CustomerDetails {
                        phone: Some("+1 555 0100".to_string()),
                        address: Some(ShippingAddress {
                            line1: Some("123 Main St".to_string()),
                            line2: None,
                            city: Some("Springfield".to_string()),
                            state: Some("IL".to_string()),
                            postal_code: Some("62704".to_string()),
                            country: Some("US".to_string()),
                        }),
                    }),
                },
            },
        }
    }

    async fn service_with(
        verifier: Arc<dyn WebhookVerifierTrait + Send + Sync>,
    ) -> (
        OrderCommandService,
        Arc<FakeOrderCommandRepository>,
        Arc<FakeProductCommandRepository>,
    ) {
        let orders = Arc::new(FakeOrderCommandRepository::default());
        let products = Arc::new(FakeProductCommandRepository::default());

        let service = OrderCommandService::new(
            orders.clone() as DynOrderCommandRepository,
            products.clone() as DynProductCommandRepository,
            verifier,
            Arc::new(Mutex::new(Metrics::new())),
            Arc::new(Mutex::new(Registry::default())),
        )
        .await;

        (service, orders, products)
    }

    #[tokio::test]
    async fn completed_session_marks_order_paid_and_archives_products() {
        let order_id = Uuid::new_v4();
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();

        let verifier = Arc::new(FakeVerifier {
            event: completed_event(order_id),
        });
        let (service, orders, products) = service_with(verifier).await;
        orders.insert_unpaid(order_id, &[p1, p2]).await;

        service.finalize_checkout(b"{}", "t=0,v1=00").await.unwrap();

        let order = orders.get(order_id).await.unwrap();
        assert!(order.is_paid);
        assert_eq!(order.address, "123 Main St, Springfield, IL, 62704, US");
        assert_eq!(order.phone, "+1 555 0100");

        let archived = products.archived.lock().await;
        assert_eq!(archived.as_slice(), &[p1, p2]);
    }

    #[tokio::test]
    async fn invalid_signature_changes_nothing() {
        let (service, orders, products) = service_with(Arc::new(RejectingVerifier)).await;
        let order_id = Uuid::new_v4();
        orders.insert_unpaid(order_id, &[Uuid::new_v4()]).await;

        let result = service.finalize_checkout(b"{}", "t=0,v1=00").await;

        assert!(matches!(result, Err(ServiceError::WebhookSignature(_))));
        assert!(!orders.get(order_id).await.unwrap().is_paid);
        assert!(products.archived.lock().await.is_empty());
    }

    #[tokio::test]
    async fn other_event_types_are_acknowledged_without_state_change() {
        let order_id = Uuid::new_v4();
        let mut event = completed_event(order_id);
        event.event_type = "payment_intent.created".to_string();

        let (service, orders, products) = service_with(Arc::new(FakeVerifier { event })).await;
        orders.insert_unpaid(order_id, &[Uuid::new_v4()]).await;

        service.finalize_checkout(b"{}", "t=0,v1=00").await.unwrap();

        assert!(!orders.get(order_id).await.unwrap().is_paid);
        assert!(products.archived.lock().await.is_empty());
    }

    #[tokio::test]
    async fn duplicate_delivery_is_acknowledged_without_rearchiving() {
        let order_id = Uuid::new_v4();
        let p1 = Uuid::new_v4();

        let verifier = Arc::new(FakeVerifier {
            event: completed_event(order_id),
        });
        let (service, orders, products) = service_with(verifier).await;
        orders.insert_unpaid(order_id, &[p1]).await;

        service.finalize_checkout(b"{}", "t=0,v1=00").await.unwrap();
        service.finalize_checkout(b"{}", "t=0,v1=00").await.unwrap();

        assert_eq!(products.archived.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn unknown_order_id_surfaces_not_found() {
        let verifier = Arc::new(FakeVerifier {
            event: completed_event(Uuid::new_v4()),
        });
        let (service, _orders, products) = service_with(verifier).await;

        let result = service.finalize_checkout(b"{}", "t=0,v1=00").await;

        assert!(matches!(
            result,
            Err(ServiceError::Repo(RepositoryError::NotFound))
        ));
        assert!(products.archived.lock().await.is_empty());
    }

    #[tokio::test]
    async fn checkout_creates_unpaid_order_with_items() {
        let (service, _orders, _products) = service_with(Arc::new(RejectingVerifier)).await;

        let req = CreateCheckoutRequest {
            product_ids: vec![Uuid::new_v4(), Uuid::new_v4()],
            phone: Some("+1 555 0100".to_string()),
        };

        let response = service.create_checkout(Uuid::new_v4(), &req).await.unwrap();

        assert!(!response.data.is_paid);
        assert_eq!(response.data.items.len(), 2);
        assert_eq!(response.data.phone, "+1 555 0100");
        assert_eq!(response.data.address, "");
    }
}
