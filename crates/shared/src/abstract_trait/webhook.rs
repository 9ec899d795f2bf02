use crate::{domain::event::PaymentEvent, errors::ServiceError};
use std::sync::Arc;

pub trait WebhookVerifierTrait: Send + Sync {
    fn construct_event(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<PaymentEvent, ServiceError>;
}

pub type DynWebhookVerifier = Arc<dyn WebhookVerifierTrait + Send + Sync>;
