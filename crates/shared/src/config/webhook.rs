use crate::{
    abstract_trait::WebhookVerifierTrait,
    domain::event::PaymentEvent,
    errors::ServiceError,
};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

// Signature header format: `t=<unix seconds>,v1=<hex hmac-sha256 of "t.payload">`.
const SIGNATURE_TOLERANCE_SECS: i64 = 300;

#[derive(Debug, Clone)]
pub struct WebhookVerifier {
    secret: String,
}

impl WebhookVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
        }
    }

    fn parse_header(signature_header: &str) -> Result<(i64, Vec<u8>), ServiceError> {
        let mut timestamp = None;
        let mut signature = None;

        for element in signature_header.split(',') {
            match element.trim().split_once('=') {
                Some(("t", value)) => timestamp = value.parse::<i64>().ok(),
                Some(("v1", value)) => signature = hex::decode(value).ok(),
                _ => {}
            }
        }

        let timestamp = timestamp.ok_or_else(|| {
            ServiceError::WebhookSignature("Missing or invalid timestamp in header".to_string())
        })?;
        let signature = signature.ok_or_else(|| {
            ServiceError::WebhookSignature("Missing or invalid v1 signature in header".to_string())
        })?;

        Ok((timestamp, signature))
    }
}

impl WebhookVerifierTrait for WebhookVerifier {
    fn construct_event(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<PaymentEvent, ServiceError> {
        let (timestamp, signature) = Self::parse_header(signature_header)?;

        let age = (Utc::now().timestamp() - timestamp).abs();
        if age > SIGNATURE_TOLERANCE_SECS {
            warn!("⚠️ Webhook signature timestamp outside tolerance ({age}s)");
            return Err(ServiceError::WebhookSignature(
                "Timestamp outside of tolerance".to_string(),
            ));
        }

        let signed_payload = format!("{}.{}", timestamp, String::from_utf8_lossy(payload));
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| ServiceError::WebhookSignature(e.to_string()))?;
        mac.update(signed_payload.as_bytes());

        mac.verify_slice(&signature).map_err(|_| {
            ServiceError::WebhookSignature("Signature does not match payload".to_string())
        })?;

        serde_json::from_slice::<PaymentEvent>(payload)
            .map_err(|e| ServiceError::WebhookSignature(format!("Invalid event payload: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test123secret456";

    fn sign(payload: &[u8], secret: &str, timestamp: i64) -> String {
        let signed_payload = format!("{}.{}", timestamp, String::from_utf8_lossy(payload));
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(signed_payload.as_bytes());
        format!("t={},v1={}", timestamp, hex::encode(mac.finalize().into_bytes()))
    }

    fn event_payload() -> Vec<u8> {
        serde_json::json!({
            "id": "evt_1",
            "type": "checkout.session.completed",
            "data": { "object": { "id": "cs_test_1" } }
        })
        .to_string()
        .into_bytes()
    }

    #[test]
    fn accepts_valid_signature() {
        let verifier = WebhookVerifier::new(SECRET);
        let payload = event_payload();
        let header = sign(&payload, SECRET, Utc::now().timestamp());

        let event = verifier.construct_event(&payload, &header).unwrap();
        assert_eq!(event.event_type, "checkout.session.completed");
        assert_eq!(event.data.object.id, "cs_test_1");
    }

    #[test]
    fn rejects_signature_from_wrong_secret() {
        let verifier = WebhookVerifier::new(SECRET);
        let payload = event_payload();
        let header = sign(&payload, "wrong_secret", Utc::now().timestamp());

        assert!(matches!(
            verifier.construct_event(&payload, &header),
            Err(ServiceError::WebhookSignature(_))
        ));
    }

    #[test]
    fn rejects_tampered_payload() {
        let verifier = WebhookVerifier::new(SECRET);
        let payload = event_payload();
        let header = sign(&payload, SECRET, Utc::now().timestamp());

        let mut tampered = payload.clone();
        tampered.extend_from_slice(b" ");

        assert!(matches!(
            verifier.construct_event(&tampered, &header),
            Err(ServiceError::WebhookSignature(_))
        ));
    }

    #[test]
    fn rejects_stale_timestamp() {
        let verifier = WebhookVerifier::new(SECRET);
        let payload = event_payload();
        let header = sign(&payload, SECRET, Utc::now().timestamp() - 600);

        assert!(matches!(
            verifier.construct_event(&payload, &header),
            Err(ServiceError::WebhookSignature(_))
        ));
    }

    #[test]
    fn rejects_header_without_signature() {
        let verifier = WebhookVerifier::new(SECRET);
        let payload = event_payload();
        let header = format!("t={}", Utc::now().timestamp());

        assert!(matches!(
            verifier.construct_event(&payload, &header),
            Err(ServiceError::WebhookSignature(_))
        ));
    }
}
