use crate::errors::ServiceError;
use std::sync::Arc;

pub trait JwtServiceTrait: Send + Sync {
    fn verify_token(&self, token: &str) -> Result<String, ServiceError>;
}

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;
