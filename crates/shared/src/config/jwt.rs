use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

// Claims as issued by the external identity provider: `sub` is the caller id.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn verify_token(&self, token: &str) -> Result<String, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(ServiceError::Jwt)?;

        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn issue_token(secret: &str, sub: &str, expires_in: Duration) -> String {
        let now = Utc::now();
        let claims = Claims {
            sub: sub.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + expires_in).timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap()
    }

    #[test]
    fn verifies_token_and_returns_subject() {
        let jwt = JwtConfig::new("test-secret");
        let token = issue_token("test-secret", "user_2aBcD", Duration::minutes(30));

        assert_eq!(jwt.verify_token(&token).unwrap(), "user_2aBcD");
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let jwt = JwtConfig::new("test-secret");
        let token = issue_token("another-secret", "user_2aBcD", Duration::minutes(30));

        assert!(jwt.verify_token(&token).is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let jwt = JwtConfig::new("test-secret");
        let token = issue_token("test-secret", "user_2aBcD", Duration::minutes(-5));

        assert!(jwt.verify_token(&token).is_err());
    }
}
