use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unauthenticated(msg) => HttpError::Unauthorized(msg),

            ServiceError::Unauthorized(msg) => HttpError::Unauthorized(msg),

            ServiceError::Validation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {errors:?}"))
            }

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Conflict(msg) => HttpError::Conflict(msg),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::InvalidTokenType => HttpError::Unauthorized("Invalid token".into()),

            ServiceError::WebhookSignature(msg) => {
                HttpError::BadRequest(format!("Webhook signature error: {msg}"))
            }

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_key_violation_surfaces_as_bad_request() {
        let err = ServiceError::Repo(RepositoryError::ForeignKey(
            "categories_billboard_id_fkey".into(),
        ));
        match HttpError::from(err) {
            HttpError::BadRequest(msg) => assert!(msg.contains("categories_billboard_id_fkey")),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn not_found_surfaces_as_404() {
        let err = ServiceError::Repo(RepositoryError::NotFound);
        assert!(matches!(HttpError::from(err), HttpError::NotFound(_)));
    }

    #[test]
    fn unauthorized_surfaces_as_401() {
        let err = ServiceError::Unauthorized("Store not owned by caller".into());
        assert!(matches!(HttpError::from(err), HttpError::Unauthorized(_)));
    }
}
