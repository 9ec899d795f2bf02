use crate::{abstract_trait::DynStoreQueryRepository, errors::ServiceError};
use tracing::warn;
use uuid::Uuid;

// a mutation (or owner-scoped read) is allowed only when a store row matches
// both the path's store id and the caller's identity
pub(crate) async fn ensure_store_owner(
    store_query: &DynStoreQueryRepository,
    store_id: Uuid,
    user_id: &str,
) -> Result<(), ServiceError> {
    match store_query.find_owned(store_id, user_id).await? {
        Some(_) => Ok(()),
        None => {
            warn!("🚫 User {user_id} does not own store {store_id}");
            Err(ServiceError::Unauthorized(
                "Store not found for this user".to_string(),
            ))
        }
    }
}
