use crate::model::Size;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SizeResponse {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub value: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<Size> for SizeResponse {
    fn from(size: Size) -> Self {
        Self {
            id: size.size_id,
            store_id: size.store_id,
            name: size.name,
            value: size.value,
            created_at: size.created_at,
            updated_at: size.updated_at,
        }
    }
}
