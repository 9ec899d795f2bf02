use crate::model::Billboard;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BillboardResponse {
    pub id: Uuid,
    pub store_id: Uuid,
    pub label: String,
    pub image_url: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<Billboard> for BillboardResponse {
    fn from(billboard: Billboard) -> Self {
        Self {
            id: billboard.billboard_id,
            store_id: billboard.store_id,
            label: billboard.label,
            image_url: billboard.image_url,
            created_at: billboard.created_at,
            updated_at: billboard.updated_at,
        }
    }
}
