use crate::model::Color;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ColorResponse {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub value: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<Color> for ColorResponse {
    fn from(color: Color) -> Self {
        Self {
            id: color.color_id,
            store_id: color.store_id,
            name: color.name,
            value: color.value,
            created_at: color.created_at,
            updated_at: color.updated_at,
        }
    }
}
