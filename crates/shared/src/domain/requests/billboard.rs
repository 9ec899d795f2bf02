use crate::domain::requests::{default_page, default_page_size};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllBillboards {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBillboardRequest {
    #[validate(length(min = 1, message = "Label is required"))]
    #[schema(example = "Summer sale")]
    pub label: String,

    #[validate(length(min = 1, message = "Image URL is required"))]
    #[schema(example = "https://cdn.example.com/billboards/summer.png")]
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateBillboardRequest {
    #[serde(skip_deserializing)]
    pub id: Option<Uuid>,

    #[validate(length(min = 1, message = "Label is required"))]
    pub label: String,

    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
}
