use crate::domain::requests::{default_page, default_page_size};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllColors {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateColorRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Forest green")]
    pub name: String,

    #[validate(length(min = 1, message = "Value is required"))]
    #[schema(example = "#228b22")]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateColorRequest {
    #[serde(skip_deserializing)]
    pub id: Option<Uuid>,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Value is required"))]
    pub value: String,
}
