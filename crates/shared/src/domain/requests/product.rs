use crate::domain::requests::{default_page, default_page_size};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,

    pub category_id: Option<Uuid>,

    pub size_id: Option<Uuid>,

    pub color_id: Option<Uuid>,

    pub is_featured: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductImageRequest {
    #[schema(example = "https://cdn.example.com/products/sneaker-front.png")]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Canvas sneaker")]
    pub name: String,

    #[validate(range(min = 1, message = "Price is required"))]
    #[schema(example = 12900)]
    pub price: i64,

    pub category_id: Uuid,

    pub size_id: Uuid,

    pub color_id: Uuid,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub is_archived: bool,

    #[validate(length(min = 1, message = "Images are required"))]
    pub images: Vec<ProductImageRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(skip_deserializing)]
    pub id: Option<Uuid>,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(range(min = 1, message = "Price is required"))]
    pub price: i64,

    pub category_id: Uuid,

    pub size_id: Uuid,

    pub color_id: Uuid,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub is_archived: bool,

    #[validate(length(min = 1, message = "Images are required"))]
    pub images: Vec<ProductImageRequest>,
}
