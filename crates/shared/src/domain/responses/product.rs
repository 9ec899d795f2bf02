use crate::model::{Product, ProductImage};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductImageResponse {
    pub id: Uuid,
    pub url: String,
}

impl From<ProductImage> for ProductImageResponse {
    fn from(image: ProductImage) -> Self {
        Self {
            id: image.image_id,
            url: image.url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: Uuid,
    pub store_id: Uuid,
    pub category_id: Uuid,
    pub size_id: Uuid,
    pub color_id: Uuid,
    pub name: String,
    pub price: i64,
    pub is_featured: bool,
    pub is_archived: bool,
    pub images: Vec<ProductImageResponse>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl ProductResponse {
    pub fn from_model(product: Product, images: Vec<ProductImage>) -> Self {
        Self {
            id: product.product_id,
            store_id: product.store_id,
            category_id: product.category_id,
            size_id: product.size_id,
            color_id: product.color_id,
            name: product.name,
            price: product.price,
            is_featured: product.is_featured,
            is_archived: product.is_archived,
            images: images.into_iter().map(ProductImageResponse::from).collect(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
