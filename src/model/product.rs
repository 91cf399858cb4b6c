use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProductDto {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Price in the smallest currency unit.
    pub price: i64,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateProductDto {
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateProductDto {
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
}
