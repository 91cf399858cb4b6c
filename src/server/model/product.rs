//! Product domain model and parameters.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::model::product::{CreateProductDto, ProductDto, UpdateProductDto};

/// A catalog product.
///
/// `price` is kept in the smallest currency unit to avoid floating point rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Converts an entity model to the product domain model.
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            category_id: entity.category_id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            image: entity.image,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            category_id: self.category_id,
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Fields written when creating or updating a product.
///
/// The category reference is checked against the database by the service.
#[derive(Debug, Clone, Validate)]
pub struct ProductParam {
    pub category_id: i32,
    #[validate(length(
        min = 1,
        max = 255,
        message = "The name field must be between 1 and 255 characters."
    ))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "The price field must be at least 0."))]
    pub price: i64,
}

impl From<CreateProductDto> for ProductParam {
    fn from(dto: CreateProductDto) -> Self {
        Self {
            category_id: dto.category_id,
            name: dto.name.trim().to_string(),
            description: dto.description.filter(|d| !d.trim().is_empty()),
            price: dto.price,
        }
    }
}

impl From<UpdateProductDto> for ProductParam {
    fn from(dto: UpdateProductDto) -> Self {
        Self {
            category_id: dto.category_id,
            name: dto.name.trim().to_string(),
            description: dto.description.filter(|d| !d.trim().is_empty()),
            price: dto.price,
        }
    }
}

/// Query options for listing products.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_id: Option<i32>,
}

/// One page of products with the totals needed to render pagination controls.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedProducts {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
