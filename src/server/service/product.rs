//! Catalog products and their images.

use sea_orm::DatabaseConnection;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::server::{
    data::{category::CategoryRepository, product::ProductRepository},
    error::AppError,
    model::{
        product::{PaginatedProducts, Product, ProductFilter, ProductParam},
        upload::{ImageUpload, UPDATE_IMAGE_MAX_KIB},
    },
    storage::{ImageStorage, IMAGE_DIRECTORY},
    util::validation::{collect, ensure_valid, missing_reference, rule_error},
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a ImageStorage,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a ImageStorage) -> Self {
        Self { db, storage }
    }

    /// Gets a page of products
    ///
    /// # Arguments
    /// - `filter` - Optional category restriction
    /// - `page` - Zero-based page index
    /// - `per_page` - Page size
    pub async fn get_paginated(
        &self,
        filter: ProductFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedProducts, AppError> {
        let repo = ProductRepository::new(self.db);

        let (products, total) = repo.get_paginated(&filter, page, per_page).await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedProducts {
            products,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        let repo = ProductRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    pub async fn create(&self, param: ProductParam) -> Result<Product, AppError> {
        self.validate(&param).await?;

        let repo = ProductRepository::new(self.db);

        Ok(repo.create(param).await?)
    }

    /// Updates a product
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - The updated product
    /// - `Ok(None)` - No product with that ID
    /// - `Err(AppError::Validation)` - Invalid fields or unknown category
    pub async fn update(&self, id: i32, param: ProductParam) -> Result<Option<Product>, AppError> {
        let repo = ProductRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(None);
        }

        self.validate(&param).await?;

        Ok(repo.update(id, param).await?)
    }

    /// Stores a new product image and removes the file it replaces
    ///
    /// # Returns
    /// - `Ok(Product)` - The product pointing at the new image
    /// - `Err(AppError::NotFound)` - No product with that ID
    /// - `Err(AppError::Validation)` - No image sent, or not an acceptable image
    pub async fn replace_image(
        &self,
        id: i32,
        upload: Option<ImageUpload>,
    ) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        let upload = upload
            .ok_or_else(|| image_error(rule_error("required", "The image field is required.")))?;
        let format = upload
            .check(UPDATE_IMAGE_MAX_KIB)
            .map_err(image_error)?;

        let path = self
            .storage
            .store(IMAGE_DIRECTORY, &upload.bytes, format.extension())
            .await?;

        let product = match repo.set_image(id, path.clone()).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                self.storage.discard(Some(&path)).await;
                return Err(AppError::NotFound("Product not found".to_string()));
            }
            Err(err) => {
                self.storage.discard(Some(&path)).await;
                return Err(err.into());
            }
        };

        self.storage.discard(existing.image.as_deref()).await;

        Ok(product)
    }

    /// Deletes a product and its image; its comments are removed by the cascading foreign key
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ProductRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        if !repo.delete(id).await? {
            return Err(AppError::NotFound("Product not found".to_string()));
        }

        self.storage.discard(existing.image.as_deref()).await;

        Ok(())
    }

    async fn validate(&self, param: &ProductParam) -> Result<(), AppError> {
        let mut errors = collect(param.validate());

        if !CategoryRepository::new(self.db)
            .exists(param.category_id)
            .await?
        {
            errors.add("category_id", missing_reference("category id"));
        }

        ensure_valid(errors)
    }
}

/// Reports a failed rule on the `image` field as a 422.
fn image_error(error: ValidationError) -> AppError {
    let mut errors = ValidationErrors::new();
    errors.add("image", error);

    AppError::Validation(errors)
}
