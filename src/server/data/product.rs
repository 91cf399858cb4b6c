use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::product::{Product, ProductFilter, ProductParam};

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of products ordered by name.
    ///
    /// # Arguments
    /// - `filter` - Optional category restriction
    /// - `page` - Zero-based page index
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok((products, total))` - Products on the page and the total matching count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: &ProductFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Product>, u64), DbErr> {
        let mut query = entity::prelude::Product::find();

        if let Some(category_id) = filter.category_id {
            query = query.filter(entity::product::Column::CategoryId.eq(category_id));
        }

        let paginator = query
            .order_by_asc(entity::product::Column::Name)
            .order_by_asc(entity::product::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let products = paginator.fetch_page(page).await?;

        Ok((
            products.into_iter().map(Product::from_entity).collect(),
            total,
        ))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let product = entity::prelude::Product::find_by_id(id).one(self.db).await?;

        Ok(product.map(Product::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Product::find()
            .filter(entity::product::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, param: ProductParam) -> Result<Product, DbErr> {
        let now = Utc::now();
        let product = entity::product::ActiveModel {
            category_id: ActiveValue::Set(param.category_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            price: ActiveValue::Set(param.price),
            image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(product))
    }

    /// Updates a product's fields
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - The updated product
    /// - `Ok(None)` - No product with that ID
    pub async fn update(&self, id: i32, param: ProductParam) -> Result<Option<Product>, DbErr> {
        let Some(product) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::product::ActiveModel = product.into();
        active.category_id = ActiveValue::Set(param.category_id);
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.price = ActiveValue::Set(param.price);
        active.updated_at = ActiveValue::Set(Utc::now());

        let product = active.update(self.db).await?;

        Ok(Some(Product::from_entity(product)))
    }

    /// Points a product at a new stored image
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - The updated product
    /// - `Ok(None)` - No product with that ID
    pub async fn set_image(&self, id: i32, image: String) -> Result<Option<Product>, DbErr> {
        let Some(product) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::product::ActiveModel = product.into();
        active.image = ActiveValue::Set(Some(image));
        active.updated_at = ActiveValue::Set(Utc::now());

        let product = active.update(self.db).await?;

        Ok(Some(Product::from_entity(product)))
    }

    /// Deletes a product, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
