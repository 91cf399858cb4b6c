//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a product together with the category it belongs to.
///
/// # Returns
/// - `Ok((category, product))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_product_with_category(
    db: &DatabaseConnection,
) -> Result<(entity::category::Model, entity::product::Model), DbErr> {
    let category = crate::factory::category::create_category(db).await?;
    let product = crate::factory::product::create_product(db, category.id).await?;

    Ok((category, product))
}

/// Creates a complete review hierarchy with all dependencies.
///
/// Creates, in order:
/// 1. User (as review author)
/// 2. Category
/// 3. Product
/// 4. Comment
///
/// # Returns
/// - `Ok((user, category, product, comment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::product::Model,
        entity::comment::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let (category, product) = create_product_with_category(db).await?;
    let comment = crate::factory::comment::create_comment(db, user.id, product.id).await?;

    Ok((user, category, product, comment))
}
