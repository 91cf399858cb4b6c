//! Comment factory for creating test product review entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
///
/// The creation timestamp can be overridden to produce deterministic orderings.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    product_id: i32,
    name: String,
    comment: String,
    created_at: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Reviewer {id}"`
    /// - comment: `"Comment {id}"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, user_id: i32, product_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            product_id,
            name: format!("Reviewer {}", id),
            comment: format!("Comment {}", id),
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            name: ActiveValue::Set(self.name),
            comment: ActiveValue::Set(self.comment),
            user_id: ActiveValue::Set(self.user_id),
            product_id: ActiveValue::Set(self.product_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values.
pub async fn create_comment(
    db: &DatabaseConnection,
    user_id: i32,
    product_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, user_id, product_id).build().await
}
