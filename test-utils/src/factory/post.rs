//! Post factory for creating test blog post entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test blog posts with customizable fields.
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    category_id: Option<i32>,
    title: String,
    content: String,
    image: Option<String>,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Post {id}"`
    /// - content: `"Content of post {id}"`
    /// - category_id / image: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            category_id: None,
            title: format!("Post {}", id),
            content: format!("Content of post {}", id),
            image: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Builds and inserts the post entity into the database.
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        let now = Utc::now();
        entity::post::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            category_id: ActiveValue::Set(self.category_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            image: ActiveValue::Set(self.image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values for the given author.
pub async fn create_post(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, user_id).build().await
}
