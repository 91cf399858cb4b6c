use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    post::{NewPost, Post, PostChanges},
    user::User,
};

pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every post with its author, newest first
    pub async fn get_all(&self) -> Result<Vec<Post>, DbErr> {
        let rows = entity::prelude::Post::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(post, user)| Post::from_entity(post).with_user(user.map(User::from_entity)))
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Post>, DbErr> {
        let post = entity::prelude::Post::find_by_id(id).one(self.db).await?;

        Ok(post.map(Post::from_entity))
    }

    /// Finds a post by ID with its author loaded
    pub async fn find_with_user(&self, id: i32) -> Result<Option<Post>, DbErr> {
        let row = entity::prelude::Post::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.map(|(post, user)| Post::from_entity(post).with_user(user.map(User::from_entity))))
    }

    /// Checks whether any post already uses the title
    pub async fn title_exists(&self, title: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Post::find()
            .filter(entity::post::Column::Title.eq(title))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a post other than `id` already uses the title
    pub async fn title_exists_excluding(&self, title: &str, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Post::find()
            .filter(entity::post::Column::Title.eq(title))
            .filter(entity::post::Column::Id.ne(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets up to `limit` posts of a category, most recently created first
    pub async fn get_related(&self, category_id: i32, limit: u64) -> Result<Vec<Post>, DbErr> {
        let posts = entity::prelude::Post::find()
            .filter(entity::post::Column::CategoryId.eq(category_id))
            .order_by_desc(entity::post::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(posts.into_iter().map(Post::from_entity).collect())
    }

    pub async fn create(&self, new_post: NewPost) -> Result<Post, DbErr> {
        let now = Utc::now();
        let post = entity::post::ActiveModel {
            user_id: ActiveValue::Set(new_post.user_id),
            category_id: ActiveValue::Set(new_post.category_id),
            title: ActiveValue::Set(new_post.title),
            content: ActiveValue::Set(new_post.content),
            image: ActiveValue::Set(new_post.image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Post::from_entity(post))
    }

    /// Applies the provided changes to a post
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - The updated post, without relations
    /// - `Ok(None)` - No post with that ID
    pub async fn update(&self, id: i32, changes: PostChanges) -> Result<Option<Post>, DbErr> {
        let Some(post) = entity::prelude::Post::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::post::ActiveModel = post.into();
        if let Some(title) = changes.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(content) = changes.content {
            active.content = ActiveValue::Set(content);
        }
        if let Some(image) = changes.image {
            active.image = ActiveValue::Set(Some(image));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let post = active.update(self.db).await?;

        Ok(Some(Post::from_entity(post)))
    }

    /// Deletes a post, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Post::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
