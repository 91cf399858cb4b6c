use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::{comment::CommentRepository, product::ProductRepository, user::UserRepository},
    error::AppError,
    model::comment::{Comment, CreateCommentParam, NewComment},
    util::validation::{collect, ensure_valid, missing_reference},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all comments with their author and product, newest first
    pub async fn get_all(&self) -> Result<Vec<Comment>, AppError> {
        Ok(CommentRepository::new(self.db).get_all().await?)
    }

    /// Gets the comments of a product, newest first
    ///
    /// An unknown product yields an empty list.
    pub async fn get_by_product(&self, product_id: i32) -> Result<Vec<Comment>, AppError> {
        Ok(CommentRepository::new(self.db)
            .get_by_product(product_id)
            .await?)
    }

    /// Gets the comments on products of a category, newest first
    pub async fn get_by_category(&self, category_id: i32) -> Result<Vec<Comment>, AppError> {
        Ok(CommentRepository::new(self.db)
            .get_by_category(category_id)
            .await?)
    }

    /// Validates and stores a new comment
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment with author and product loaded
    /// - `Err(AppError::Validation)` - A rule failed or the user/product does not exist
    pub async fn create(&self, param: CreateCommentParam) -> Result<Comment, AppError> {
        let mut errors = collect(param.validate());

        if let Some(user_id) = param.user_id {
            if !UserRepository::new(self.db).exists(user_id).await? {
                errors.add("user_id", missing_reference("user id"));
            }
        }

        if let Some(product_id) = param.product_id {
            if !ProductRepository::new(self.db).exists(product_id).await? {
                errors.add("product_id", missing_reference("product id"));
            }
        }

        ensure_valid(errors)?;

        let (Some(name), Some(comment), Some(user_id), Some(product_id)) =
            (param.name, param.comment, param.user_id, param.product_id)
        else {
            return Err(AppError::InternalError(
                "Validated comment is missing required fields".to_string(),
            ));
        };

        let comment = CommentRepository::new(self.db)
            .create(NewComment {
                name,
                comment,
                user_id,
                product_id,
            })
            .await?;

        Ok(comment)
    }

    /// Deletes a comment and its replies
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CommentRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        Ok(())
    }
}
