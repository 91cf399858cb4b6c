use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::{comment::CommentRepository, reply::ReplyRepository, user::UserRepository},
    error::AppError,
    model::reply::{CreateReplyParam, NewReply, Reply},
    util::validation::{collect, ensure_valid, missing_reference},
};

pub struct ReplyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReplyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the replies to a comment, oldest first
    pub async fn get_by_comment(&self, comment_id: i32) -> Result<Vec<Reply>, AppError> {
        self.ensure_comment_exists(comment_id).await?;

        Ok(ReplyRepository::new(self.db)
            .get_by_comment(comment_id)
            .await?)
    }

    /// Adds a reply under a comment
    pub async fn create(&self, comment_id: i32, param: CreateReplyParam) -> Result<Reply, AppError> {
        self.ensure_comment_exists(comment_id).await?;

        let mut errors = collect(param.validate());

        if let Some(user_id) = param.user_id {
            if !UserRepository::new(self.db).exists(user_id).await? {
                errors.add("user_id", missing_reference("user id"));
            }
        }

        ensure_valid(errors)?;

        let (Some(user_id), Some(reply)) = (param.user_id, param.reply) else {
            return Err(AppError::InternalError(
                "Validated reply is missing required fields".to_string(),
            ));
        };

        let reply = ReplyRepository::new(self.db)
            .create(NewReply {
                review_id: comment_id,
                user_id,
                reply,
            })
            .await?;

        Ok(reply)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ReplyRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Reply not found".to_string()));
        }

        Ok(())
    }

    async fn ensure_comment_exists(&self, comment_id: i32) -> Result<(), AppError> {
        CommentRepository::new(self.db)
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        Ok(())
    }
}
