//! Reply domain model and parameters.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    model::reply::{CreateReplyDto, ReplyDto},
    server::{model::user::User, util::validation::normalize_input},
};

/// A reply posted under a product review.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub id: i32,
    pub review_id: i32,
    pub user_id: i32,
    pub reply: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: Option<User>,
}

impl Reply {
    pub fn from_entity(entity: entity::reply::Model) -> Self {
        Self {
            id: entity.id,
            review_id: entity.review_id,
            user_id: entity.user_id,
            reply: entity.reply,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            user: None,
        }
    }

    pub fn with_user(mut self, user: Option<User>) -> Self {
        self.user = user;
        self
    }

    pub fn into_dto(self) -> ReplyDto {
        ReplyDto {
            id: self.id,
            review_id: self.review_id,
            user_id: self.user_id,
            reply: self.reply,
            created_at: self.created_at,
            updated_at: self.updated_at,
            user: self.user.map(User::into_dto),
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct CreateReplyParam {
    #[validate(required(message = "The user id field is required."))]
    pub user_id: Option<i32>,
    #[validate(
        required(message = "The reply field is required."),
        length(
            max = 1000,
            message = "The reply field must not be greater than 1000 characters."
        )
    )]
    pub reply: Option<String>,
}

impl From<CreateReplyDto> for CreateReplyParam {
    fn from(dto: CreateReplyDto) -> Self {
        Self {
            user_id: dto.user_id,
            reply: normalize_input(dto.reply),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewReply {
    pub review_id: i32,
    pub user_id: i32,
    pub reply: String,
}
