//! Comment (product review) domain model and parameters.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    model::comment::{CommentDto, CreateCommentDto},
    server::{
        model::{product::Product, user::User},
        util::validation::normalize_input,
    },
};

/// A product review left by a user.
///
/// `user` and `product` are populated only by queries that eager-load them.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub name: String,
    pub comment: String,
    pub user_id: i32,
    pub product_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: Option<User>,
    pub product: Option<Product>,
}

impl Comment {
    /// Converts an entity model to the comment domain model without relations.
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            comment: entity.comment,
            user_id: entity.user_id,
            product_id: entity.product_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            user: None,
            product: None,
        }
    }

    pub fn with_user(mut self, user: Option<User>) -> Self {
        self.user = user;
        self
    }

    pub fn with_product(mut self, product: Option<Product>) -> Self {
        self.product = product;
        self
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            name: self.name,
            comment: self.comment,
            user_id: self.user_id,
            product_id: self.product_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            user: self.user.map(User::into_dto),
            product: self.product.map(Product::into_dto),
        }
    }
}

/// Submitted review fields, validated before anything is written.
#[derive(Debug, Clone, Validate)]
pub struct CreateCommentParam {
    #[validate(
        required(message = "The name field is required."),
        length(
            max = 255,
            message = "The name field must not be greater than 255 characters."
        )
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "The comment field is required."),
        length(
            max = 1000,
            message = "The comment field must not be greater than 1000 characters."
        )
    )]
    pub comment: Option<String>,
    #[validate(required(message = "The user id field is required."))]
    pub user_id: Option<i32>,
    #[validate(required(message = "The product id field is required."))]
    pub product_id: Option<i32>,
}

impl From<CreateCommentDto> for CreateCommentParam {
    fn from(dto: CreateCommentDto) -> Self {
        Self {
            name: normalize_input(dto.name),
            comment: normalize_input(dto.comment),
            user_id: dto.user_id,
            product_id: dto.product_id,
        }
    }
}

/// A fully validated review ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub name: String,
    pub comment: String,
    pub user_id: i32,
    pub product_id: i32,
}
