use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{product::ProductDto, user::UserDto};

/// A product review. `user` and `product` are present when the endpoint eager-loads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CommentDto {
    pub id: i32,
    pub name: String,
    pub comment: String,
    pub user_id: i32,
    pub product_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductDto>,
}

/// Every field is optional on the wire so that missing values surface as
/// field-level validation errors rather than a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateCommentDto {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub user_id: Option<i32>,
    pub product_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CommentCreatedDto {
    pub success: bool,
    pub comment: CommentDto,
}
