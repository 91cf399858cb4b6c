use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReplyDto {
    pub id: i32,
    pub review_id: i32,
    pub user_id: i32,
    pub reply: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateReplyDto {
    pub user_id: Option<i32>,
    pub reply: Option<String>,
}
