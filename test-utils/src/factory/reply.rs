//! Reply factory for creating test review reply entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a reply to the given review with default text `"Reply {id}"`.
pub async fn create_reply(
    db: &DatabaseConnection,
    review_id: i32,
    user_id: i32,
) -> Result<entity::reply::Model, DbErr> {
    let now = Utc::now();
    entity::reply::ActiveModel {
        review_id: ActiveValue::Set(review_id),
        user_id: ActiveValue::Set(user_id),
        reply: ActiveValue::Set(format!("Reply {}", next_id())),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
