use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    reply::{NewReply, Reply},
    user::User,
};

pub struct ReplyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReplyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the replies to a comment with their authors, oldest first
    pub async fn get_by_comment(&self, review_id: i32) -> Result<Vec<Reply>, DbErr> {
        let rows = entity::prelude::Reply::find()
            .filter(entity::reply::Column::ReviewId.eq(review_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::reply::Column::CreatedAt)
            .order_by_asc(entity::reply::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(reply, user)| Reply::from_entity(reply).with_user(user.map(User::from_entity)))
            .collect())
    }

    pub async fn create(&self, new_reply: NewReply) -> Result<Reply, DbErr> {
        let now = Utc::now();
        let reply = entity::reply::ActiveModel {
            review_id: ActiveValue::Set(new_reply.review_id),
            user_id: ActiveValue::Set(new_reply.user_id),
            reply: ActiveValue::Set(new_reply.reply),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let user = entity::prelude::User::find_by_id(reply.user_id)
            .one(self.db)
            .await?;

        Ok(Reply::from_entity(reply).with_user(user.map(User::from_entity)))
    }

    /// Deletes a reply, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reply::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
