use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, TransactionTrait,
};

use crate::server::model::{
    comment::{Comment, NewComment},
    product::Product,
    user::User,
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every comment with its author and product, newest first
    pub async fn get_all(&self) -> Result<Vec<Comment>, DbErr> {
        self.fetch_with_relations(entity::prelude::Comment::find())
            .await
    }

    /// Gets the comments left on a product with their authors and product, newest first
    pub async fn get_by_product(&self, product_id: i32) -> Result<Vec<Comment>, DbErr> {
        let query = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ProductId.eq(product_id));

        self.fetch_with_relations(query).await
    }

    /// Gets the comments on any product of a category, newest first
    pub async fn get_by_category(&self, category_id: i32) -> Result<Vec<Comment>, DbErr> {
        let query = entity::prelude::Comment::find()
            .join(
                JoinType::InnerJoin,
                entity::comment::Relation::Product.def(),
            )
            .filter(entity::product::Column::CategoryId.eq(category_id));

        self.fetch_with_relations(query).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let comment = entity::prelude::Comment::find_by_id(id).one(self.db).await?;

        Ok(comment.map(Comment::from_entity))
    }

    /// Inserts a comment and returns it with its author and product loaded
    pub async fn create(&self, new_comment: NewComment) -> Result<Comment, DbErr> {
        let now = Utc::now();
        let comment = entity::comment::ActiveModel {
            name: ActiveValue::Set(new_comment.name),
            comment: ActiveValue::Set(new_comment.comment),
            user_id: ActiveValue::Set(new_comment.user_id),
            product_id: ActiveValue::Set(new_comment.product_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let query = entity::prelude::Comment::find_by_id(comment.id);

        self.fetch_with_relations(query)
            .await?
            .into_iter()
            .next()
            .ok_or(DbErr::RecordNotFound(format!(
                "Comment with id {} not found after creation",
                comment.id
            )))
    }

    /// Deletes a comment together with its replies
    ///
    /// # Returns
    /// - `Ok(true)` - The comment existed and was removed
    /// - `Ok(false)` - No comment with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Reply::delete_many()
            .filter(entity::reply::Column::ReviewId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Comment::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Runs a comment query ordered newest first and attaches authors and products.
    ///
    /// Products are loaded in a single batch query keyed by ID.
    async fn fetch_with_relations(
        &self,
        query: Select<entity::comment::Entity>,
    ) -> Result<Vec<Comment>, DbErr> {
        let rows = query
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        let mut product_ids: Vec<i32> = rows.iter().map(|(c, _)| c.product_id).collect();
        product_ids.sort_unstable();
        product_ids.dedup();

        let products: HashMap<i32, Product> = if product_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Product::find()
                .filter(entity::product::Column::Id.is_in(product_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, Product::from_entity(p)))
                .collect()
        };

        Ok(rows
            .into_iter()
            .map(|(comment, user)| {
                let product = products.get(&comment.product_id).cloned();
                Comment::from_entity(comment)
                    .with_user(user.map(User::from_entity))
                    .with_product(product)
            })
            .collect())
    }
}
