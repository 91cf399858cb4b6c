use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Declares which shop tables a test database needs.
///
/// Tables are created in the order they are requested. Requesting a table twice is a no-op,
/// so the presets can be combined freely.
///
/// ```rust,ignore
/// let test = TestBuilder::new().with_review_tables().build().await?;
/// let db = &test.db;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<(String, TableCreateStatement)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the table of a single entity, unless it was already requested.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let name = entity.table_name().to_string();

        if !self.tables.iter().any(|(existing, _)| *existing == name) {
            let stmt = Schema::new(DbBackend::Sqlite).create_table_from_entity(entity);
            self.tables.push((name, stmt));
        }

        self
    }

    /// `user`, `category` and `product`.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(User)
            .with_table(Category)
            .with_table(Product)
    }

    /// The catalog tables plus `comment` and `reply`.
    pub fn with_review_tables(self) -> Self {
        self.with_catalog_tables()
            .with_table(Comment)
            .with_table(Reply)
    }

    /// `user`, `category` and `post`.
    pub fn with_post_tables(self) -> Self {
        self.with_table(User).with_table(Category).with_table(Post)
    }

    /// Every table of the shop schema.
    pub fn with_all_tables(self) -> Self {
        self.with_review_tables().with_post_tables()
    }

    /// Opens a fresh database and creates the requested tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::connect().await?;

        let stmts: Vec<TableCreateStatement> =
            self.tables.into_iter().map(|(_, stmt)| stmt).collect();
        context.create_tables(&stmts).await?;

        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_do_not_repeat_tables() {
        let builder = TestBuilder::new().with_all_tables().with_table(User);

        let names: Vec<&str> = builder.tables.iter().map(|(name, _)| name.as_str()).collect();

        assert_eq!(
            names,
            ["user", "category", "product", "comment", "reply", "post"]
        );
    }

    #[tokio::test]
    async fn builds_usable_database() -> Result<(), TestError> {
        let test = TestBuilder::new().with_post_tables().build().await?;

        let posts = Post::find().all(&test.db).await?;

        assert!(posts.is_empty());

        Ok(())
    }
}
