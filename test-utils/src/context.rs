use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// A private in-memory SQLite database for one test.
///
/// Every context opens its own database, so tests never observe each other's rows.
pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Opens an empty in-memory database.
    pub async fn connect() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self { db })
    }

    /// Runs CREATE TABLE statements in order.
    ///
    /// Referenced tables must come before the tables holding foreign keys to them.
    pub async fn create_tables(&self, stmts: &[TableCreateStatement]) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(stmt).await?;
        }

        Ok(())
    }
}
