//! Test support for the shop workspace.
//!
//! `TestBuilder` opens an in-memory SQLite database with just the tables a test asks for,
//! and `factory` inserts rows into it:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_reviews() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_review_tables().build().await?;
//!     let db = &test.db;
//!
//!     let (_, _, product, _) = factory::helpers::create_comment_with_dependencies(db).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
