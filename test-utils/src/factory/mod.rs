//! Row factories with defaults good enough for most tests.
//!
//! Each module has a `*Factory` builder for the fields a test cares about and a `create_*`
//! shorthand that inserts a row with defaults. Parents are passed in by id, so a test
//! creates exactly the rows it needs:
//!
//! ```rust,ignore
//! let author = factory::create_user(&db).await?;
//! let post = factory::post::PostFactory::new(&db, author.id)
//!     .title("Spring collection")
//!     .build()
//!     .await?;
//!
//! // Review with its author, category and product
//! let (user, category, product, comment) =
//!     factory::helpers::create_comment_with_dependencies(&db).await?;
//! ```

pub mod category;
pub mod comment;
pub mod helpers;
pub mod post;
pub mod product;
pub mod reply;
pub mod user;

pub use category::create_category;
pub use comment::create_comment;
pub use post::create_post;
pub use product::create_product;
pub use reply::create_reply;
pub use user::create_user;
