pub use super::category::Entity as Category;
pub use super::comment::Entity as Comment;
pub use super::post::Entity as Post;
pub use super::product::Entity as Product;
pub use super::reply::Entity as Reply;
pub use super::user::Entity as User;
