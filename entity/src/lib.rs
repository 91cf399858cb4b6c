//! SeaORM entity models for the shop database schema.

pub mod prelude;

pub mod category;
pub mod comment;
pub mod post;
pub mod product;
pub mod reply;
pub mod user;
