//! Data transfer objects shared between the server API and the web client.

pub mod api;
pub mod category;
pub mod comment;
pub mod pagination;
pub mod post;
pub mod product;
pub mod reply;
pub mod user;
