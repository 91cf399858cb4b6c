//! Database repository layer for all domain entities.
//!
//! Repositories wrap a borrowed `DatabaseConnection` and perform the queries, inserts,
//! updates and deletes of a single aggregate. SeaORM entity models stay inside this layer;
//! callers receive the domain models from `server::model`.

pub mod category;
pub mod comment;
pub mod post;
pub mod product;
pub mod reply;
pub mod user;

#[cfg(test)]
mod test;
