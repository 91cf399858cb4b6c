pub mod cache;
pub mod cart;
pub mod error;
