//! Domain models and operation parameters.
//!
//! Domain models are built from entity models at the repository boundary and converted into
//! DTOs at the controller boundary. Parameter types carry the validation rules of each
//! write operation.

pub mod category;
pub mod comment;
pub mod post;
pub mod product;
pub mod reply;
pub mod upload;
pub mod user;
