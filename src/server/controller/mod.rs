//! HTTP handlers.
//!
//! Controllers extract request data, convert DTOs into parameter types, call a service and
//! convert the resulting domain models back into DTOs. Every handler is annotated with
//! `#[utoipa::path]` and listed in the OpenAPI document assembled in `server::router`.

pub mod category;
pub mod comment;
pub mod post;
pub mod product;
pub mod reply;

#[cfg(test)]
mod test;
