//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They:
//!
//! - **Validate**: Run declarative rules and the checks that need the database
//! - **Orchestrate**: Coordinate repository calls with image storage
//! - **Map failures**: Turn missing rows and rule violations into `AppError`

pub mod category;
pub mod comment;
pub mod post;
pub mod product;
pub mod reply;
