//! The shop's JSON API.
//!
//! Compiled only with the `server` feature. A request passes through four layers:
//!
//! 1. `controller` extracts the request and turns DTOs into parameter types
//! 2. `service` applies the business rules (title uniqueness, referenced rows exist, image
//!    files follow their rows) and maps failures to `AppError`
//! 3. `data` runs the SeaORM queries and converts entities into `model` types
//! 4. `controller` converts the result back into a DTO
//!
//! `router` wires the handlers together with Swagger UI and the `/storage` file server.
//! `startup` and `config` prepare the database and the image `storage` behind `AppState`.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod storage;
pub mod util;
