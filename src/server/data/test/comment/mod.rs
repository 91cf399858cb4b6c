use crate::server::{data::comment::CommentRepository, model::comment::NewComment};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_category;
mod get_by_product;
