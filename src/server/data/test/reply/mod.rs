use crate::server::{data::reply::ReplyRepository, model::reply::NewReply};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_comment;
