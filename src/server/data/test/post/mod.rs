use crate::server::{
    data::post::PostRepository,
    model::post::{NewPost, PostChanges},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_related;
mod title_exists;
mod update;
