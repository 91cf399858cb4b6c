use crate::server::{
    data::product::ProductRepository,
    model::product::{ProductFilter, ProductParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;
