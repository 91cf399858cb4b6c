pub use sea_orm_migration::prelude::*;

mod m20241201_000001_create_user_table;
mod m20241201_000002_create_category_table;
mod m20241201_000003_create_product_table;
mod m20241201_000004_create_comment_table;
mod m20241201_000005_create_post_table;
mod m20241204_000006_create_reply_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241201_000001_create_user_table::Migration),
            Box::new(m20241201_000002_create_category_table::Migration),
            Box::new(m20241201_000003_create_product_table::Migration),
            Box::new(m20241201_000004_create_comment_table::Migration),
            Box::new(m20241201_000005_create_post_table::Migration),
            Box::new(m20241204_000006_create_reply_table::Migration),
        ]
    }
}
