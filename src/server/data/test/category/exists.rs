use super::*;

/// Expected: Ok(true) for an inserted category, Ok(false) otherwise
#[tokio::test]
async fn reports_existing_and_missing_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = &test.db;

    let category = factory::create_category(db).await?;
    let repo = CategoryRepository::new(db);

    assert!(repo.exists(category.id).await?);
    assert!(!repo.exists(category.id + 1000).await?);

    Ok(())
}
