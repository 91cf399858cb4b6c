use super::*;

/// Tests that categories are returned ordered by name.
///
/// Expected: Ok with categories in alphabetical order
#[tokio::test]
async fn returns_categories_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = &test.db;

    factory::category::CategoryFactory::new(db)
        .name("Shoes")
        .build()
        .await?;
    factory::category::CategoryFactory::new(db)
        .name("Bags")
        .build()
        .await?;

    let categories = CategoryRepository::new(db).get_all().await?;

    let names: Vec<_> = categories.into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Bags".to_string(), "Shoes".to_string()]);

    Ok(())
}

/// Tests listing when no categories exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = &test.db;

    let categories = CategoryRepository::new(db).get_all().await?;

    assert!(categories.is_empty());

    Ok(())
}
