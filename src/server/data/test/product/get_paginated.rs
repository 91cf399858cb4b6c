use super::*;

/// Tests paging through products.
///
/// Verifies that the page size is honored and the total counts every product.
///
/// Expected: Ok with 2 products on the first page, 1 on the second, total 3
#[tokio::test]
async fn pages_products_with_total() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = &test.db;

    let category = factory::create_category(db).await?;
    for _ in 0..3 {
        factory::create_product(db, category.id).await?;
    }

    let repo = ProductRepository::new(db);
    let filter = ProductFilter::default();

    let (first, total) = repo.get_paginated(&filter, 0, 2).await?;
    let (second, _) = repo.get_paginated(&filter, 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);

    Ok(())
}

/// Tests restricting the listing to one category.
///
/// Expected: Ok with only the products of the requested category
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = &test.db;

    let shoes = factory::create_category(db).await?;
    let bags = factory::create_category(db).await?;
    factory::create_product(db, shoes.id).await?;
    factory::create_product(db, shoes.id).await?;
    let bag = factory::create_product(db, bags.id).await?;

    let filter = ProductFilter {
        category_id: Some(bags.id),
    };
    let (products, total) = ProductRepository::new(db)
        .get_paginated(&filter, 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(products[0].id, bag.id);

    Ok(())
}

/// Tests that products are sorted by name.
///
/// Expected: Ok with names in alphabetical order
#[tokio::test]
async fn orders_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = &test.db;

    let category = factory::create_category(db).await?;
    factory::product::ProductFactory::new(db, category.id)
        .name("Wallet")
        .build()
        .await?;
    factory::product::ProductFactory::new(db, category.id)
        .name("Backpack")
        .build()
        .await?;

    let (products, _) = ProductRepository::new(db)
        .get_paginated(&ProductFilter::default(), 0, 10)
        .await?;

    let names: Vec<_> = products.into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Backpack".to_string(), "Wallet".to_string()]);

    Ok(())
}
