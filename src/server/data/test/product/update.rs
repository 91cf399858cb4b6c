use super::*;

/// Tests updating every writable field of a product.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn updates_product_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = &test.db;

    let (_, product) = factory::helpers::create_product_with_category(db).await?;
    let other_category = factory::create_category(db).await?;

    let updated = ProductRepository::new(db)
        .update(
            product.id,
            ProductParam {
                category_id: other_category.id,
                name: "Renamed".to_string(),
                description: None,
                price: 10,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.category_id, other_category.id);
    assert_eq!(updated.description, None);
    assert_eq!(updated.price, 10);

    Ok(())
}

/// Tests updating a product that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = &test.db;

    let category = factory::create_category(db).await?;

    let result = ProductRepository::new(db)
        .update(
            999,
            ProductParam {
                category_id: category.id,
                name: "Ghost".to_string(),
                description: None,
                price: 0,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests pointing a product at a stored image.
///
/// Expected: Ok(Some) with the image path, Ok(None) for a missing product
#[tokio::test]
async fn sets_product_image() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = &test.db;

    let (_, product) = factory::helpers::create_product_with_category(db).await?;
    let repo = ProductRepository::new(db);

    let updated = repo
        .set_image(product.id, "images/scarf.png".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.image.as_deref(), Some("images/scarf.png"));
    assert!(repo
        .set_image(999, "images/ghost.png".to_string())
        .await?
        .is_none());

    Ok(())
}
