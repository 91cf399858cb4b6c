use super::*;

/// Tests creating a product.
///
/// Expected: Ok with the stored fields and no image
#[tokio::test]
async fn creates_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = &test.db;

    let category = factory::create_category(db).await?;

    let product = ProductRepository::new(db)
        .create(ProductParam {
            category_id: category.id,
            name: "Canvas tote".to_string(),
            description: Some("Heavy cotton".to_string()),
            price: 250_000,
        })
        .await?;

    assert_eq!(product.name, "Canvas tote");
    assert_eq!(product.category_id, category.id);
    assert_eq!(product.price, 250_000);
    assert!(product.image.is_none());

    let stored = ProductRepository::new(db).find_by_id(product.id).await?;
    assert_eq!(stored, Some(product));

    Ok(())
}
