use super::*;

/// Tests deleting a product.
///
/// Expected: Ok(true) the first time, Ok(false) once it is gone
#[tokio::test]
async fn deletes_product_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = &test.db;

    let (_, product) = factory::helpers::create_product_with_category(db).await?;
    let repo = ProductRepository::new(db);

    assert!(repo.delete(product.id).await?);
    assert!(!repo.exists(product.id).await?);
    assert!(!repo.delete(product.id).await?);

    Ok(())
}
