use super::*;

/// Tests listing the comments on every product of a category.
///
/// Verifies that comments on products of other categories are excluded.
///
/// Expected: Ok with the two comments on products of the category
#[tokio::test]
async fn returns_comments_on_products_in_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    let shoes = factory::create_category(db).await?;
    let bags = factory::create_category(db).await?;
    let sneaker = factory::create_product(db, shoes.id).await?;
    let boot = factory::create_product(db, shoes.id).await?;
    let tote = factory::create_product(db, bags.id).await?;

    factory::create_comment(db, user.id, sneaker.id).await?;
    factory::create_comment(db, user.id, boot.id).await?;
    factory::create_comment(db, user.id, tote.id).await?;

    let comments = CommentRepository::new(db)
        .get_by_category(shoes.id)
        .await?;

    assert_eq!(comments.len(), 2);
    assert!(comments
        .iter()
        .all(|c| c.product.as_ref().map(|p| p.category_id) == Some(shoes.id)));

    Ok(())
}
