use super::*;

/// Tests that only the comments of the requested product are returned.
///
/// Expected: Ok with the single comment on the product
#[tokio::test]
async fn returns_only_comments_of_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = &test.db;

    let (user, category, product, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;
    let other_product = factory::create_product(db, category.id).await?;
    factory::create_comment(db, user.id, other_product.id).await?;

    let comments = CommentRepository::new(db)
        .get_by_product(product.id)
        .await?;

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, comment.id);
    assert!(comments[0].user.is_some());

    Ok(())
}
