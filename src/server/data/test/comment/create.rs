use super::*;

/// Tests creating a comment.
///
/// Expected: Ok with the comment and its relations loaded
#[tokio::test]
async fn creates_comment_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    let (_, product) = factory::helpers::create_product_with_category(db).await?;

    let comment = CommentRepository::new(db)
        .create(NewComment {
            name: "Mai".to_string(),
            comment: "Fits well".to_string(),
            user_id: user.id,
            product_id: product.id,
        })
        .await?;

    assert_eq!(comment.name, "Mai");
    assert_eq!(comment.comment, "Fits well");
    assert_eq!(comment.user.map(|u| u.id), Some(user.id));
    assert_eq!(comment.product.map(|p| p.id), Some(product.id));

    Ok(())
}
