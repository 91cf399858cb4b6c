use super::*;

/// Tests listing all comments with their relations.
///
/// Verifies that comments come back newest first with author and product attached.
///
/// Expected: Ok with the newer comment first and relations loaded
#[tokio::test]
async fn returns_comments_newest_first_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    let (_, product) = factory::helpers::create_product_with_category(db).await?;
    let now = Utc::now();

    let older = factory::comment::CommentFactory::new(db, user.id, product.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let newer = factory::comment::CommentFactory::new(db, user.id, product.id)
        .created_at(now)
        .build()
        .await?;

    let comments = CommentRepository::new(db).get_all().await?;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, newer.id);
    assert_eq!(comments[1].id, older.id);
    assert_eq!(comments[0].user.as_ref().map(|u| u.id), Some(user.id));
    assert_eq!(comments[0].product.as_ref().map(|p| p.id), Some(product.id));

    Ok(())
}

/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = &test.db;

    let comments = CommentRepository::new(db).get_all().await?;

    assert!(comments.is_empty());

    Ok(())
}
