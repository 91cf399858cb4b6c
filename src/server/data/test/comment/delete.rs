use super::*;

/// Tests that deleting a comment also removes its replies.
///
/// Expected: Ok(true) and no replies left for the comment
#[tokio::test]
async fn deletes_comment_and_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = &test.db;

    let (user, _, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    factory::create_reply(db, comment.id, user.id).await?;
    factory::create_reply(db, comment.id, user.id).await?;

    let deleted = CommentRepository::new(db).delete(comment.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Comment::find_by_id(comment.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Reply::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting a comment that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = &test.db;

    let deleted = CommentRepository::new(db).delete(42).await?;

    assert!(!deleted);

    Ok(())
}
