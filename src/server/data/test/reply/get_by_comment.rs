use super::*;

/// Tests listing the replies to one comment.
///
/// Expected: Ok with the replies of that comment in insertion order
#[tokio::test]
async fn returns_replies_of_comment_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = &test.db;

    let (user, _, product, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;
    let other_comment = factory::create_comment(db, user.id, product.id).await?;

    let first = factory::create_reply(db, comment.id, user.id).await?;
    let second = factory::create_reply(db, comment.id, user.id).await?;
    factory::create_reply(db, other_comment.id, user.id).await?;

    let replies = ReplyRepository::new(db).get_by_comment(comment.id).await?;

    let ids: Vec<_> = replies.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(replies.iter().all(|r| r.user.is_some()));

    Ok(())
}
