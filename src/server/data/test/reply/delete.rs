use super::*;

/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_reply_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = &test.db;

    let (user, _, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let reply = factory::create_reply(db, comment.id, user.id).await?;
    let repo = ReplyRepository::new(db);

    assert!(repo.delete(reply.id).await?);
    assert!(!repo.delete(reply.id).await?);

    Ok(())
}
