use super::*;

/// Expected: Ok with the reply and its author
#[tokio::test]
async fn creates_reply_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = &test.db;

    let (user, _, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;

    let reply = ReplyRepository::new(db)
        .create(NewReply {
            review_id: comment.id,
            user_id: user.id,
            reply: "Thanks for the review".to_string(),
        })
        .await?;

    assert_eq!(reply.review_id, comment.id);
    assert_eq!(reply.reply, "Thanks for the review");
    assert_eq!(reply.user.map(|u| u.id), Some(user.id));

    Ok(())
}
