use super::*;

/// Tests that only the provided fields change.
///
/// Expected: Ok(Some) with the new title and untouched content
#[tokio::test]
async fn applies_only_provided_changes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    let post = factory::post::PostFactory::new(db, user.id)
        .content("Original body")
        .image("images/old.png")
        .build()
        .await?;

    let updated = PostRepository::new(db)
        .update(
            post.id,
            PostChanges {
                title: Some("New title".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.content, "Original body");
    assert_eq!(updated.image.as_deref(), Some("images/old.png"));

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = &test.db;

    let result = PostRepository::new(db)
        .update(7, PostChanges::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
