use super::*;

/// Expected: Ok with the inserted fields
#[tokio::test]
async fn creates_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    let post = PostRepository::new(db)
        .create(NewPost {
            user_id: user.id,
            category_id: Some(category.id),
            title: "Opening day".to_string(),
            content: "We are open".to_string(),
            image: Some("images/abc.png".to_string()),
        })
        .await?;

    assert_eq!(post.title, "Opening day");
    assert_eq!(post.category_id, Some(category.id));
    assert_eq!(post.image.as_deref(), Some("images/abc.png"));

    Ok(())
}

/// Tests the unique title constraint.
///
/// Expected: Err on the second insert with the same title
#[tokio::test]
async fn rejects_duplicate_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    let new_post = || NewPost {
        user_id: user.id,
        category_id: None,
        title: "Same".to_string(),
        content: "Body".to_string(),
        image: None,
    };
    let repo = PostRepository::new(db);

    repo.create(new_post()).await?;
    let result = repo.create(new_post()).await;

    assert!(result.is_err());

    Ok(())
}
