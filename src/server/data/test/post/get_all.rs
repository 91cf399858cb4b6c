use super::*;

/// Tests listing posts with their authors.
///
/// Expected: Ok with the latest post first and authors attached
#[tokio::test]
async fn returns_posts_newest_first_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    factory::create_post(db, user.id).await?;
    let latest = factory::create_post(db, user.id).await?;

    let posts = PostRepository::new(db).get_all().await?;

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, latest.id);
    assert_eq!(posts[0].user.as_ref().map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests loading a single post with its author.
///
/// Expected: Ok(Some) for the post, Ok(None) for an unknown ID
#[tokio::test]
async fn finds_post_with_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    let post = factory::create_post(db, user.id).await?;
    let repo = PostRepository::new(db);

    let found = repo.find_with_user(post.id).await?.unwrap();
    assert_eq!(found.title, post.title);
    assert_eq!(found.user.map(|u| u.name), Some(user.name));

    assert!(repo.find_with_user(post.id + 1000).await?.is_none());

    Ok(())
}
