use super::*;

/// Tests exact title matching.
///
/// Expected: Ok(true) for the stored title, Ok(false) for any other
#[tokio::test]
async fn detects_existing_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    factory::post::PostFactory::new(db, user.id)
        .title("Summer lookbook")
        .build()
        .await?;
    let repo = PostRepository::new(db);

    assert!(repo.title_exists("Summer lookbook").await?);
    assert!(!repo.title_exists("Winter lookbook").await?);

    Ok(())
}

/// Tests that a post's own title is ignored when checking for collisions.
///
/// Expected: Ok(false) when excluding the owner, Ok(true) for another post
#[tokio::test]
async fn excludes_given_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    let post = factory::post::PostFactory::new(db, user.id)
        .title("Care guide")
        .build()
        .await?;
    let other = factory::create_post(db, user.id).await?;
    let repo = PostRepository::new(db);

    assert!(!repo.title_exists_excluding("Care guide", post.id).await?);
    assert!(repo.title_exists_excluding("Care guide", other.id).await?);

    Ok(())
}
