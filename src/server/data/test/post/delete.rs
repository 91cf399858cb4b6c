use super::*;

/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_post_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    let post = factory::create_post(db, user.id).await?;
    let repo = PostRepository::new(db);

    assert!(repo.delete(post.id).await?);
    assert!(repo.find_by_id(post.id).await?.is_none());
    assert!(!repo.delete(post.id).await?);

    Ok(())
}
