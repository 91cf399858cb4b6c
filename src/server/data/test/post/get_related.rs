use super::*;

/// Tests that related articles are limited and restricted to the category.
///
/// Expected: Ok with the 3 most recent posts of the category
#[tokio::test]
async fn returns_at_most_limit_posts_of_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = &test.db;

    let user = factory::create_user(db).await?;
    let news = factory::create_category(db).await?;
    let tips = factory::create_category(db).await?;

    let mut news_ids = Vec::new();
    for _ in 0..4 {
        let post = factory::post::PostFactory::new(db, user.id)
            .category_id(Some(news.id))
            .build()
            .await?;
        news_ids.push(post.id);
    }
    factory::post::PostFactory::new(db, user.id)
        .category_id(Some(tips.id))
        .build()
        .await?;

    let related = PostRepository::new(db).get_related(news.id, 3).await?;

    let ids: Vec<_> = related.iter().map(|p| p.id).collect();
    news_ids.reverse();
    assert_eq!(ids, news_ids[..3].to_vec());

    Ok(())
}
