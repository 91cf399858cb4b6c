use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::post::{PostDto, PostListDto, RelatedArticlesDto},
};

pub async fn get_posts() -> Result<Vec<PostDto>, ApiError> {
    let response = send_request(get("/api/posts")).await?;
    let list: PostListDto = parse_response(response).await?;

    Ok(list.posts)
}

/// Get up to three posts of a category
pub async fn get_related_articles(category_id: i32) -> Result<Vec<PostDto>, ApiError> {
    let response = send_request(get(&format!("/api/posts/related/{}", category_id))).await?;
    let related: RelatedArticlesDto = parse_response(response).await?;

    Ok(related.articles)
}
