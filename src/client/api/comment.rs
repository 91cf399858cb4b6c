use crate::{
    client::{
        api::helper::{delete, get, parse_empty_response, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        comment::{CommentCreatedDto, CommentDto, CreateCommentDto},
        reply::{CreateReplyDto, ReplyDto},
    },
};

pub async fn get_comments() -> Result<Vec<CommentDto>, ApiError> {
    let response = send_request(get("/api/comments")).await?;
    parse_response(response).await
}

pub async fn get_product_comments(product_id: i32) -> Result<Vec<CommentDto>, ApiError> {
    let response = send_request(get(&format!("/api/products/{}/comments", product_id))).await?;
    parse_response(response).await
}

pub async fn create_comment(payload: CreateCommentDto) -> Result<CommentDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/comments").body(body)).await?;
    let created: CommentCreatedDto = parse_response(response).await?;

    Ok(created.comment)
}

pub async fn delete_comment(id: i32) -> Result<(), ApiError> {
    let response = send_request(delete(&format!("/api/comments/{}", id))).await?;
    parse_empty_response(response).await
}

pub async fn get_replies(comment_id: i32) -> Result<Vec<ReplyDto>, ApiError> {
    let response = send_request(get(&format!("/api/comments/{}/replies", comment_id))).await?;
    parse_response(response).await
}

pub async fn create_reply(comment_id: i32, payload: CreateReplyDto) -> Result<ReplyDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response =
        send_request(post(&format!("/api/comments/{}/replies", comment_id)).body(body)).await?;
    parse_response(response).await
}
