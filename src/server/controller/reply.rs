use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        reply::{CreateReplyDto, ReplyDto},
    },
    server::{
        error::AppError, model::reply::CreateReplyParam, service::reply::ReplyService,
        state::AppState,
    },
};

/// Tag for grouping reply endpoints in OpenAPI documentation
pub static REPLY_TAG: &str = "reply";

/// List the replies to a comment, oldest first.
#[utoipa::path(
    get,
    path = "/api/comments/{id}/replies",
    tag = REPLY_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Replies to the comment", body = Vec<ReplyDto>),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_replies(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let replies = ReplyService::new(&state.db).get_by_comment(id).await?;

    Ok(Json(
        replies.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Reply to a comment.
///
/// # Returns
/// - `201 Created` - The reply with its author
/// - `404 Not Found` - No comment with that ID
/// - `422 Unprocessable Entity` - Empty or over-long reply, unknown user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/comments/{id}/replies",
    tag = REPLY_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    request_body = CreateReplyDto,
    responses(
        (status = 201, description = "Created reply", body = ReplyDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reply(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<CreateReplyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let reply = ReplyService::new(&state.db)
        .create(id, CreateReplyParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(reply.into_dto())))
}

/// Delete a reply.
#[utoipa::path(
    delete,
    path = "/api/replies/{id}",
    tag = REPLY_TAG,
    params(("id" = i32, Path, description = "Reply ID")),
    responses(
        (status = 204, description = "Reply deleted"),
        (status = 404, description = "Reply not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reply(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ReplyService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
