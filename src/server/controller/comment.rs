use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto, ValidationErrorDto},
        comment::{CommentCreatedDto, CommentDto, CreateCommentDto},
    },
    server::{
        error::AppError, model::comment::CreateCommentParam, service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// List all comments.
///
/// Returns every product review with its author and product, newest first. Used by the
/// admin dashboard for moderation.
///
/// # Returns
/// - `200 OK` - All comments
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/comments",
    tag = COMMENT_TAG,
    responses(
        (status = 200, description = "All comments", body = Vec<CommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db).get_all().await?;

    Ok(Json(
        comments
            .into_iter()
            .map(|c| c.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Create a comment.
///
/// # Returns
/// - `200 OK` - `{success: true, comment}`
/// - `422 Unprocessable Entity` - Missing or over-long fields, unknown user or product
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 200, description = "Created comment", body = CommentCreatedDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    payload: Result<Json<CreateCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let comment = CommentService::new(&state.db)
        .create(CreateCommentParam::from(payload))
        .await?;

    Ok(Json(CommentCreatedDto {
        success: true,
        comment: comment.into_dto(),
    }))
}

/// List the comments of a product.
///
/// # Returns
/// - `200 OK` - Comments of the product, newest first (empty for an unknown product)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/products/{id}/comments",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Comments of the product", body = Vec<CommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product_comments(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db)
        .get_by_product(product_id)
        .await?;

    Ok(Json(
        comments
            .into_iter()
            .map(|c| c.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// List the comments on products of a category.
#[utoipa::path(
    get,
    path = "/api/categories/{category_id}/comments",
    tag = COMMENT_TAG,
    params(("category_id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Comments in the category", body = Vec<CommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category_comments(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db)
        .get_by_category(category_id)
        .await?;

    Ok(Json(
        comments
            .into_iter()
            .map(|c| c.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Delete a comment.
///
/// Replies to the comment are deleted with it.
///
/// # Returns
/// - `200 OK` - `{success: true, message}`
/// - `404 Not Found` - No comment with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment deleted", body = SuccessDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    CommentService::new(&state.db).delete(id).await?;

    Ok(Json(SuccessDto {
        success: true,
        message: "Comment deleted successfully".to_string(),
    }))
}
