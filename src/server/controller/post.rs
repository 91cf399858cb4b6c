use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        post::{PostEnvelopeDto, PostListDto, RelatedArticlesDto, TitleExistsDto},
    },
    server::{
        error::AppError,
        model::post::{CreatePostParam, UpdatePostParam},
        service::post::PostService,
        state::AppState,
        util::multipart::read_post_form,
    },
};

/// Tag for grouping blog post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

/// Multipart form accepted when creating or updating a post.
///
/// Only used to document the request body; handlers read the parts themselves.
#[allow(dead_code)]
#[derive(utoipa::ToSchema)]
pub struct PostUploadForm {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Required on create, ignored on update
    pub user_id: Option<i32>,
    /// Ignored on update
    pub category_id: Option<i32>,
    /// jpeg, png or gif
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TitleQuery {
    pub title: Option<String>,
}

/// List all posts with their authors, newest first.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    responses(
        (status = 200, description = "All posts", body = PostListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db, &state.storage)
        .get_all()
        .await?;

    Ok(Json(PostListDto {
        message: "Posts fetched successfully".to_string(),
        posts: posts.into_iter().map(|p| p.into_dto()).collect(),
    }))
}

/// Create a post.
///
/// Accepts a multipart form with an optional image. The title is checked for uniqueness
/// before any other rule.
///
/// # Returns
/// - `201 Created` - `{message, post}`
/// - `400 Bad Request` - Title already taken, or malformed multipart body
/// - `422 Unprocessable Entity` - Missing fields, unknown user/category, bad image
/// - `500 Internal Server Error` - Database or storage error
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    request_body(content = PostUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Created post", body = PostEnvelopeDto),
        (status = 400, description = "Title already exists", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = read_post_form(multipart).await?;

    let post = PostService::new(&state.db, &state.storage)
        .create(CreatePostParam::from(form))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PostEnvelopeDto {
            message: "Post created successfully".to_string(),
            post: post.into_dto(),
        }),
    ))
}

/// Check whether a title is already used by a post.
///
/// # Returns
/// - `200 OK` - `{exists}`
/// - `400 Bad Request` - Missing or empty title
#[utoipa::path(
    get,
    path = "/api/posts/check-title",
    tag = POST_TAG,
    params(TitleQuery),
    responses(
        (status = 200, description = "Whether the title exists", body = TitleExistsDto),
        (status = 400, description = "Title must not be empty", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_title_exists(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let exists = PostService::new(&state.db, &state.storage)
        .title_exists(query.title.as_deref())
        .await?;

    Ok(Json(TitleExistsDto { exists }))
}

/// Get a post with its author.
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "The post", body = PostEnvelopeDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db, &state.storage)
        .get_by_id(id)
        .await?;

    Ok(Json(PostEnvelopeDto {
        message: "Post fetched successfully".to_string(),
        post: post.into_dto(),
    }))
}

/// List up to three posts of a category.
#[utoipa::path(
    get,
    path = "/api/posts/related/{category_id}",
    tag = POST_TAG,
    params(("category_id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Related articles", body = RelatedArticlesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_related_articles(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let articles = PostService::new(&state.db, &state.storage)
        .get_related(category_id)
        .await?;

    Ok(Json(RelatedArticlesDto {
        articles: articles.into_iter().map(|p| p.into_dto()).collect(),
    }))
}

/// Update a post.
///
/// Every field is optional. A new image replaces the stored one and the previous file is
/// deleted. Routed for both `PUT` and `POST` since browsers cannot send multipart `PUT`
/// forms.
///
/// # Returns
/// - `200 OK` - `{message, post}`
/// - `400 Bad Request` - Title belongs to another post
/// - `404 Not Found` - No post with that ID
/// - `422 Unprocessable Entity` - Over-long title or bad image
/// - `500 Internal Server Error` - Database or storage error
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post ID")),
    request_body(content = PostUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Updated post", body = PostEnvelopeDto),
        (status = 400, description = "Title already exists", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = read_post_form(multipart).await?;

    let post = PostService::new(&state.db, &state.storage)
        .update(id, UpdatePostParam::from(form))
        .await?;

    Ok(Json(PostEnvelopeDto {
        message: "Post updated successfully".to_string(),
        post: post.into_dto(),
    }))
}

/// Delete a post and its image.
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post deleted", body = MessageDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    PostService::new(&state.db, &state.storage)
        .delete(id)
        .await?;

    Ok(Json(MessageDto {
        message: "Post deleted successfully".to_string(),
    }))
}
