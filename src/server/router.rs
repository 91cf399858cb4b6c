use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, SuccessDto, ValidationErrorDto},
        category::CategoryDto,
        comment::{CommentCreatedDto, CommentDto, CreateCommentDto},
        post::{PostDto, PostEnvelopeDto, PostListDto, RelatedArticlesDto, TitleExistsDto},
        product::{CreateProductDto, ProductDto, UpdateProductDto},
        reply::{CreateReplyDto, ReplyDto},
        user::UserDto,
    },
    server::{
        controller::{
            category::{self, CATEGORY_TAG},
            comment::{self, COMMENT_TAG},
            post::{self as posts, PostUploadForm, POST_TAG},
            product::{self, ProductImageForm, PRODUCT_TAG},
            reply::{self, REPLY_TAG},
        },
        model::upload::{CREATE_IMAGE_MAX_KIB, UPDATE_IMAGE_MAX_KIB},
        state::AppState,
    },
};

/// Largest request body accepted on post routes: the create image limit plus room for the
/// text fields and multipart framing.
const POST_BODY_LIMIT: usize = CREATE_IMAGE_MAX_KIB * 1024 + 1024 * 1024;

/// Largest request body accepted on the product image upload.
const PRODUCT_IMAGE_BODY_LIMIT: usize = UPDATE_IMAGE_MAX_KIB * 1024 + 64 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        category::get_categories,
        comment::get_comments,
        comment::create_comment,
        comment::get_product_comments,
        comment::get_category_comments,
        comment::delete_comment,
        reply::get_replies,
        reply::create_reply,
        reply::delete_reply,
        posts::get_posts,
        posts::create_post,
        posts::check_title_exists,
        posts::get_post,
        posts::get_related_articles,
        posts::update_post,
        posts::delete_post,
        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,
        product::upload_product_image,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        SuccessDto,
        ValidationErrorDto,
        CategoryDto,
        CommentDto,
        CommentCreatedDto,
        CreateCommentDto,
        ReplyDto,
        CreateReplyDto,
        PostDto,
        PostEnvelopeDto,
        PostListDto,
        RelatedArticlesDto,
        TitleExistsDto,
        PostUploadForm,
        ProductDto,
        CreateProductDto,
        UpdateProductDto,
        ProductImageForm,
        UserDto,
    )),
    tags(
        (name = CATEGORY_TAG, description = "Product categories"),
        (name = COMMENT_TAG, description = "Product reviews"),
        (name = REPLY_TAG, description = "Replies to product reviews"),
        (name = POST_TAG, description = "Blog posts"),
        (name = PRODUCT_TAG, description = "Catalog products"),
    )
)]
pub struct ApiDoc;

/// Builds the API router.
///
/// # Arguments
/// - `storage_root` - Directory served under `/storage`
pub fn router(storage_root: &Path) -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router())
        .nest_service("/storage", ServeDir::new(storage_root))
        .layer(TraceLayer::new_for_http())
}

/// JSON and multipart endpoints under `/api`.
pub fn api_router() -> Router<AppState> {
    let post_routes = Router::new()
        .route("/api/posts", get(posts::get_posts).post(posts::create_post))
        .route("/api/posts/check-title", get(posts::check_title_exists))
        .route(
            "/api/posts/related/{category_id}",
            get(posts::get_related_articles),
        )
        .route(
            "/api/posts/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .post(posts::update_post)
                .delete(posts::delete_post),
        )
        .layer(DefaultBodyLimit::max(POST_BODY_LIMIT));

    let product_image_routes = Router::new()
        .route(
            "/api/products/{id}/image",
            post(product::upload_product_image),
        )
        .layer(DefaultBodyLimit::max(PRODUCT_IMAGE_BODY_LIMIT));

    Router::new()
        .route("/api/categories", get(category::get_categories))
        .route(
            "/api/categories/{category_id}/comments",
            get(comment::get_category_comments),
        )
        .route(
            "/api/comments",
            get(comment::get_comments).post(comment::create_comment),
        )
        .route("/api/comments/{id}", delete(comment::delete_comment))
        .route(
            "/api/comments/{id}/replies",
            get(reply::get_replies).post(reply::create_reply),
        )
        .route("/api/replies/{id}", delete(reply::delete_reply))
        .route(
            "/api/products",
            get(product::get_products).post(product::create_product),
        )
        .route(
            "/api/products/{id}",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
        .route(
            "/api/products/{id}/comments",
            get(comment::get_product_comments),
        )
        .merge(post_routes)
        .merge(product_image_routes)
}
