use axum::{
    extract::{rejection::JsonRejection, Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        pagination::PageDto,
        product::{CreateProductDto, ProductDto, UpdateProductDto},
    },
    server::{
        error::AppError,
        model::product::{ProductFilter, ProductParam},
        service::product::ProductService,
        state::AppState,
        util::multipart::read_image_form,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// Multipart form accepted when uploading a product image.
///
/// Only used to document the request body; the handler reads the part itself.
#[allow(dead_code)]
#[derive(utoipa::ToSchema)]
pub struct ProductImageForm {
    /// jpeg, png or gif
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Zero-based page index
    #[serde(default)]
    pub page: u64,
    /// Page size
    #[serde(default = "default_entries")]
    pub entries: u64,
    /// Only list products of this category
    pub category_id: Option<i32>,
}

fn default_entries() -> u64 {
    10
}

/// List products.
///
/// Returns one page of products ordered by name, optionally restricted to a category.
///
/// # Returns
/// - `200 OK` - Page of products
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(ProductQuery),
    responses(
        (status = 200, description = "Page of products", body = PageDto<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ProductFilter {
        category_id: query.category_id,
    };

    let page = ProductService::new(&state.db, &state.storage)
        .get_paginated(filter, query.page, query.entries)
        .await?;

    Ok(Json(PageDto {
        items: page.products.into_iter().map(|p| p.into_dto()).collect(),
        total: page.total,
        page: page.page,
        per_page: page.per_page,
        total_pages: page.total_pages,
    }))
}

/// Get a product by ID.
///
/// # Returns
/// - `200 OK` - The product
/// - `404 Not Found` - No product with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "The product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db, &state.storage)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product.into_dto()))
}

/// Create a product.
///
/// # Returns
/// - `201 Created` - The created product
/// - `422 Unprocessable Entity` - Invalid fields or unknown category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Created product", body = ProductDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let product = ProductService::new(&state.db, &state.storage)
        .create(ProductParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// Update a product.
///
/// # Returns
/// - `200 OK` - The updated product
/// - `404 Not Found` - No product with that ID
/// - `422 Unprocessable Entity` - Invalid fields or unknown category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Updated product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let product = ProductService::new(&state.db, &state.storage)
        .update(id, ProductParam::from(payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product.into_dto()))
}

/// Upload a product image.
///
/// The stored file replaces the previous image, which is deleted.
///
/// # Returns
/// - `200 OK` - The product with its new image path
/// - `400 Bad Request` - Malformed multipart body
/// - `404 Not Found` - No product with that ID
/// - `422 Unprocessable Entity` - Missing image, unsupported type or oversized file
/// - `500 Internal Server Error` - Database or storage error
#[utoipa::path(
    post,
    path = "/api/products/{id}/image",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body(content = ProductImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Updated product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_product_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let image = read_image_form(multipart).await?;

    let product = ProductService::new(&state.db, &state.storage)
        .replace_image(id, image)
        .await?;

    Ok(Json(product.into_dto()))
}

/// Delete a product.
///
/// Comments on the product are removed with it, and so is its image file.
///
/// # Returns
/// - `204 No Content` - Product deleted
/// - `404 Not Found` - No product with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ProductService::new(&state.db, &state.storage).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
