use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        pagination::PageDto,
        product::{CreateProductDto, ProductDto, UpdateProductDto},
    },
};

/// Get a page of products, optionally restricted to one category
pub async fn get_products(
    page: u64,
    entries: u64,
    category_id: Option<i32>,
) -> Result<PageDto<ProductDto>, ApiError> {
    let mut url = format!("/api/products?page={}&entries={}", page, entries);
    if let Some(category_id) = category_id {
        url.push_str(&format!("&category_id={}", category_id));
    }

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_product(id: i32) -> Result<ProductDto, ApiError> {
    let response = send_request(get(&format!("/api/products/{}", id))).await?;
    parse_response(response).await
}

pub async fn create_product(payload: CreateProductDto) -> Result<ProductDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/products").body(body)).await?;
    parse_response(response).await
}

pub async fn update_product(id: i32, payload: UpdateProductDto) -> Result<ProductDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(put(&format!("/api/products/{}", id)).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_product(id: i32) -> Result<(), ApiError> {
    let response = send_request(delete(&format!("/api/products/{}", id))).await?;
    parse_empty_response(response).await
}
