use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, category::CategoryDto},
    server::{error::AppError, service::category::CategoryService, state::AppState},
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// List all categories.
///
/// # Returns
/// - `200 OK` - Categories ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db).get_all().await?;

    Ok(Json(
        categories
            .into_iter()
            .map(|c| c.into_dto())
            .collect::<Vec<_>>(),
    ))
}
