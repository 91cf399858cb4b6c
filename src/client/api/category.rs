use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::category::CategoryDto,
};

pub async fn get_categories() -> Result<Vec<CategoryDto>, ApiError> {
    let response = send_request(get("/api/categories")).await?;
    parse_response(response).await
}
