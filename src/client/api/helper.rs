use crate::{
    client::model::error::ApiError,
    model::api::{ErrorDto, ValidationErrorDto},
};
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Parses a JSON response, turning non-2xx statuses into `ApiError`
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::new(status, format!("Failed to parse response: {}", e)))
    } else {
        Err(error_from(response).await)
    }
}

/// Parses a response whose success body is ignored (204 No Content and the like)
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(error_from(response).await)
    }
}

/// Builds an error from a failed response.
///
/// 422 bodies are flattened into their first field message so forms can show it directly.
async fn error_from(response: Response) -> ApiError {
    let status = response.status() as u64;
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    let message = if let Ok(error_dto) = serde_json::from_str::<ErrorDto>(&text) {
        error_dto.error
    } else if let Ok(validation) = serde_json::from_str::<ValidationErrorDto>(&text) {
        validation
            .errors
            .values()
            .flatten()
            .next()
            .cloned()
            .unwrap_or(validation.message)
    } else {
        text
    };

    ApiError::new(status, message)
}

pub fn get(url: &str) -> Request {
    Request::get(url)
}

/// Create a POST request with JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url).header("Content-Type", "application/json")
}

/// Create a PUT request with JSON content type
pub fn put(url: &str) -> Request {
    Request::put(url).header("Content-Type", "application/json")
}

pub fn delete(url: &str) -> Request {
    Request::delete(url)
}

/// Send a request and handle transport errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(ApiError::network)
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::new(0, format!("Failed to serialize request: {}", e)))
}
