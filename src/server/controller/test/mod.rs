//! Controller tests driving the full API router with in-memory requests.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{router::api_router, state::AppState, storage::ImageStorage};

mod reply;

const BOUNDARY: &str = "shop-test-boundary";

/// Smallest byte sequences recognised as each accepted image type.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
pub const GIF_BYTES: &[u8] = b"GIF89a\x01\0\x01\0";

/// A router backed by an in-memory database and a temporary storage directory.
pub struct TestApp {
    pub router: Router,
    pub storage: ImageStorage,
    context: TestContext,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let context = TestBuilder::new().with_all_tables().build().await.unwrap();
        let dir = tempfile::tempdir().unwrap();
        let storage = ImageStorage::new(dir.path());
        let db = context.db.clone();

        let router = api_router().with_state(AppState::new(db, storage.clone()));

        Self {
            router,
            storage,
            context,
            _dir: dir,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.context.db
    }

    /// Sends a request and returns the status with the JSON body (`Null` when empty).
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn send_json(&self, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    pub async fn send_form(
        &self,
        method: Method,
        uri: &str,
        fields: &[(&str, &str)],
        image: Option<&[u8]>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(multipart_body(fields, image)))
            .unwrap();

        self.send(request).await
    }
}

/// Encodes text fields and an optional `image` file part as a multipart body.
fn multipart_body(fields: &[(&str, &str)], image: Option<&[u8]>) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }

    if let Some(bytes) = image {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"upload.bin\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                BOUNDARY
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}
