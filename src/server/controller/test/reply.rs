use axum::http::{Method, StatusCode};
use serde_json::json;
use test_utils::factory;

use super::TestApp;

/// Expected: 404 when replying to an unknown comment
#[tokio::test]
async fn reply_to_missing_comment_returns_404() {
    let app = TestApp::new().await;
    let user = factory::create_user(app.db()).await.unwrap();

    let (status, body) = app
        .send_json(
            Method::POST,
            "/api/comments/77/replies",
            json!({"user_id": user.id, "reply": "Hello"}),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Comment not found"}));
}

/// Tests creating then listing a reply.
///
/// Expected: 201 on create, then the reply is listed under the comment
#[tokio::test]
async fn creates_and_lists_reply() {
    let app = TestApp::new().await;
    let (user, _, _, comment) = factory::helpers::create_comment_with_dependencies(app.db())
        .await
        .unwrap();
    let uri = format!("/api/comments/{}/replies", comment.id);

    let (status, body) = app
        .send_json(
            Method::POST,
            &uri,
            json!({"user_id": user.id, "reply": "Thank you!"}),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["review_id"], json!(comment.id));

    let (status, body) = app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["reply"], json!("Thank you!"));
}

/// Expected: 422 for an empty reply
#[tokio::test]
async fn rejects_empty_reply() {
    let app = TestApp::new().await;
    let (user, _, _, comment) = factory::helpers::create_comment_with_dependencies(app.db())
        .await
        .unwrap();

    let (status, body) = app
        .send_json(
            Method::POST,
            &format!("/api/comments/{}/replies", comment.id),
            json!({"user_id": user.id, "reply": ""}),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["errors"]["reply"].is_array());
}

/// Expected: 204 then 404
#[tokio::test]
async fn deletes_reply() {
    let app = TestApp::new().await;
    let (user, _, _, comment) = factory::helpers::create_comment_with_dependencies(app.db())
        .await
        .unwrap();
    let reply = factory::create_reply(app.db(), comment.id, user.id)
        .await
        .unwrap();
    let uri = format!("/api/replies/{}", reply.id);

    let (status, _) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
