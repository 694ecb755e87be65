//! Integration tests for quill-comments API endpoints
//!
//! The post service is replaced by an in-process fake that counts calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use quill_comments::models::CommentDraft;
use quill_comments::{build_router, AppState};
use quill_common::db::{connect_in_memory, RecordStore};
use quill_common::{FetchRelated, RemoteError};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

/// Post service stand-in
struct FakePosts {
    available: bool,
    calls: AtomicUsize,
}

impl FakePosts {
    fn up() -> Arc<Self> {
        Arc::new(Self { available: true, calls: AtomicUsize::new(0) })
    }

    fn timing_out() -> Arc<Self> {
        Arc::new(Self { available: false, calls: AtomicUsize::new(0) })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FetchRelated for FakePosts {
    type Record = Value;

    fn entity(&self) -> &'static str {
        "post"
    }

    async fn fetch(&self, id: i64) -> Result<Value, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.available {
            Ok(json!({ "id": id, "title": "Mock Post" }))
        } else {
            Err(RemoteError::Transport {
                url: format!("http://localhost:8082/posts/{id}"),
                message: "operation timed out".to_string(),
            })
        }
    }
}

async fn setup(posts: Arc<FakePosts>) -> (AppState, Router) {
    let pool = connect_in_memory().await.unwrap();
    quill_comments::db::init_schema(&pool).await.unwrap();
    let state = AppState::new(pool, posts);
    let app = build_router(state.clone());
    (state, app)
}

fn draft(post_id: i64, author_id: i64, content: &str) -> CommentDraft {
    CommentDraft {
        post_id,
        author_id,
        content: content.to_string(),
    }
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// CRUD
// =============================================================================

#[tokio::test]
async fn test_create_comment() {
    let (_, app) = setup(FakePosts::up()).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/comments",
            json!({ "postId": 1, "authorId": 1, "content": "Nice post!" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert!(body["id"].is_number());
    assert_eq!(body["content"], "Nice post!");
    assert_eq!(body["authorId"], 1);
    assert_eq!(body["postId"], 1);
}

#[tokio::test]
async fn test_get_and_update_comment() {
    let (state, app) = setup(FakePosts::up()).await;
    let saved = state.comments.insert(draft(1, 1, "Old content")).await.unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/comments/{}", saved.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(extract_json(response.into_body()).await["content"], "Old content");

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/comments/{}", saved.id),
            json!({ "postId": 2, "authorId": 2, "content": "Updated content" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["content"], "Updated content");
    assert_eq!(body["authorId"], 2);
    assert_eq!(body["postId"], 2);
}

#[tokio::test]
async fn test_delete_comment() {
    let (state, app) = setup(FakePosts::up()).await;
    let saved = state.comments.insert(draft(1, 1, "Delete me")).await.unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/comments/{}", saved.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(empty_request("GET", &format!("/comments/{}", saved.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Comments for post
// =============================================================================

#[tokio::test]
async fn test_comments_for_post_with_fetched_post() {
    let posts = FakePosts::up();
    let (state, app) = setup(posts.clone()).await;
    state.comments.insert(draft(100, 1, "Comment A")).await.unwrap();
    state.comments.insert(draft(100, 2, "Comment B")).await.unwrap();
    state.comments.insert(draft(101, 2, "Other post")).await.unwrap();

    let response = app
        .oneshot(empty_request("GET", "/comments/post/100"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["post"]["id"], 100);
    assert_eq!(body["post"]["title"], "Mock Post");
    assert_eq!(body["comments"].as_array().unwrap().len(), 2);
    assert_eq!(body["comments"][0]["content"], "Comment A");
    assert_eq!(body["comments"][1]["content"], "Comment B");
    assert_eq!(posts.calls(), 1);
}

#[tokio::test]
async fn test_comments_for_post_survive_post_service_timeout() {
    let posts = FakePosts::timing_out();
    let (state, app) = setup(posts.clone()).await;
    state.comments.insert(draft(100, 1, "Comment A")).await.unwrap();
    state.comments.insert(draft(100, 2, "Comment B")).await.unwrap();

    let response = app
        .oneshot(empty_request("GET", "/comments/post/100"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["comments"].as_array().unwrap().len(), 2);
    assert_eq!(body["post"], json!({ "error": "unable to fetch post" }));
    assert_eq!(posts.calls(), 1, "exactly one attempt, no retry");
}

#[tokio::test]
async fn test_comments_for_post_without_comments_is_still_200() {
    let (_, app) = setup(FakePosts::up()).await;

    let response = app
        .oneshot(empty_request("GET", "/comments/post/7"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["comments"], json!([]));
    assert_eq!(body["post"]["id"], 7);
}
