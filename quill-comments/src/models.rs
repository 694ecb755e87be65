//! Comment records and the comments-for-post response

use quill_common::Related;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stored comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    /// Post owned by quill-posts
    pub post_id: i64,
    /// User owned by quill-users
    pub author_id: i64,
    pub content: String,
}

/// Fields accepted by create and update
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDraft {
    pub post_id: i64,
    pub author_id: i64,
    pub content: String,
}

/// Body of `GET /comments/post/:post_id`
#[derive(Debug, Serialize)]
pub struct CommentsForPost {
    /// Post from quill-posts, or `{"error": "unable to fetch post"}`
    pub post: Related<Value>,
    /// Local comments referencing the post, insertion-ordered
    pub comments: Vec<Comment>,
}
