//! Post records and composite responses

use quill_common::{ForeignKeyed, Related};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stored post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Identifier of a user owned by quill-users
    pub author_id: i64,
}

impl ForeignKeyed for Post {
    fn foreign_id(&self) -> i64 {
        self.author_id
    }
}

/// Fields accepted by create and update
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author_id: i64,
}

/// Body of `GET /posts/:id/with-author`
///
/// `author` is the user record as returned by quill-users, or
/// `{"error": "unable to fetch user"}`.
#[derive(Debug, Serialize)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: Related<Value>,
}
