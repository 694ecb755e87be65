//! SQLite-backed comment store

use async_trait::async_trait;
use quill_common::db::RecordStore;
use quill_common::Result;
use sqlx::SqlitePool;

use crate::models::{Comment, CommentDraft};

/// Create the comments table if needed
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            post_id INTEGER NOT NULL,
            author_id INTEGER NOT NULL,
            content TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_comments_post_id ON comments(post_id)")
        .execute(pool)
        .await?;
    Ok(())
}

#[derive(Clone)]
pub struct CommentRepository {
    pool: SqlitePool,
}

impl CommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Comments referencing `post_id`, insertion-ordered
    pub async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, post_id, author_id, content FROM comments
             WHERE post_id = ? ORDER BY id ASC",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(comments)
    }
}

#[async_trait]
impl RecordStore for CommentRepository {
    type Record = Comment;
    type Draft = CommentDraft;

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            "SELECT id, post_id, author_id, content FROM comments WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(comment)
    }

    async fn find_all(&self) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, post_id, author_id, content FROM comments ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(comments)
    }

    async fn insert(&self, draft: CommentDraft) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (post_id, author_id, content) VALUES (?, ?, ?)
             RETURNING id, post_id, author_id, content",
        )
        .bind(draft.post_id)
        .bind(draft.author_id)
        .bind(&draft.content)
        .fetch_one(&self.pool)
        .await?;
        Ok(comment)
    }

    async fn update(&self, id: i64, draft: CommentDraft) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            "UPDATE comments SET post_id = ?, author_id = ?, content = ? WHERE id = ?
             RETURNING id, post_id, author_id, content",
        )
        .bind(draft.post_id)
        .bind(draft.author_id)
        .bind(&draft.content)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(comment)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
