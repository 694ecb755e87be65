//! SQLite-backed post store

use async_trait::async_trait;
use quill_common::db::RecordStore;
use quill_common::Result;
use sqlx::SqlitePool;

use crate::models::{Post, PostDraft};

/// Create the posts table if needed
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            author_id INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[derive(Clone)]
pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PostRepository {
    type Record = Post;
    type Draft = PostDraft;

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, title, content, author_id FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT id, title, content, author_id FROM posts ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    async fn insert(&self, draft: PostDraft) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            "INSERT INTO posts (title, content, author_id) VALUES (?, ?, ?)
             RETURNING id, title, content, author_id",
        )
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(draft.author_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(post)
    }

    async fn update(&self, id: i64, draft: PostDraft) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            "UPDATE posts SET title = ?, content = ?, author_id = ? WHERE id = ?
             RETURNING id, title, content, author_id",
        )
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(draft.author_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
