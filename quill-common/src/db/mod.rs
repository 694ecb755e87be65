//! Local record store
//!
//! Each service owns one SQLite table behind a [`RecordStore`]. Records are
//! returned in insertion order, which is ascending identifier order because
//! tables use `AUTOINCREMENT` and identifiers are never reused.

use async_trait::async_trait;

use crate::Result;

pub mod init;

pub use init::{connect, connect_in_memory, open_pool};

/// Find/save/delete by identifier for one record type
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Stored record, identifier included
    type Record: Send;
    /// Mutable fields supplied by create and update requests
    type Draft: Send;

    async fn find_by_id(&self, id: i64) -> Result<Option<Self::Record>>;

    /// All records, insertion-ordered
    async fn find_all(&self) -> Result<Vec<Self::Record>>;

    /// Store a new record; the identifier is assigned here
    async fn insert(&self, draft: Self::Draft) -> Result<Self::Record>;

    /// Replace the mutable fields of an existing record; `None` if absent
    async fn update(&self, id: i64, draft: Self::Draft) -> Result<Option<Self::Record>>;

    /// Returns whether the record existed
    async fn delete_by_id(&self, id: i64) -> Result<bool>;
}
