//! Resilient enrichment
//!
//! Combines a locally stored primary record with a best-effort lookup of the
//! record it references in a sibling service. The lookup runs exactly once
//! with no retry. Any failure is replaced by an [`ErrorPlaceholder`], so the
//! composite response always carries a `related` value and the request
//! itself still succeeds.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::remote::FetchRelated;

/// Stand-in for a related record that could not be fetched
///
/// Serializes as `{"error": "unable to fetch <entity>"}`. Carries no
/// diagnostic detail from the underlying failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPlaceholder {
    pub error: String,
}

impl ErrorPlaceholder {
    /// Placeholder naming the dependency that failed
    pub fn unable_to_fetch(entity: &str) -> Self {
        Self {
            error: format!("unable to fetch {entity}"),
        }
    }
}

/// Related record or the placeholder that replaced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Related<R> {
    Found(R),
    Unavailable(ErrorPlaceholder),
}

impl<R> Related<R> {
    pub fn is_found(&self) -> bool {
        matches!(self, Related::Found(_))
    }

    pub fn placeholder(&self) -> Option<&ErrorPlaceholder> {
        match self {
            Related::Found(_) => None,
            Related::Unavailable(p) => Some(p),
        }
    }
}

/// A primary record holding a foreign key into another service
pub trait ForeignKeyed {
    fn foreign_id(&self) -> i64;
}

/// Primary record plus its (possibly degraded) related record. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Enriched<P, R> {
    pub primary: P,
    pub related: Related<R>,
}

/// Fetch the related record once; substitute a placeholder on any failure
pub async fn fetch_or_placeholder<F>(fetcher: &F, id: i64) -> Related<F::Record>
where
    F: FetchRelated + ?Sized,
{
    match fetcher.fetch(id).await {
        Ok(record) => Related::Found(record),
        Err(e) => {
            warn!(entity = fetcher.entity(), id, error = %e, "Related record unavailable, using placeholder");
            Related::Unavailable(ErrorPlaceholder::unable_to_fetch(fetcher.entity()))
        }
    }
}

/// Enrich a primary record with the record its foreign key points at
pub async fn enrich<P, F>(primary: P, fetcher: &F) -> Enriched<P, F::Record>
where
    P: ForeignKeyed,
    F: FetchRelated + ?Sized,
{
    let related = fetch_or_placeholder(fetcher, primary.foreign_id()).await;
    Enriched { primary, related }
}
