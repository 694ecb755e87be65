//! Remote fetch capability for sibling services
//!
//! A [`FetchRelated`] implementation retrieves one record owned by another
//! service, keyed by the foreign identifier stored locally. Every transport,
//! status, or decoding problem surfaces as a [`RemoteError`]; callers decide
//! whether that failure is absorbed (enrichment) or propagated (primary subject).

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("quill/", env!("CARGO_PKG_VERSION"));

/// Connect timeout for sibling services. No overall request timeout is set here;
/// a slow sibling is bounded only by the transport.
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Remote fetch errors
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Connection refused, DNS failure, timeout, ...
    #[error("Network error calling {url}: {message}")]
    Transport { url: String, message: String },

    /// Sibling answered with a non-2xx status
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Body was not the expected JSON shape
    #[error("Could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl RemoteError {
    /// True when the sibling reported the record as absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, RemoteError::Status { status: 404, .. })
    }
}

/// Fetch one related record by its identifier
#[async_trait]
pub trait FetchRelated: Send + Sync {
    /// Decoded shape of the remote record
    type Record: Send;

    /// Human-readable name of the related entity ("user", "post")
    fn entity(&self) -> &'static str;

    /// Fetch the record; fails on any transport or non-success outcome
    async fn fetch(&self, id: i64) -> Result<Self::Record, RemoteError>;
}

/// reqwest-backed fetcher for `GET {base_url}/{collection}/{id}`
///
/// `R` defaults to an untyped JSON value so sibling records pass through
/// unchanged.
pub struct HttpFetcher<R = Value> {
    http_client: reqwest::Client,
    base_url: String,
    collection: &'static str,
    entity: &'static str,
    _record: PhantomData<fn() -> R>,
}

impl<R> HttpFetcher<R> {
    /// Create fetcher for one collection of a sibling service
    ///
    /// `collection` is the path segment ("users"), `entity` the singular
    /// name used in logs and placeholders ("user").
    pub fn new(
        base_url: impl Into<String>,
        collection: &'static str,
        entity: &'static str,
    ) -> Result<Self, RemoteError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| RemoteError::Transport {
                url: base_url.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            http_client,
            base_url,
            collection,
            entity,
            _record: PhantomData,
        })
    }

    /// URL of a single record
    pub fn record_url(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, self.collection, id)
    }
}

#[async_trait]
impl<R> FetchRelated for HttpFetcher<R>
where
    R: DeserializeOwned + Send,
{
    type Record = R;

    fn entity(&self) -> &'static str {
        self.entity
    }

    async fn fetch(&self, id: i64) -> Result<R, RemoteError> {
        let url = self.record_url(id);
        tracing::debug!(entity = self.entity, id, url = %url, "Fetching related record");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response.json::<R>().await.map_err(|e| RemoteError::Decode {
            url,
            message: e.to_string(),
        })
    }
}
