use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use vitrine_core::Product;

use crate::error::CatalogError;
use crate::normalize::normalize_documents;

/// Read-only HTTP client for the hosted store's document REST API.
///
/// Fetches a collection's document list and hands the raw documents to the
/// normalizer. Failures surface immediately as typed errors — no retries
/// and no automatic re-fetch; the screen that owns the snapshot shows the
/// error and offers a manual retry.
#[derive(Debug)]
pub struct StoreClient {
    client: Client,
    base_url: String,
}

/// Document-list envelope returned by the store for a collection query.
#[derive(Debug, Deserialize)]
struct DocumentListResponse {
    /// Total matching documents; informational only.
    #[serde(default)]
    #[allow(dead_code)]
    total: Option<u64>,
    documents: Vec<Value>,
}

impl StoreClient {
    /// Creates a `StoreClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidStoreUrl`] if `base_url` is not a valid
    ///   absolute URL.
    /// - [`CatalogError::Http`] if the underlying `reqwest::Client` cannot
    ///   be constructed.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        if let Err(e) = reqwest::Url::parse(base_url) {
            return Err(CatalogError::InvalidStoreUrl {
                store_url: base_url.to_owned(),
                reason: e.to_string(),
            });
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetches the raw document list for `collection`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] — HTTP 404 (unknown collection).
    /// - [`CatalogError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`CatalogError::Http`] — network or TLS failure.
    /// - [`CatalogError::Deserialize`] — body is not a valid document-list
    ///   envelope.
    pub async fn fetch_documents(&self, collection: &str) -> Result<Vec<Value>, CatalogError> {
        let url = self.documents_url(collection);
        tracing::debug!(collection, url, "fetching document list");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound { url });
        }
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let parsed =
            serde_json::from_str::<DocumentListResponse>(&body).map_err(|e| {
                CatalogError::Deserialize {
                    context: format!("document list for collection {collection}"),
                    source: e,
                }
            })?;

        Ok(parsed.documents)
    }

    /// Fetches `collection` and normalizes every document into a canonical
    /// [`Product`], preserving store order.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_documents`]; normalization
    /// itself never fails.
    pub async fn fetch_products(&self, collection: &str) -> Result<Vec<Product>, CatalogError> {
        let documents = self.fetch_documents(collection).await?;
        Ok(normalize_documents(&documents))
    }

    /// Builds the document-list URL for `collection`.
    fn documents_url(&self, collection: &str) -> String {
        format!("{}/collections/{collection}/documents", self.base_url)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
