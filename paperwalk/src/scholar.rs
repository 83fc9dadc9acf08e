//! Semantic Scholar Graph API client.
//!
//! API: https://api.semanticscholar.org/graph/v1
//! Unauthenticated use works but is tightly rate-limited; pass an api key
//! when one is configured.

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

const API_BASE: &str = "https://api.semanticscholar.org/graph/v1";

/// Field list shared by every lookup; keep in sync with what the store
/// writes onto `Paper` nodes.
const FIELDS: &str = "title,abstract,citationCount,referenceCount,externalIds,year,authors";

/// One page of citations/references; the API caps pages at 100 anyway.
const PAGE_LIMIT: &str = "100";

#[derive(Clone)]
pub struct SemanticScholarClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl SemanticScholarClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: API_BASE.to_string(),
            api_key,
        }
    }

    async fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<Value> {
        let mut request = self.client.get(url).query(params);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }
        let response = request
            .send()
            .await
            .context("Semantic Scholar request failed")?;
        anyhow::ensure!(
            response.status().is_success(),
            "Semantic Scholar returned HTTP {}",
            response.status(),
        );
        response
            .json()
            .await
            .context("Semantic Scholar returned malformed JSON")
    }

    /// Metadata for one paper.
    pub async fn fetch_paper(&self, paper_id: &str) -> Result<Value> {
        debug!(paper_id, "fetching paper");
        let url = format!("{}/paper/{}", self.base_url, paper_id);
        self.get(&url, &[("fields", FIELDS)]).await
    }

    /// Papers citing `paper_id`; one `{"data": [...]}` page.
    pub async fn fetch_citations(&self, paper_id: &str) -> Result<Value> {
        debug!(paper_id, "fetching citations");
        let url = format!("{}/paper/{}/citations", self.base_url, paper_id);
        self.get(&url, &[("fields", FIELDS), ("limit", PAGE_LIMIT)]).await
    }

    /// Papers referenced by `paper_id`; one `{"data": [...]}` page.
    pub async fn fetch_references(&self, paper_id: &str) -> Result<Value> {
        debug!(paper_id, "fetching references");
        let url = format!("{}/paper/{}/references", self.base_url, paper_id);
        self.get(&url, &[("fields", FIELDS), ("limit", PAGE_LIMIT)]).await
    }

    /// Free-text paper search, `{"total": n, "data": [...]}`.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Value> {
        debug!(query, limit, "searching papers");
        let url = format!("{}/paper/search", self.base_url);
        let limit = limit.to_string();
        self.get(&url, &[("query", query), ("fields", FIELDS), ("limit", &limit)])
            .await
    }
}
