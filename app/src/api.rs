//! Thin client for the backend API.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),
	#[error("backend returned HTTP {0}")]
	Status(u16),
}

#[derive(Clone)]
pub struct BackendClient {
	base_url: String,
}

impl BackendClient {
	pub fn new(base_url: String) -> Self {
		Self {
			base_url: base_url.trim_end_matches('/').to_string(),
		}
	}

	/// `GET /search?query=...` — the payload shape is owned by the backend.
	pub async fn search(&self, query: &str) -> Result<Value, ApiError> {
		let url = format!("{}/search", self.base_url);
		let response = reqwest::Client::new()
			.get(&url)
			.query(&[("query", query)])
			.send()
			.await?;
		if !response.status().is_success() {
			return Err(ApiError::Status(response.status().as_u16()));
		}
		Ok(response.json::<Value>().await?)
	}

	/// `GET /papers/expand/{id}` — only success or failure matters here.
	pub async fn expand(&self, paper_id: &str) -> Result<(), ApiError> {
		let url = format!("{}/papers/expand/{}", self.base_url, paper_id);
		let response = reqwest::Client::new().get(&url).send().await?;
		if !response.status().is_success() {
			return Err(ApiError::Status(response.status().as_u16()));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn base_url_is_normalized() {
		let client = BackendClient::new("http://localhost:5007/".to_string());
		assert_eq!(client.base_url, "http://localhost:5007");
	}
}
