//! Build-time configuration.
//!
//! Read once at startup; the values are baked in at compile time the same
//! way the deployment pipeline bakes in the store endpoint and credentials.

use crate::graph::client::GraphStoreConfig;

#[derive(Clone, Debug)]
pub struct AppConfig {
	pub graph: GraphStoreConfig,
	pub api_url: String,
}

impl AppConfig {
	pub fn from_build_env() -> Self {
		Self {
			graph: GraphStoreConfig {
				url: option_env!("PAPERWALK_NEO4J_HTTP_URL")
					.unwrap_or("http://localhost:7474")
					.to_string(),
				user: option_env!("PAPERWALK_NEO4J_USER").unwrap_or("neo4j").to_string(),
				password: option_env!("PAPERWALK_NEO4J_PASSWORD").unwrap_or("neo4j").to_string(),
				database: option_env!("PAPERWALK_NEO4J_DATABASE").unwrap_or("neo4j").to_string(),
			},
			api_url: option_env!("PAPERWALK_API_URL")
				.unwrap_or("http://localhost:5007")
				.to_string(),
		}
	}
}
