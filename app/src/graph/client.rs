//! Client for the graph store's HTTP transaction endpoint.
//!
//! Statements are posted with bound parameters and the graph-shaped result
//! format, then folded into [`GraphData`] for the canvas.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::cypher::GraphQuery;
use crate::components::force_graph::{GraphData, GraphLink, GraphNode, NodeProperties};

/// Connection settings for the graph store's HTTP query endpoint.
#[derive(Clone, Debug)]
pub struct GraphStoreConfig {
	pub url: String,
	pub user: String,
	pub password: String,
	pub database: String,
}

impl Default for GraphStoreConfig {
	fn default() -> Self {
		Self {
			url: "http://localhost:7474".to_string(),
			user: "neo4j".to_string(),
			password: "neo4j".to_string(),
			database: "neo4j".to_string(),
		}
	}
}

#[derive(Debug, Error)]
pub enum GraphStoreError {
	#[error("graph store request failed: {0}")]
	Http(#[from] reqwest::Error),
	#[error("graph store query failed: {code}: {message}")]
	Query { code: String, message: String },
}

#[derive(Debug, Serialize)]
struct TxRequest<'a> {
	statements: Vec<TxStatement<'a>>,
}

#[derive(Debug, Serialize)]
struct TxStatement<'a> {
	statement: &'a str,
	parameters: &'a Map<String, Value>,
	#[serde(rename = "resultDataContents")]
	result_data_contents: [&'static str; 1],
}

#[derive(Debug, Deserialize)]
struct TxResponse {
	#[serde(default)]
	results: Vec<TxResult>,
	#[serde(default)]
	errors: Vec<TxError>,
}

#[derive(Debug, Deserialize)]
struct TxResult {
	#[serde(default)]
	data: Vec<TxRow>,
}

#[derive(Debug, Deserialize)]
struct TxRow {
	#[serde(default)]
	graph: TxGraph,
}

#[derive(Debug, Default, Deserialize)]
struct TxGraph {
	#[serde(default)]
	nodes: Vec<TxNode>,
	#[serde(default)]
	relationships: Vec<TxRelationship>,
}

#[derive(Debug, Deserialize)]
struct TxNode {
	id: String,
	#[serde(default)]
	properties: NodeProperties,
}

#[derive(Debug, Deserialize)]
struct TxRelationship {
	id: String,
	#[serde(rename = "type")]
	rel_type: String,
	#[serde(rename = "startNode")]
	start: String,
	#[serde(rename = "endNode")]
	end: String,
}

#[derive(Debug, Deserialize)]
struct TxError {
	#[serde(default)]
	code: String,
	#[serde(default)]
	message: String,
}

/// Run one query against the store and fold the rows into graph data.
pub async fn fetch_graph(
	config: &GraphStoreConfig,
	query: &GraphQuery,
) -> Result<GraphData, GraphStoreError> {
	let url = format!(
		"{}/db/{}/tx/commit",
		config.url.trim_end_matches('/'),
		config.database,
	);
	let request = TxRequest {
		statements: vec![TxStatement {
			statement: &query.statement,
			parameters: &query.parameters,
			result_data_contents: ["graph"],
		}],
	};

	let response = reqwest::Client::new()
		.post(&url)
		.basic_auth(&config.user, Some(&config.password))
		.json(&request)
		.send()
		.await?
		.json::<TxResponse>()
		.await?;

	graph_data_from_response(response)
}

/// Nodes are deduplicated by store id across rows; papers keep their
/// `paperId` as the graph id so links and selections line up with the
/// backend's identifiers.
fn graph_data_from_response(response: TxResponse) -> Result<GraphData, GraphStoreError> {
	if let Some(error) = response.errors.into_iter().next() {
		return Err(GraphStoreError::Query {
			code: error.code,
			message: error.message,
		});
	}

	let mut display_ids: HashMap<String, String> = HashMap::new();
	let mut seen_links: HashSet<String> = HashSet::new();
	let mut data = GraphData::default();

	for row in response.results.into_iter().flat_map(|result| result.data) {
		for node in row.graph.nodes {
			if display_ids.contains_key(&node.id) {
				continue;
			}
			let display = node
				.properties
				.get("paperId")
				.and_then(Value::as_str)
				.map(str::to_string)
				.unwrap_or_else(|| node.id.clone());
			display_ids.insert(node.id, display.clone());
			data.nodes.push(GraphNode {
				id: display,
				properties: node.properties,
			});
		}
		for rel in row.graph.relationships {
			if !seen_links.insert(rel.id.clone()) {
				continue;
			}
			let (Some(source), Some(target)) =
				(display_ids.get(&rel.start), display_ids.get(&rel.end))
			else {
				continue;
			};
			data.links.push(GraphLink {
				id: rel.id,
				source: source.clone(),
				target: target.clone(),
				rel_type: rel.rel_type,
			});
		}
	}

	Ok(data)
}

#[cfg(test)]
mod tests {
	use super::*;

	const GRAPH_RESPONSE: &str = r#"{
		"results": [{
			"columns": ["paper1", "relationship", "paper2"],
			"data": [
				{"graph": {"nodes": [
					{"id": "7", "labels": ["Paper"], "properties": {"paperId": "abc", "citationCount": 12}}
				], "relationships": []}},
				{"graph": {"nodes": [
					{"id": "7", "labels": ["Paper"], "properties": {"paperId": "abc", "citationCount": 12}},
					{"id": "9", "labels": ["Paper"], "properties": {"paperId": "def", "citationCount": 3}}
				], "relationships": [
					{"id": "42", "type": "CITES", "startNode": "7", "endNode": "9", "properties": {}}
				]}}
			]
		}],
		"errors": []
	}"#;

	#[test]
	fn folds_rows_and_dedupes_nodes() {
		let response: TxResponse = serde_json::from_str(GRAPH_RESPONSE).unwrap();
		let data = graph_data_from_response(response).unwrap();

		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.nodes[0].id, "abc");
		assert_eq!(data.links.len(), 1);
		assert_eq!(data.links[0].source, "abc");
		assert_eq!(data.links[0].target, "def");
		assert_eq!(data.links[0].rel_type, "CITES");
	}

	#[test]
	fn store_errors_become_typed_failures() {
		let body = r#"{"results": [], "errors": [
			{"code": "Neo.ClientError.Statement.SyntaxError", "message": "bad query"}
		]}"#;
		let response: TxResponse = serde_json::from_str(body).unwrap();
		let err = graph_data_from_response(response).unwrap_err();
		match err {
			GraphStoreError::Query { code, message } => {
				assert_eq!(code, "Neo.ClientError.Statement.SyntaxError");
				assert_eq!(message, "bad query");
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn nodes_without_paper_id_fall_back_to_store_id() {
		let body = r#"{"results": [{"data": [
			{"graph": {"nodes": [{"id": "3", "properties": {"citationCount": 1}}], "relationships": []}}
		]}], "errors": []}"#;
		let response: TxResponse = serde_json::from_str(body).unwrap();
		let data = graph_data_from_response(response).unwrap();
		assert_eq!(data.nodes[0].id, "3");
	}

	#[test]
	fn request_body_carries_parameters_and_graph_format() {
		let query = crate::graph::cypher::citation_graph_query(7);
		let request = TxRequest {
			statements: vec![TxStatement {
				statement: &query.statement,
				parameters: &query.parameters,
				result_data_contents: ["graph"],
			}],
		};
		let body = serde_json::to_value(&request).unwrap();
		assert_eq!(body["statements"][0]["parameters"]["minCitations"], 7);
		assert_eq!(body["statements"][0]["resultDataContents"][0], "graph");
	}
}
