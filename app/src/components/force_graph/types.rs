use serde_json::{Map, Value};

/// Property record of a graph entity, exactly as returned by the store.
pub type NodeProperties = Map<String, Value>;

#[derive(Clone, Debug)]
pub struct GraphNode {
	pub id: String,
	pub properties: NodeProperties,
}

#[derive(Clone, Debug)]
pub struct GraphLink {
	pub id: String,
	pub source: String,
	pub target: String,
	pub rel_type: String,
}

#[derive(Clone, Debug, Default)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

/// Record stashed in the shared selection state when an edge is clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeSelection {
	pub id: String,
	pub from: String,
	pub to: String,
	pub rel_type: String,
}
