//! Owns the rendered graph data and re-runs the store query on demand.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::client::{self, GraphStoreConfig};
use super::cypher::citation_graph_query;
use crate::components::force_graph::GraphData;

/// Handle shared through context: every control that wants a re-render goes
/// through [`GraphController::initialize`].
#[derive(Clone, Copy)]
pub struct GraphController {
	config: StoredValue<GraphStoreConfig>,
	data: RwSignal<GraphData>,
	generation: RwSignal<u64>,
}

impl GraphController {
	pub fn new(config: GraphStoreConfig) -> Self {
		Self {
			config: StoredValue::new(config),
			data: RwSignal::new(GraphData::default()),
			generation: RwSignal::new(0),
		}
	}

	/// The graph data cell the canvas renders from.
	pub fn data(&self) -> Signal<GraphData> {
		self.data.into()
	}

	/// Query the store with the given citation threshold and replace the
	/// rendered graph with the result.
	///
	/// Invocations are sequenced with a generation counter: a response that
	/// resolves after a newer call has been issued is discarded, so the
	/// displayed graph always reflects the latest request. Failures are
	/// logged and leave the previous graph in place.
	pub fn initialize(&self, min_citations: i64) {
		let generation = self.generation.get_untracked() + 1;
		self.generation.set(generation);

		let query = citation_graph_query(min_citations);
		let config = self.config.get_value();
		let (data, current) = (self.data, self.generation);

		spawn_local(async move {
			match client::fetch_graph(&config, &query).await {
				Ok(graph) => {
					if current.get_untracked() == generation {
						data.set(graph);
					} else {
						log::debug!("discarding superseded graph response");
					}
				}
				Err(e) => log::error!("graph initialization failed: {e}"),
			}
		});
	}

	/// Re-render with the default threshold.
	pub fn refresh(&self) {
		self.initialize(0);
	}
}
