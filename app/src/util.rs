//! Fire-and-forget helpers shared by the controls.

use leptos::task::spawn_local;

use crate::api::BackendClient;
use crate::graph::GraphController;

/// Ask the backend to expand the graph around a paper, then re-render.
/// Expansion failures are logged and leave the current graph alone.
pub fn expand_paper(api: BackendClient, controller: GraphController, paper_id: String) {
	spawn_local(async move {
		match api.expand(&paper_id).await {
			Ok(()) => controller.refresh(),
			Err(e) => log::error!("expanding paper {paper_id} failed: {e}"),
		}
	});
}
