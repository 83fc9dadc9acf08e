use leptos::prelude::*;
use serde_json::Value;

use crate::api::BackendClient;
use crate::components::force_graph::NodeProperties;
use crate::graph::GraphController;
use crate::selection::use_selection;
use crate::util::expand_paper;

const DETAIL_KEYS: &[&str] = &[
	"firstAuthor",
	"year",
	"citationCount",
	"referenceCount",
	"pagerank",
	"articlerank",
];

fn text_prop(properties: &NodeProperties, key: &str) -> Option<String> {
	properties.get(key).map(|value| match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	})
}

/// Detail card for whatever was clicked last: the selected paper with its
/// expand action, and the selected citation edge.
#[component]
pub fn PaperCard() -> impl IntoView {
	let selection = use_selection();
	let api = expect_context::<BackendClient>();
	let controller = expect_context::<GraphController>();

	let paper_view = move || {
		selection.paper.get().map(|props| {
			let title = text_prop(&props, "title").unwrap_or_else(|| "Untitled".to_string());
			let rows: Vec<(&'static str, String)> = DETAIL_KEYS
				.iter()
				.copied()
				.filter_map(|key| text_prop(&props, key).map(|value| (key, value)))
				.collect();
			let paper_id = text_prop(&props, "paperId");
			let api = api.clone();

			view! {
				<div class="paper-card">
					<h2>{title}</h2>
					<dl>
						{rows
							.into_iter()
							.map(|(key, value)| view! { <dt>{key}</dt><dd>{value}</dd> })
							.collect_view()}
					</dl>
					{paper_id.map(|id| {
						let on_expand = move |_| expand_paper(api.clone(), controller, id.clone());
						view! {
							<button on:click=on_expand>"Expand citations"</button>
						}
					})}
				</div>
			}
		})
	};

	let edge_view = move || {
		selection.edge.get().map(|edge| {
			view! {
				<div class="edge-card">
					<h3>{edge.rel_type.clone()}</h3>
					<p>{format!("{} \u{2192} {}", edge.from, edge.to)}</p>
				</div>
			}
		})
	};

	view! {
		<div class="selection-details">
			{paper_view}
			{edge_view}
		</div>
	}
}
