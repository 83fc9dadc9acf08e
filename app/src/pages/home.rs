use leptos::prelude::*;

use crate::components::filter_panel::FilterPanel;
use crate::components::force_graph::ForceGraphCanvas;
use crate::components::paper_card::PaperCard;
use crate::components::search_bar::SearchBar;
use crate::graph::GraphController;
use crate::selection::use_selection;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let controller = expect_context::<GraphController>();
	let selection = use_selection();

	// First render with the default threshold.
	controller.initialize(0);

	// The click handlers are the only writers of the shared selection state;
	// a node click never touches the edge cell and vice versa.
	let on_node_click = Callback::new(move |props| {
		log::debug!("selected paper: {:?}", props);
		selection.paper.set(Some(props));
	});
	let on_edge_click = Callback::new(move |edge| selection.edge.set(Some(edge)));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<ForceGraphCanvas
					data=controller.data()
					on_node_click=on_node_click
					on_edge_click=on_edge_click
					fullscreen=true
				/>
				<div class="graph-overlay">
					<h1>"PaperWalk"</h1>
					<p class="subtitle">
						"Click a paper for details. Drag to reposition, scroll to zoom."
					</p>
					<FilterPanel />
					<SearchBar />
					<PaperCard />
				</div>
			</div>
		</ErrorBoundary>
	}
}
