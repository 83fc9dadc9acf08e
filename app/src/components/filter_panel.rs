use leptos::prelude::*;

use crate::graph::GraphController;

/// Citation-count filter. Applying re-runs the graph query with the new
/// threshold; the value is handed over uninterpreted.
#[component]
pub fn FilterPanel() -> impl IntoView {
	let controller = expect_context::<GraphController>();
	let min_count = RwSignal::new(0_i64);

	let apply = move |_| controller.initialize(min_count.get_untracked());

	view! {
		<div class="filter-panel">
			<label>"Min citations"</label>
			<input
				type="number"
				min="0"
				prop:value=move || min_count.get().to_string()
				on:input=move |ev| {
					min_count.set(event_target_value(&ev).parse().unwrap_or_default());
				}
			/>
			<button on:click=apply>"Apply"</button>
		</div>
	}
}
