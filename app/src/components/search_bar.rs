use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::api::BackendClient;
use crate::graph::GraphController;

/// Backend search box.
///
/// A successful search stores the payload and triggers one re-render with
/// the default threshold; a failed one keeps the previous payload and fills
/// the error cell instead. The loading flag is cleared last either way.
/// Concurrent searches are not coordinated.
#[component]
pub fn SearchBar() -> impl IntoView {
	let api = expect_context::<BackendClient>();
	let controller = expect_context::<GraphController>();

	let query = RwSignal::new(String::new());
	let result = RwSignal::new(None::<Value>);
	let loading = RwSignal::new(false);
	let error = RwSignal::new(None::<String>);

	let run_search = move |_| {
		let q = query.get_untracked();
		let api = api.clone();
		loading.set(true);
		error.set(None);
		spawn_local(async move {
			match api.search(&q).await {
				Ok(payload) => {
					result.set(Some(payload));
					controller.refresh();
				}
				Err(e) => {
					log::error!("search failed: {e}");
					error.set(Some(e.to_string()));
				}
			}
			loading.set(false);
		});
	};

	let status = move || {
		if loading.get() {
			return Some("Searching…".to_string());
		}
		if let Some(e) = error.get() {
			return Some(format!("Search failed: {e}"));
		}
		result.get().map(|payload| {
			let total = payload
				.get("total")
				.and_then(Value::as_u64)
				.or_else(|| payload.get("data").and_then(Value::as_array).map(|a| a.len() as u64));
			match total {
				Some(n) => format!("{} matches", n),
				None => "Search complete".to_string(),
			}
		})
	};

	view! {
		<div class="search-bar">
			<input
				type="search"
				placeholder="Search papers"
				prop:value=move || query.get()
				on:input=move |ev| query.set(event_target_value(&ev))
			/>
			<button on:click=run_search prop:disabled=move || loading.get()>
				"Search"
			</button>
			<p class="search-status">{status}</p>
		</div>
	}
}
