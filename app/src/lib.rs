//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod api;
mod components;
mod config;
mod graph;
mod pages;
mod selection;
mod styles;
mod util;

// Top-Level pages
use crate::api::BackendClient;
use crate::config::AppConfig;
use crate::graph::GraphController;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::selection::provide_selection;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the homepage and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	// Endpoints and credentials are baked in at build time, read once here.
	let config = AppConfig::from_build_env();
	provide_selection();
	provide_context(BackendClient::new(config.api_url.clone()));
	provide_context(GraphController::new(config.graph));

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="PaperWalk" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
