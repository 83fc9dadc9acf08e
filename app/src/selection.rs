//! Shared selection state: the last-clicked paper and the last-clicked edge.
//!
//! Passed around as explicit context rather than module-scoped globals; the
//! click handlers are the only writers, any component may read.

use leptos::prelude::*;

use crate::components::force_graph::{EdgeSelection, NodeProperties};

#[derive(Clone, Copy)]
pub struct SelectionContext {
	pub paper: RwSignal<Option<NodeProperties>>,
	pub edge: RwSignal<Option<EdgeSelection>>,
}

impl SelectionContext {
	fn new() -> Self {
		Self {
			paper: RwSignal::new(None),
			edge: RwSignal::new(None),
		}
	}
}

/// Create the selection cells and make them available to the component tree.
pub fn provide_selection() -> SelectionContext {
	let selection = SelectionContext::new();
	provide_context(selection);
	selection
}

/// Selection cells of the nearest ancestor that called [`provide_selection`].
pub fn use_selection() -> SelectionContext {
	expect_context::<SelectionContext>()
}
