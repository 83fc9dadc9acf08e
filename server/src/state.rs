//! Shared handler state.

use paperwalk::{PaperStore, SemanticScholarClient};

#[derive(Clone)]
pub struct AppState {
    pub store: PaperStore,
    pub scholar: SemanticScholarClient,
}
