//! PaperWalk backend: axum REST API over the paper store and the Semantic
//! Scholar client.

pub mod routes;
pub mod state;

use anyhow::Result;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/search", get(routes::search))
        .route("/papers/{id}", get(routes::get_paper))
        .route("/papers/{id}/citations", get(routes::get_citations))
        .route("/papers/{id}/references", get(routes::get_references))
        .route("/papers/expand/{id}", get(routes::expand_paper))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the API server.
pub async fn run_server(state: AppState, port: u16) -> Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("API listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}
