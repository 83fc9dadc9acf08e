//! End-to-end checks against a running Neo4j and the live Semantic Scholar
//! API.
//!
//! Run with: cargo test --package paperwalk-server --test test_api_live -- --ignored --nocapture

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use paperwalk::{PaperStore, SemanticScholarClient, Settings};
use paperwalk_server::create_router;
use paperwalk_server::state::AppState;

async fn live_router() -> axum::Router {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env().expect("store settings");
    let store = PaperStore::connect(&settings.store).await.expect("neo4j");
    let scholar = SemanticScholarClient::new(settings.scholar_api_key.clone());
    create_router(AppState { store, scholar })
}

#[tokio::test]
#[ignore] // Requires a running Neo4j and network access
async fn search_merges_matches_and_replies() {
    let app = live_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/search?query=citation%20networks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore] // Requires a running Neo4j and network access
async fn expand_reports_success() {
    let app = live_router().await;

    // "Attention Is All You Need"
    let response = app
        .oneshot(
            Request::builder()
                .uri("/papers/expand/204e3073870fae3d05bcbc2f6a8e263d9b72e776")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
