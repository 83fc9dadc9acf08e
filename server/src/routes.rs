//! Route handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use paperwalk::{Paper, Relation};

use crate::state::AppState;

/// Failures surface as a JSON error body; nothing is retried.
pub struct ApiError(anyhow::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("request failed: {:#}", self.0);
        let body = Json(json!({"error": self.0.to_string()}));
        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: String,
}

/// Search Semantic Scholar and merge the matches into the store, so the
/// re-render the frontend triggers right after can show them.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, ApiError> {
    let payload = state.scholar.search(&params.query, 20).await?;

    let matches = payload["data"].as_array().cloned().unwrap_or_default();
    for entry in &matches {
        if let Some(paper) = Paper::from_api(entry) {
            state.store.insert_paper(&paper).await?;
        }
    }

    Ok(Json(payload))
}

pub async fn get_paper(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.scholar.fetch_paper(&id).await?))
}

pub async fn get_citations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.scholar.fetch_citations(&id).await?))
}

pub async fn get_references(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.scholar.fetch_references(&id).await?))
}

/// Pull both citation directions for the paper into the store.
pub async fn expand_paper(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let citations = state.scholar.fetch_citations(&id).await?;
    state
        .store
        .insert_citations(&id, &citations, Relation::Cites)
        .await?;

    let references = state.scholar.fetch_references(&id).await?;
    state
        .store
        .insert_citations(&id, &references, Relation::References)
        .await?;

    Ok(Json(json!({"status": "success"})))
}
