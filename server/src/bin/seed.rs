//! Bootstrap the paper graph from one seed paper.
//!
//! Usage: seed [paper-id]
//!
//! Cleans the store, inserts the seed paper and its citing papers, walks one
//! level of their reference links, then writes the centrality scores.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use paperwalk::{Paper, PaperStore, Relation, SemanticScholarClient, Settings};

const DEFAULT_SEED: &str = "649def34f8be52c8b66281af98ae884c09aef38b";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let paper_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SEED.to_string());

    let settings = Settings::from_env()?;
    let store = PaperStore::connect(&settings.store).await?;
    let scholar = SemanticScholarClient::new(settings.scholar_api_key.clone());

    store.clean().await?;

    let payload = scholar.fetch_paper(&paper_id).await?;
    if let Some(paper) = Paper::from_api(&payload) {
        store.insert_paper(&paper).await?;
    }

    let citations = scholar.fetch_citations(&paper_id).await?;
    store
        .insert_citations(&paper_id, &citations, Relation::Cites)
        .await?;

    // One level deeper: every citing paper contributes its reference links.
    for entry in citations["data"].as_array().cloned().unwrap_or_default() {
        let Some(citing) = Paper::from_api(&entry["citingPaper"]) else {
            continue;
        };
        let references = scholar.fetch_references(&citing.paper_id).await?;
        store
            .insert_citations(&citing.paper_id, &references, Relation::References)
            .await?;
    }

    store.run_pagerank().await?;

    let counts = store.counts().await?;
    tracing::info!(
        papers = counts.papers,
        citations = counts.citations,
        "Seed complete"
    );
    Ok(())
}
