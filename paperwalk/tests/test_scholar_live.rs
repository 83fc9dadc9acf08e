//! Checks against the live Semantic Scholar API.
//!
//! Run with: cargo test --package paperwalk --test test_scholar_live -- --ignored --nocapture

use paperwalk::{Paper, SemanticScholarClient};

// "Attention Is All You Need"
const SEED: &str = "204e3073870fae3d05bcbc2f6a8e263d9b72e776";

#[tokio::test]
#[ignore] // Requires network access
async fn fetch_paper_roundtrips_through_the_model() {
    let client = SemanticScholarClient::new(None);

    let payload = client.fetch_paper(SEED).await.expect("paper lookup failed");
    let paper = Paper::from_api(&payload).expect("payload without paperId");

    println!("Title: {}", paper.title);
    println!("Citations: {}", paper.citation_count);

    assert!(!paper.title.is_empty());
    assert!(paper.citation_count > 0);
}

#[tokio::test]
#[ignore] // Requires network access
async fn citations_payload_carries_citing_papers() {
    let client = SemanticScholarClient::new(None);

    let payload = client.fetch_citations(SEED).await.expect("citations lookup failed");
    let entries = payload["data"].as_array().expect("data array");

    assert!(!entries.is_empty(), "Should find at least one citing paper");
    assert!(entries[0]["citingPaper"].is_object());
}
