//! # PaperWalk
//!
//! Citation-graph plumbing behind the PaperWalk explorer: the paper data
//! model, the Semantic Scholar client, and the Neo4j store manager.

pub mod config;
pub mod scholar;
pub mod store;
pub mod types;

pub use config::Settings;
pub use scholar::SemanticScholarClient;
pub use store::{PaperStore, StoreConfig, StoreCounts};
pub use types::{Paper, Relation};
