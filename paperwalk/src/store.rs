//! Neo4j store manager for the paper graph.

use anyhow::{Context, Result};
use neo4rs::{ConfigBuilder, Graph, Query};
use serde_json::Value;
use tracing::info;

use crate::types::{Paper, Relation};

/// Connection settings for the bolt endpoint.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "neo4j".to_string(),
        }
    }
}

/// Name of the in-memory GDS projection used for the centrality writes.
const GDS_GRAPH: &str = "papersGraph";

/// Manager for the paper graph.
#[derive(Clone)]
pub struct PaperStore {
    graph: Graph,
}

impl PaperStore {
    /// Connect and ping.
    ///
    /// neo4rs pools lazily — `Graph::connect` only builds the pool, so a
    /// cheap `RETURN 1` forces the bolt handshake and surfaces a bad
    /// endpoint immediately instead of on the first real query.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db("neo4j")
            .max_connections(4)
            .fetch_size(100)
            .build()
            .context("Failed to build Neo4j config")?;

        let graph = Graph::connect(neo4j_config)
            .await
            .context("Failed to create Neo4j connection pool")?;

        graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .context("Neo4j is not responding to queries")?;

        Ok(Self { graph })
    }

    /// MERGE one paper node, filling its properties on first sight.
    pub async fn insert_paper(&self, paper: &Paper) -> Result<()> {
        self.graph
            .run(paper_merge_query(paper))
            .await
            .with_context(|| format!("Failed to insert paper {}", paper.paper_id))?;
        info!(paper_id = %paper.paper_id, "Inserted paper");
        Ok(())
    }

    /// Merge every counterpart of a citations/references payload, plus its
    /// CITES edge in the direction the relation dictates. Returns how many
    /// links were merged.
    pub async fn insert_citations(
        &self,
        paper_id: &str,
        payload: &Value,
        relation: Relation,
    ) -> Result<usize> {
        let entries = payload["data"].as_array().cloned().unwrap_or_default();
        let mut merged = 0;
        for entry in &entries {
            let Some(counterpart) = Paper::from_api(&entry[relation.payload_key()]) else {
                continue;
            };
            self.graph
                .run(citation_merge_query(paper_id, &counterpart, relation))
                .await
                .with_context(|| format!("Failed to link paper {}", counterpart.paper_id))?;
            merged += 1;
        }
        info!(paper_id, merged, "Merged citation links");
        Ok(merged)
    }

    /// Drop all nodes and relationships, and the GDS projection if present.
    pub async fn clean(&self) -> Result<()> {
        self.graph
            .run(Query::new("MATCH (n) DETACH DELETE n".to_string()))
            .await
            .context("Failed to clean the database")?;
        // failIfMissing=false: the projection usually doesn't exist yet
        let _ = self
            .graph
            .run(Query::new(format!("CALL gds.graph.drop('{GDS_GRAPH}', false)")))
            .await;
        info!("Database cleaned");
        Ok(())
    }

    /// Project the citation graph and write `pagerank` and `articlerank`
    /// properties onto the paper nodes.
    pub async fn run_pagerank(&self) -> Result<()> {
        let _ = self
            .graph
            .run(Query::new(format!("CALL gds.graph.drop('{GDS_GRAPH}', false)")))
            .await;
        self.graph
            .run(Query::new(format!(
                "CALL gds.graph.project('{GDS_GRAPH}', 'Paper', 'CITES')"
            )))
            .await
            .context("Failed to project the citation graph")?;
        self.graph
            .run(Query::new(format!(
                "CALL gds.pageRank.write('{GDS_GRAPH}', \
                 {{maxIterations: 20, dampingFactor: 0.85, writeProperty: 'pagerank'}})"
            )))
            .await
            .context("PageRank write failed")?;
        self.graph
            .run(Query::new(format!(
                "CALL gds.articleRank.write('{GDS_GRAPH}', {{writeProperty: 'articlerank'}})"
            )))
            .await
            .context("ArticleRank write failed")?;
        let _ = self
            .graph
            .run(Query::new(format!("CALL gds.graph.drop('{GDS_GRAPH}', false)")))
            .await;
        info!("Centrality scores written");
        Ok(())
    }

    /// Node and relationship counts for status logging.
    pub async fn counts(&self) -> Result<StoreCounts> {
        let papers = self
            .query_count(Query::new("MATCH (p:Paper) RETURN count(p) AS count".to_string()))
            .await?;
        let citations = self
            .query_count(Query::new(
                "MATCH (:Paper)-[r:CITES]->(:Paper) RETURN count(r) AS count".to_string(),
            ))
            .await?;
        Ok(StoreCounts { papers, citations })
    }

    async fn query_count(&self, query: Query) -> Result<i64> {
        let mut result = self
            .graph
            .execute(query)
            .await
            .context("Count query failed")?;
        match result.next().await {
            Ok(Some(row)) => row
                .get("count")
                .map_err(|e| anyhow::anyhow!("Failed to read count: {:?}", e)),
            _ => Ok(0),
        }
    }
}

/// Paper and citation-link totals.
#[derive(Debug, Clone, Copy)]
pub struct StoreCounts {
    pub papers: i64,
    pub citations: i64,
}

fn paper_property_set(alias: &str) -> String {
    format!(
        "{a}.title = $title, {a}.firstAuthor = $firstAuthor, \
         {a}.firstAuthorId = $firstAuthorId, {a}.lastAuthor = $lastAuthor, \
         {a}.lastAuthorId = $lastAuthorId, {a}.abstract = $abstract, \
         {a}.citationCount = $citationCount, {a}.referenceCount = $referenceCount, \
         {a}.ArXiv = $arxiv, {a}.year = $year",
        a = alias,
    )
}

fn paper_merge_statement() -> String {
    format!(
        "MERGE (p:Paper {{paperId: $paperId}}) ON CREATE SET {}",
        paper_property_set("p"),
    )
}

fn citation_merge_statement(relation: Relation) -> String {
    format!(
        "MERGE (p1:Paper {{paperId: $paperId}}) \
         MERGE (p2:Paper {{paperId: $counterpartId}}) \
         ON CREATE SET {} \
         {}",
        paper_property_set("p2"),
        relation.merge_clause(),
    )
}

fn paper_params(query: Query, paper: &Paper) -> Query {
    query
        .param("title", paper.title.as_str())
        .param("firstAuthor", paper.first_author.clone().unwrap_or_default())
        .param("firstAuthorId", paper.first_author_id.clone().unwrap_or_default())
        .param("lastAuthor", paper.last_author.clone().unwrap_or_default())
        .param("lastAuthorId", paper.last_author_id.clone().unwrap_or_default())
        .param("abstract", paper.abstract_text.clone().unwrap_or_default())
        .param("citationCount", paper.citation_count)
        .param("referenceCount", paper.reference_count)
        .param("arxiv", paper.arxiv.clone().unwrap_or_default())
        .param("year", paper.year.unwrap_or(0))
}

fn paper_merge_query(paper: &Paper) -> Query {
    let query = Query::new(paper_merge_statement()).param("paperId", paper.paper_id.as_str());
    paper_params(query, paper)
}

fn citation_merge_query(paper_id: &str, counterpart: &Paper, relation: Relation) -> Query {
    let query = Query::new(citation_merge_statement(relation))
        .param("paperId", paper_id)
        .param("counterpartId", counterpart.paper_id.as_str());
    paper_params(query, counterpart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_statement_sets_properties_only_on_create() {
        let statement = paper_merge_statement();
        assert!(statement.starts_with("MERGE (p:Paper {paperId: $paperId})"));
        assert!(statement.contains("ON CREATE SET"));
        assert!(statement.contains("p.citationCount = $citationCount"));
        assert!(statement.contains("p.ArXiv = $arxiv"));
    }

    #[test]
    fn citation_statement_direction_follows_relation() {
        let cites = citation_merge_statement(Relation::Cites);
        assert!(cites.ends_with("MERGE (p2)-[:CITES]->(p1)"));

        let references = citation_merge_statement(Relation::References);
        assert!(references.ends_with("MERGE (p1)-[:CITES]->(p2)"));
    }
}
