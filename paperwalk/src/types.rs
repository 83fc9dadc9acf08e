//! The paper data model shared by the store and the API layer.

use serde_json::Value;

/// Direction of a citation link relative to a seed paper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// The counterpart paper cites the seed.
    Cites,
    /// The seed cites the counterpart paper.
    References,
}

impl Relation {
    /// JSON key of the counterpart paper in a citations/references payload.
    pub fn payload_key(self) -> &'static str {
        match self {
            Relation::Cites => "citingPaper",
            Relation::References => "citedPaper",
        }
    }

    /// MERGE clause for the edge: a citing paper points at the seed, a
    /// referenced paper is pointed at by it.
    pub fn merge_clause(self) -> &'static str {
        match self {
            Relation::Cites => "MERGE (p2)-[:CITES]->(p1)",
            Relation::References => "MERGE (p1)-[:CITES]->(p2)",
        }
    }
}

/// A paper as stored on `Paper` nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paper {
    pub paper_id: String,
    pub title: String,
    pub first_author: Option<String>,
    pub first_author_id: Option<String>,
    pub last_author: Option<String>,
    pub last_author_id: Option<String>,
    pub abstract_text: Option<String>,
    pub citation_count: i64,
    pub reference_count: i64,
    pub arxiv: Option<String>,
    pub year: Option<i64>,
}

impl Paper {
    /// Flatten a Semantic Scholar paper object into the stored shape.
    ///
    /// The authors array collapses to first/last; counts default to 0.
    /// Returns `None` for objects without a paper id (the API emits those
    /// for retracted or unresolved entries).
    pub fn from_api(value: &Value) -> Option<Paper> {
        let paper_id = value["paperId"].as_str()?.to_string();
        let authors = value["authors"].as_array();
        let first = authors.and_then(|a| a.first());
        let last = authors.and_then(|a| a.last());

        Some(Paper {
            paper_id,
            title: value["title"].as_str().unwrap_or("").to_string(),
            first_author: first.and_then(|a| a["name"].as_str()).map(String::from),
            first_author_id: first.and_then(|a| a["authorId"].as_str()).map(String::from),
            last_author: last.and_then(|a| a["name"].as_str()).map(String::from),
            last_author_id: last.and_then(|a| a["authorId"].as_str()).map(String::from),
            abstract_text: value["abstract"].as_str().map(String::from),
            citation_count: value["citationCount"].as_i64().unwrap_or(0),
            reference_count: value["referenceCount"].as_i64().unwrap_or(0),
            arxiv: value["externalIds"]["ArXiv"].as_str().map(String::from),
            year: value["year"].as_i64(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn from_api_flattens_authors_to_first_and_last() {
        let paper = Paper::from_api(&json!({
            "paperId": "abc",
            "title": "Attention Is All You Need",
            "citationCount": 90000,
            "referenceCount": 35,
            "year": 2017,
            "externalIds": {"ArXiv": "1706.03762"},
            "authors": [
                {"authorId": "1", "name": "Ashish Vaswani"},
                {"authorId": "2", "name": "Noam Shazeer"},
                {"authorId": "3", "name": "Illia Polosukhin"},
            ],
        }))
        .expect("paper");

        assert_eq!(paper.paper_id, "abc");
        assert_eq!(paper.first_author.as_deref(), Some("Ashish Vaswani"));
        assert_eq!(paper.last_author.as_deref(), Some("Illia Polosukhin"));
        assert_eq!(paper.citation_count, 90000);
        assert_eq!(paper.arxiv.as_deref(), Some("1706.03762"));
        assert_eq!(paper.year, Some(2017));
    }

    #[test]
    fn from_api_defaults_missing_fields() {
        let paper = Paper::from_api(&json!({"paperId": "bare"})).expect("paper");
        assert_eq!(paper.title, "");
        assert_eq!(paper.first_author, None);
        assert_eq!(paper.citation_count, 0);
        assert_eq!(paper.reference_count, 0);
        assert_eq!(paper.year, None);
    }

    #[test]
    fn a_single_author_is_both_first_and_last() {
        let paper = Paper::from_api(&json!({
            "paperId": "solo",
            "authors": [{"authorId": "9", "name": "Ada Lovelace"}],
        }))
        .expect("paper");
        assert_eq!(paper.first_author, paper.last_author);
        assert_eq!(paper.first_author_id.as_deref(), Some("9"));
    }

    #[test]
    fn entries_without_paper_id_are_rejected() {
        assert_eq!(Paper::from_api(&json!({"title": "ghost"})), None);
    }

    #[test]
    fn relation_controls_merge_direction_and_payload_key() {
        assert_eq!(Relation::Cites.payload_key(), "citingPaper");
        assert_eq!(Relation::References.payload_key(), "citedPaper");
        assert_eq!(Relation::Cites.merge_clause(), "MERGE (p2)-[:CITES]->(p1)");
        assert_eq!(Relation::References.merge_clause(), "MERGE (p1)-[:CITES]->(p2)");
    }
}
