//! Construction of the citation-graph query.
//!
//! The threshold travels as a bound parameter, never interpolated into the
//! statement text.

use serde_json::{Map, Value};

/// Cap applied independently to the paper clause and the citation clause.
pub const RESULT_LIMIT: u32 = 100;

/// One query invocation: constant statement text plus its bound parameters.
#[derive(Clone, Debug)]
pub struct GraphQuery {
	pub statement: String,
	pub parameters: Map<String, Value>,
}

/// The unioned two-clause query behind every render: papers meeting the
/// citation threshold, and citation edges whose endpoints both meet it.
///
/// A threshold of 0 still applies the `>= 0` condition; there is no
/// unfiltered mode.
pub fn citation_graph_query(min_citations: i64) -> GraphQuery {
	let statement = format!(
		"MATCH (p1:Paper) \
		 WHERE p1.citationCount >= $minCitations \
		 RETURN p1 AS paper1, NULL AS relationship, NULL AS paper2 \
		 LIMIT {limit} \
		 UNION \
		 MATCH (p1:Paper)-[r:CITES]->(p2:Paper) \
		 WHERE p1.citationCount >= $minCitations AND p2.citationCount >= $minCitations \
		 RETURN p1 AS paper1, r AS relationship, p2 AS paper2 \
		 LIMIT {limit}",
		limit = RESULT_LIMIT,
	);

	let mut parameters = Map::new();
	parameters.insert("minCitations".to_string(), Value::from(min_citations));

	GraphQuery {
		statement,
		parameters,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn threshold_is_bound_not_interpolated() {
		for threshold in [0, 1, 10, 9999] {
			let query = citation_graph_query(threshold);
			assert_eq!(
				query.parameters.get("minCitations").and_then(|v| v.as_i64()),
				Some(threshold),
			);
			assert!(!query.statement.contains("9999"));
		}
	}

	#[test]
	fn both_clauses_filter_and_cap() {
		let query = citation_graph_query(5);
		let filters = query.statement.matches("citationCount >= $minCitations").count();
		assert_eq!(filters, 3, "paper clause once, edge clause twice");
		assert_eq!(query.statement.matches("LIMIT 100").count(), 2);
		assert_eq!(query.statement.matches("UNION").count(), 1);
	}

	#[test]
	fn zero_threshold_keeps_the_filter() {
		let query = citation_graph_query(0);
		assert!(query.statement.contains("WHERE p1.citationCount >= $minCitations"));
		assert_eq!(
			query.parameters.get("minCitations").and_then(|v| v.as_i64()),
			Some(0),
		);
	}
}
