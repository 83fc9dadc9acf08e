//! Pure styling helpers mapping a paper's properties to display attributes.
//!
//! All of these default to a fixed output when `citationCount` is absent
//! rather than failing.

use serde_json::Value;

use crate::components::force_graph::NodeProperties;

/// Citation count of a node, if the store returned one.
pub fn citation_count(properties: &NodeProperties) -> Option<i64> {
	properties.get("citationCount").and_then(Value::as_i64)
}

/// Short display label: the first author's surname, plus the year when known.
pub fn node_label(properties: &NodeProperties) -> Option<String> {
	let author = properties.get("firstAuthor").and_then(Value::as_str)?;
	let surname = author.split_whitespace().last()?;
	match properties.get("year").and_then(Value::as_i64) {
		Some(year) => Some(format!("{} ({})", surname, year)),
		None => Some(surname.to_string()),
	}
}

/// Color bucket by citation count: below 10 blue, below 100 orange, red above.
pub fn node_color(properties: &NodeProperties) -> &'static str {
	let count = citation_count(properties).unwrap_or(0);
	if count < 10 {
		"blue"
	} else if count < 100 {
		"orange"
	} else {
		"red"
	}
}

/// Log-scaled opacity so heavily cited papers don't drown out the rest.
pub fn node_opacity(properties: &NodeProperties) -> f64 {
	let count = citation_count(properties).unwrap_or(0);
	((count as f64) + 2.0).ln() / 13.0
}

/// Relative size value, quadratic in citation count.
pub fn node_size(properties: &NodeProperties) -> f64 {
	match citation_count(properties) {
		Some(count) => (count as f64).powi(2) / 2.0,
		None => 1.0,
	}
}

/// Width of a citation edge: product of the endpoint counts, floored at 1.
pub fn relationship_width(from_count: i64, to_count: i64) -> f64 {
	((from_count * to_count) as f64 * 0.02).max(1.0)
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn props(value: serde_json::Value) -> NodeProperties {
		value.as_object().cloned().unwrap_or_default()
	}

	#[test]
	fn color_buckets_at_ten_and_hundred() {
		assert_eq!(node_color(&props(json!({"citationCount": 9}))), "blue");
		assert_eq!(node_color(&props(json!({"citationCount": 10}))), "orange");
		assert_eq!(node_color(&props(json!({"citationCount": 99}))), "orange");
		assert_eq!(node_color(&props(json!({"citationCount": 100}))), "red");
	}

	#[test]
	fn color_defaults_to_lowest_bucket_when_count_missing() {
		assert_eq!(node_color(&props(json!({"title": "untracked"}))), "blue");
	}

	#[test]
	fn opacity_is_monotone_in_citation_count() {
		let counts = [0, 1, 9, 10, 99, 100, 5000];
		let opacities: Vec<f64> = counts
			.iter()
			.map(|c| node_opacity(&props(json!({ "citationCount": c }))))
			.collect();
		for pair in opacities.windows(2) {
			assert!(pair[0] <= pair[1], "opacity regressed: {:?}", opacities);
		}
		let absent = node_opacity(&props(json!({})));
		assert!((absent - 2.0_f64.ln() / 13.0).abs() < 1e-12);
	}

	#[test]
	fn relationship_width_floors_at_one() {
		assert_eq!(relationship_width(5, 10), 1.0);
		assert_eq!(relationship_width(0, 0), 1.0);
		assert_eq!(relationship_width(50, 50), 50.0);
	}

	#[test]
	fn size_defaults_when_count_missing() {
		assert_eq!(node_size(&props(json!({}))), 1.0);
		assert_eq!(node_size(&props(json!({"citationCount": 10}))), 50.0);
	}

	#[test]
	fn label_uses_surname_and_year() {
		let full = props(json!({"firstAuthor": "Ada B. Lovelace", "year": 1843}));
		assert_eq!(node_label(&full).as_deref(), Some("Lovelace (1843)"));

		let no_year = props(json!({"firstAuthor": "Ada B. Lovelace"}));
		assert_eq!(node_label(&no_year).as_deref(), Some("Lovelace"));

		assert_eq!(node_label(&props(json!({"year": 1843}))), None);
	}
}
