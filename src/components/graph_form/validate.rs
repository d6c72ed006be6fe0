use std::collections::BTreeSet;

use thiserror::Error;

use super::types::EdgeRow;

pub const MIN_NODES: u32 = 2;
pub const MAX_NODES: u32 = 40;

/// One submission attempt. `Submitted` is terminal; the native form post
/// hands control to the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
	#[default]
	Pending,
	Submitted,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
	#[error("Start Node {0} is not found in the nodes provided.")]
	StartNotInGraph(String),
	#[error("Goal Node {0} is not found in the nodes provided.")]
	GoalNotInGraph(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("Number of nodes must be between 2 and 40.")]
pub struct NodeCountError;

/// Distinct node ids referenced by the current rows. Fields that do not
/// parse as integers contribute nothing.
pub fn compute_node_set(rows: &[EdgeRow]) -> BTreeSet<i64> {
	rows.iter()
		.flat_map(|row| [row.node1.as_str(), row.node2.as_str()])
		.filter_map(parse_node)
		.collect()
}

/// Gate run on every submit attempt. Start is checked before goal; equal
/// start and goal values are fine as long as the node appears in an edge.
pub fn gate_submission(
	node_set: &BTreeSet<i64>,
	start_raw: &str,
	goal_raw: &str,
) -> Result<(), SubmitError> {
	let start = parse_node(start_raw);
	if !start.is_some_and(|node| node_set.contains(&node)) {
		return Err(SubmitError::StartNotInGraph(display_node(start_raw, start)));
	}

	let goal = parse_node(goal_raw);
	if !goal.is_some_and(|node| node_set.contains(&node)) {
		return Err(SubmitError::GoalNotInGraph(display_node(goal_raw, goal)));
	}

	Ok(())
}

/// Bounds check for the random-graph request. Input that does not parse as
/// an integer counts as out of bounds.
pub fn parse_node_count(raw: &str) -> Result<u32, NodeCountError> {
	raw.trim()
		.parse::<u32>()
		.ok()
		.filter(|count| (MIN_NODES..=MAX_NODES).contains(count))
		.ok_or(NodeCountError)
}

pub fn random_graph_url(num_nodes: u32) -> String {
	format!("/?num_nodes={num_nodes}")
}

fn parse_node(field: &str) -> Option<i64> {
	field.trim().parse().ok()
}

fn display_node(raw: &str, parsed: Option<i64>) -> String {
	match parsed {
		Some(node) => node.to_string(),
		None => raw.trim().to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rows(pairs: &[(&str, &str)]) -> Vec<EdgeRow> {
		pairs
			.iter()
			.enumerate()
			.map(|(i, (node1, node2))| EdgeRow {
				id: i as u32,
				node1: (*node1).into(),
				node2: (*node2).into(),
				weight: "1".into(),
			})
			.collect()
	}

	#[test]
	fn node_set_unions_parsed_endpoints() {
		let set = compute_node_set(&rows(&[("3", "7"), ("7", "12")]));
		assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![3, 7, 12]);
	}

	#[test]
	fn node_set_skips_unparseable_fields() {
		let set = compute_node_set(&rows(&[("3", "abc"), ("", "5"), (" 5 ", "3.5")]));
		assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![3, 5]);
	}

	#[test]
	fn gate_passes_when_both_endpoints_present() {
		let set = compute_node_set(&rows(&[("3", "7")]));
		assert_eq!(gate_submission(&set, "3", "7"), Ok(()));
	}

	#[test]
	fn gate_rejects_goal_missing_from_edges() {
		let set = compute_node_set(&rows(&[("3", "5")]));
		let err = gate_submission(&set, "3", "7").unwrap_err();

		assert_eq!(err, SubmitError::GoalNotInGraph("7".into()));
		assert_eq!(
			err.to_string(),
			"Goal Node 7 is not found in the nodes provided."
		);
	}

	#[test]
	fn gate_reports_start_before_goal() {
		let set = compute_node_set(&rows(&[("1", "2")]));
		let err = gate_submission(&set, "8", "9").unwrap_err();

		assert_eq!(err, SubmitError::StartNotInGraph("8".into()));
	}

	#[test]
	fn gate_allows_equal_start_and_goal() {
		let set = compute_node_set(&rows(&[("4", "9")]));
		assert_eq!(gate_submission(&set, "4", "4"), Ok(()));
	}

	#[test]
	fn gate_names_unparseable_endpoint_as_typed() {
		let set = compute_node_set(&rows(&[("4", "9")]));
		let err = gate_submission(&set, " seven ", "9").unwrap_err();

		assert_eq!(err, SubmitError::StartNotInGraph("seven".into()));
	}

	#[test]
	fn node_count_bounds_are_inclusive() {
		assert!(parse_node_count("1").is_err());
		assert!(parse_node_count("41").is_err());
		assert_eq!(parse_node_count("2"), Ok(2));
		assert_eq!(parse_node_count("40"), Ok(40));
		assert_eq!(parse_node_count(" 17 "), Ok(17));
	}

	#[test]
	fn node_count_rejects_non_integers() {
		assert!(parse_node_count("").is_err());
		assert!(parse_node_count("seven").is_err());
		assert!(parse_node_count("12.5").is_err());
	}

	#[test]
	fn node_count_error_names_both_bounds() {
		assert_eq!(
			NodeCountError.to_string(),
			"Number of nodes must be between 2 and 40."
		);
	}

	#[test]
	fn random_graph_url_carries_count() {
		assert_eq!(random_graph_url(2), "/?num_nodes=2");
	}
}
