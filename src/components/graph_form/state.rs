use super::types::EdgeRow;

/// Ordered collection of edge-input rows. The row count is derived from the
/// rows themselves, so it can never drift from what is rendered; rows only
/// enter and leave through [`add_edge`](Self::add_edge) and
/// [`remove_edge`](Self::remove_edge).
pub struct EdgeList {
	rows: Vec<EdgeRow>,
	next_id: u32,
}

impl EdgeList {
	pub fn new() -> Self {
		Self::from_rows(Vec::new())
	}

	/// Builds the list from rows already on screen, padded up to the
	/// one-row floor.
	pub fn from_rows(rows: Vec<EdgeRow>) -> Self {
		let next_id = rows.iter().map(|row| row.id + 1).max().unwrap_or(0);
		let mut list = Self { rows, next_id };
		if list.rows.is_empty() {
			list.add_edge();
		}
		list
	}

	pub fn count(&self) -> usize {
		self.rows.len()
	}

	pub fn rows(&self) -> &[EdgeRow] {
		&self.rows
	}

	/// Rows paired with their displayed 1-based labels. Rows are only ever
	/// appended and popped, so a live row's label never changes.
	pub fn labeled_rows(&self) -> Vec<(usize, EdgeRow)> {
		self.rows
			.iter()
			.cloned()
			.enumerate()
			.map(|(i, row)| (i + 1, row))
			.collect()
	}

	pub fn row_mut(&mut self, id: u32) -> Option<&mut EdgeRow> {
		self.rows.iter_mut().find(|row| row.id == id)
	}

	/// Appends one blank row. Ids are monotonic and never reused, so keyed
	/// rendering cannot confuse a fresh row with a removed one.
	pub fn add_edge(&mut self) {
		let row = EdgeRow::blank(self.next_id);
		self.next_id += 1;
		self.rows.push(row);
	}

	/// Removes the most recently added row. No-op at the one-row floor.
	pub fn remove_edge(&mut self) {
		if self.rows.len() > 1 {
			self.rows.pop();
		}
	}
}

impl Default for EdgeList {
	fn default() -> Self {
		Self::new()
	}
}
