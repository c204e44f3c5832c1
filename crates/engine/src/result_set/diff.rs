//! Pure reconciliation of a [`ResultSet`] against a new hit list.

use rustc_hash::FxHashSet;
use sift_matching::{Hit, Span};

use super::ResultSet;

/// What applying an entry does to the row with its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOp {
	/// No row with this id exists yet.
	Create,
	/// The existing row is kept and its span refreshed.
	Update,
}

/// One row of the rebuilt set, in final order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
	pub id: String,
	pub span: Span,
	pub op: EntryOp,
}

/// Create/update/destroy plan turning one result set into the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
	/// Surviving and new rows, in hit order.
	pub entries: Vec<DiffEntry>,
	/// Ids of current rows absent from the hits.
	pub destroyed: Vec<String>,
}

impl Diff {
	/// Entries that mint a new row.
	pub fn created(&self) -> impl Iterator<Item = &DiffEntry> + '_ {
		self.entries.iter().filter(|entry| entry.op == EntryOp::Create)
	}

	/// Entries that keep an existing row.
	pub fn updated(&self) -> impl Iterator<Item = &DiffEntry> + '_ {
		self.entries.iter().filter(|entry| entry.op == EntryOp::Update)
	}

	/// True when applying the diff creates and destroys nothing.
	pub fn preserves_identity(&self) -> bool {
		self.destroyed.is_empty() && self.entries.iter().all(|entry| entry.op == EntryOp::Update)
	}
}

/// Computes the diff from `current` to `hits` without touching `current`.
///
/// Duplicate texts collapse onto their first occurrence, keeping its span.
pub fn reconcile(current: &ResultSet, hits: &[Hit]) -> Diff {
	let mut seen: FxHashSet<&str> = FxHashSet::default();
	let mut entries = Vec::with_capacity(hits.len());

	for hit in hits {
		if !seen.insert(hit.text.as_str()) {
			continue;
		}
		let op = if current.contains(&hit.text) { EntryOp::Update } else { EntryOp::Create };
		entries.push(DiffEntry {
			id: hit.text.clone(),
			span: hit.span,
			op,
		});
	}

	let destroyed = current.ids().filter(|id| !seen.contains(id)).map(str::to_owned).collect();
	Diff { entries, destroyed }
}
