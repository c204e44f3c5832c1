//! Identity-preserving set of result rows.
//!
//! Rows are keyed by candidate text. A rebuild reconciles the previous rows
//! with the new hits: rows whose text reappears keep their [`InstanceId`], new
//! texts get fresh rows, and rows no longer present are destroyed. The
//! reconciliation itself is the pure [`reconcile`] function; [`ResultSet::apply`]
//! carries out the resulting [`Diff`].
//!
//! Navigation is circular over insertion order. Adjacency is index arithmetic
//! over the ordered map, so there are no links to keep in sync.

mod diff;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use sift_matching::{Hit, Span};
use tracing::trace;

pub use self::diff::{Diff, DiffEntry, EntryOp, reconcile};

type ItemMap = IndexMap<String, ResultItem, FxBuildHasher>;

/// Identity of one row instance, stable for as long as the row survives rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

/// One row of the current result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
	id: String,
	span: Span,
	instance: InstanceId,
}

impl ResultItem {
	/// Reconciliation key; equal to the candidate text.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Candidate text shown in the row.
	pub fn text(&self) -> &str {
		&self.id
	}

	pub fn span(&self) -> Span {
		self.span
	}

	/// Changes only when the row is destroyed and created again.
	pub fn instance(&self) -> InstanceId {
		self.instance
	}
}

/// Outcome of applying a [`Diff`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebuildReport {
	/// Rows minted by the rebuild.
	pub created: usize,
	/// Rows kept from before, with refreshed spans.
	pub reused: usize,
	/// Ids of rows dropped by the rebuild, in their previous order.
	pub destroyed: Vec<String>,
}

/// Ordered, reconciled collection of [`ResultItem`]s.
#[derive(Debug, Default)]
pub struct ResultSet {
	items: ItemMap,
	next_instance: u64,
}

impl ResultSet {
	/// Empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Reconciles the set with `hits`, reusing rows whose text persists.
	pub fn rebuild(&mut self, hits: &[Hit]) -> RebuildReport {
		let diff = reconcile(self, hits);
		self.apply(diff)
	}

	/// Applies `diff`, leaving the set ordered as its entries.
	///
	/// `Update` entries keep the existing row and `Create` entries always mint a
	/// new one. Rows listed in `destroyed` are dropped first in the report; any
	/// row the diff did not mention is dropped after them, so a diff computed
	/// against an older state still yields a consistent set.
	pub fn apply(&mut self, diff: Diff) -> RebuildReport {
		let mut previous = std::mem::take(&mut self.items);
		let mut items = ItemMap::with_capacity_and_hasher(diff.entries.len(), FxBuildHasher);
		let mut report = RebuildReport::default();

		for DiffEntry { id, span, op } in diff.entries {
			if items.contains_key(&id) {
				continue;
			}
			let kept = match op {
				EntryOp::Update => previous.swap_remove(&id),
				EntryOp::Create => None,
			};
			let item = match kept {
				Some(mut item) => {
					item.span = span;
					report.reused += 1;
					item
				}
				None => {
					if op == EntryOp::Update {
						trace!(id = %id, "update entry has no row, creating one");
					}
					report.created += 1;
					self.mint(id.clone(), span)
				}
			};
			items.insert(id, item);
		}

		report.destroyed = diff
			.destroyed
			.into_iter()
			.filter(|id| previous.shift_remove(id).is_some())
			.collect();
		report.destroyed.extend(previous.into_keys());
		self.items = items;
		trace!(
			len = self.items.len(),
			created = report.created,
			reused = report.reused,
			destroyed = report.destroyed.len(),
			"result set rebuilt"
		);
		report
	}

	/// Destroys every row, returning their ids.
	pub fn clear(&mut self) -> Vec<String> {
		self.items.drain(..).map(|(id, _)| id).collect()
	}

	/// Number of rows.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn contains(&self, id: &str) -> bool {
		self.items.contains_key(id)
	}

	/// Row with this id.
	pub fn get(&self, id: &str) -> Option<&ResultItem> {
		self.items.get(id)
	}

	/// Index of `id` in display order.
	pub fn position(&self, id: &str) -> Option<usize> {
		self.items.get_index_of(id)
	}

	/// Top row; where `move_next` starts.
	pub fn first(&self) -> Option<&ResultItem> {
		self.items.first().map(|(_, item)| item)
	}

	/// Bottom row; where `move_previous` starts.
	pub fn last(&self) -> Option<&ResultItem> {
		self.items.last().map(|(_, item)| item)
	}

	/// Row after `id`, wrapping from the last row to the first.
	pub fn next_of(&self, id: &str) -> Option<&ResultItem> {
		let idx = self.position(id)?;
		self.at((idx + 1) % self.len())
	}

	/// Row before `id`, wrapping from the first row to the last.
	pub fn previous_of(&self, id: &str) -> Option<&ResultItem> {
		let idx = self.position(id)?;
		let len = self.len();
		self.at((idx + len - 1) % len)
	}

	/// Rows in display order.
	pub fn iter(&self) -> impl ExactSizeIterator<Item = &ResultItem> + '_ {
		self.items.values()
	}

	/// Row ids in display order.
	pub fn ids(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
		self.items.keys().map(String::as_str)
	}

	fn at(&self, idx: usize) -> Option<&ResultItem> {
		self.items.get_index(idx).map(|(_, item)| item)
	}

	fn mint(&mut self, id: String, span: Span) -> ResultItem {
		let instance = InstanceId(self.next_instance);
		self.next_instance += 1;
		ResultItem { id, span, instance }
	}
}
