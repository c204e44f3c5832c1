//! Highlight state machine over a [`ResultSet`].
//!
//! The controller is the only owner of "which row is highlighted". Rows are
//! passive data; renderers learn about changes by draining
//! [`SelectionEvent`]s. A transition always lowlights the previous row before
//! highlighting the next one, and a transition that does not change the state
//! emits nothing.
//!
//! The queue holds the net change since the last drain rather than a full
//! history: a highlight followed by a lowlight of the same row cancels out, and
//! events naming destroyed rows are dropped. It therefore never holds more than
//! a lowlight of the row highlighted at the last drain and a highlight of the
//! current one, however long the shell goes without draining.

use tracing::trace;

use crate::ResultSet;

/// Styling side effects of selection transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
	/// The row with this id became highlighted.
	Highlight(String),
	/// The row with this id lost its highlight.
	Lowlight(String),
}

impl SelectionEvent {
	/// Id of the row the event applies to.
	pub fn id(&self) -> &str {
		match self {
			Self::Highlight(id) | Self::Lowlight(id) => id,
		}
	}

	fn cancels(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Highlight(a), Self::Lowlight(b)) | (Self::Lowlight(a), Self::Highlight(b)) => a == b,
			_ => false,
		}
	}
}

/// Tracks the single highlighted row, if any.
#[derive(Debug, Default)]
pub struct SelectionController {
	highlighted: Option<String>,
	events: Vec<SelectionEvent>,
}

impl SelectionController {
	/// Controller with nothing highlighted.
	pub fn new() -> Self {
		Self::default()
	}

	/// Id of the highlighted row.
	pub fn highlighted(&self) -> Option<&str> {
		self.highlighted.as_deref()
	}

	/// Whether `id` is the highlighted row.
	pub fn is_highlighted(&self, id: &str) -> bool {
		self.highlighted.as_deref() == Some(id)
	}

	/// Highlights the row after the current one, or the first row when nothing
	/// is highlighted.
	pub fn move_next(&mut self, set: &ResultSet) -> Option<&str> {
		let target = match self.highlighted.as_deref() {
			Some(id) => set.next_of(id).or_else(|| set.first()),
			None => set.first(),
		};
		self.move_to(target.map(|item| item.id().to_owned()))
	}

	/// Highlights the row before the current one, or the last row when nothing
	/// is highlighted.
	pub fn move_previous(&mut self, set: &ResultSet) -> Option<&str> {
		let target = match self.highlighted.as_deref() {
			Some(id) => set.previous_of(id).or_else(|| set.last()),
			None => set.last(),
		};
		self.move_to(target.map(|item| item.id().to_owned()))
	}

	/// Clears the highlight, lowlighting the previous row.
	pub fn move_none(&mut self) {
		if let Some(prev) = self.highlighted.take() {
			trace!(id = %prev, "selection cleared");
			self.push(SelectionEvent::Lowlight(prev));
		}
	}

	/// Highlights `id` directly, as on mouse hover.
	///
	/// Returns false and leaves the state alone when `id` is not in `set`.
	pub fn highlight(&mut self, set: &ResultSet, id: &str) -> bool {
		if !set.contains(id) {
			return false;
		}
		self.set_highlight(id.to_owned());
		true
	}

	/// Value chosen by the highlighted row, if any.
	pub fn commit(&self) -> Option<String> {
		self.highlighted.clone()
	}

	/// Drops the highlight if its row was destroyed.
	///
	/// No lowlight is emitted since the row is already gone, and pending events
	/// for any destroyed row are discarded.
	pub fn forget(&mut self, destroyed: &[String]) -> bool {
		self.events.retain(|event| !destroyed.iter().any(|id| id == event.id()));
		let gone = self.highlighted.as_ref().is_some_and(|id| destroyed.contains(id));
		if gone {
			trace!(id = ?self.highlighted, "highlighted row destroyed");
			self.highlighted = None;
		}
		gone
	}

	/// Number of events waiting to be drained.
	pub fn pending_events(&self) -> usize {
		self.events.len()
	}

	/// Drains pending events.
	pub fn drain_events(&mut self) -> impl Iterator<Item = SelectionEvent> + '_ {
		self.events.drain(..)
	}

	fn move_to(&mut self, target: Option<String>) -> Option<&str> {
		match target {
			Some(id) => self.set_highlight(id),
			None => self.move_none(),
		}
		self.highlighted()
	}

	fn set_highlight(&mut self, id: String) {
		if self.highlighted.as_ref() == Some(&id) {
			return;
		}
		if let Some(prev) = self.highlighted.take() {
			self.push(SelectionEvent::Lowlight(prev));
		}
		trace!(id = %id, "row highlighted");
		self.push(SelectionEvent::Highlight(id.clone()));
		self.highlighted = Some(id);
	}

	fn push(&mut self, event: SelectionEvent) {
		if self.events.last().is_some_and(|last| last.cancels(&event)) {
			self.events.pop();
		} else {
			self.events.push(event);
		}
	}
}
