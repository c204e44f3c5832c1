//! Composition root.
//!
//! Every keystroke goes through [`Engine::on_query_changed`]: the selection is
//! cleared, the options are filtered, the overflow policy picks what to show,
//! and the result set is reconciled to match. Summaries and hidden popups
//! empty the result set, since a summary row is not selectable.

use sift_matching::{Hit, MatchFailure, filter};
use tracing::{debug, warn};

use crate::{EngineConfig, OverflowDecision, ResultItem, ResultSet, SelectionController, SelectionEvent, Viewport};

/// A row to draw, with its highlight state at the time the plan was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
	pub item: ResultItem,
	/// Draw with the hover colour.
	pub highlighted: bool,
}

/// What the shell should display after an engine call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RenderPlan {
	/// Close or keep closed the popup.
	#[default]
	Hidden,
	/// Show a single non-selectable row reporting `count` matches.
	ShowSummary { count: usize },
	/// Show these rows, in order.
	ShowList { rows: Vec<Row>, viewport: Viewport },
}

impl RenderPlan {
	/// True for [`RenderPlan::Hidden`].
	pub fn is_hidden(&self) -> bool {
		matches!(self, Self::Hidden)
	}

	/// Rows of a list plan; empty for the other plans.
	pub fn rows(&self) -> &[Row] {
		match self {
			Self::ShowList { rows, .. } => rows,
			Self::Hidden | Self::ShowSummary { .. } => &[],
		}
	}
}

/// Autocomplete engine for one text input.
#[derive(Debug)]
pub struct Engine {
	config: EngineConfig,
	options: Vec<String>,
	query: String,
	results: ResultSet,
	selection: SelectionController,
	decision: OverflowDecision,
	failures: Vec<MatchFailure>,
}

impl Engine {
	/// Engine over `options`, closed and with an empty query.
	pub fn new<S: Into<String>>(config: EngineConfig, options: impl IntoIterator<Item = S>) -> Self {
		Self {
			config,
			options: options.into_iter().map(Into::into).collect(),
			query: String::new(),
			results: ResultSet::new(),
			selection: SelectionController::new(),
			decision: OverflowDecision::Hide,
			failures: Vec::new(),
		}
	}

	/// Re-filters for `query` and returns what to display.
	pub fn on_query_changed(&mut self, query: impl Into<String>) -> RenderPlan {
		self.selection.move_none();
		self.query = query.into();

		if self.query.is_empty() {
			self.failures.clear();
			self.close();
			return RenderPlan::Hidden;
		}

		let filtered = filter(self.options.as_slice(), &self.query, self.config.matcher());
		let count = filtered.len();
		self.decision = self.config.overflow().decide(count, self.config.hitlimit());

		let hits: &[Hit] = match self.decision {
			OverflowDecision::ShowList(_) => &filtered.hits,
			OverflowDecision::Hide | OverflowDecision::Summarize(_) => &[],
		};
		let report = self.results.rebuild(hits);
		self.selection.forget(&report.destroyed);

		if !filtered.failures.is_empty() {
			warn!(
				failed = filtered.failures.len(),
				matcher = self.config.matcher().name(),
				"candidates skipped by failing match function"
			);
		}
		self.failures = filtered.failures;

		debug!(
			query_len = self.query.len(),
			matches = count,
			decision = ?self.decision,
			created = report.created,
			reused = report.reused,
			destroyed = report.destroyed.len(),
			"query changed"
		);
		self.render_plan()
	}

	/// Plan for the current state, without re-filtering.
	pub fn render_plan(&self) -> RenderPlan {
		match self.decision {
			OverflowDecision::Summarize(count) => RenderPlan::ShowSummary { count },
			OverflowDecision::ShowList(viewport) if !self.results.is_empty() => RenderPlan::ShowList {
				rows: self
					.results
					.iter()
					.map(|item| Row {
						item: item.clone(),
						highlighted: self.selection.is_highlighted(item.id()),
					})
					.collect(),
				viewport,
			},
			OverflowDecision::ShowList(_) | OverflowDecision::Hide => RenderPlan::Hidden,
		}
	}

	/// Highlights the next row, wrapping around. Returns the new highlight.
	pub fn move_next(&mut self) -> Option<&str> {
		self.selection.move_next(&self.results)
	}

	/// Highlights the previous row, wrapping around.
	pub fn move_previous(&mut self) -> Option<&str> {
		self.selection.move_previous(&self.results)
	}

	/// Clears the highlight.
	pub fn move_none(&mut self) {
		self.selection.move_none();
	}

	/// Highlights the row with `id`, as on mouse hover.
	pub fn highlight(&mut self, id: &str) -> bool {
		self.selection.highlight(&self.results, id)
	}

	/// Commits the highlighted row.
	///
	/// On success the chosen text becomes the query and the list closes. With
	/// nothing highlighted this is a no-op and the list stays open.
	pub fn commit_selection(&mut self) -> Option<String> {
		let chosen = self.selection.commit()?;
		debug!(chosen = %chosen, "selection committed");
		self.set_value(chosen.clone());
		Some(chosen)
	}

	/// Sets the input text without filtering and closes the list.
	pub fn set_value(&mut self, value: impl Into<String>) {
		self.query = value.into();
		self.failures.clear();
		self.close();
	}

	/// Replaces the option list; the current results are discarded.
	pub fn set_options<S: Into<String>>(&mut self, options: impl IntoIterator<Item = S>) {
		self.options = options.into_iter().map(Into::into).collect();
		self.failures.clear();
		self.close();
		debug!(options = self.options.len(), "options replaced");
	}

	/// Clears the query, results and selection.
	pub fn reset(&mut self) {
		self.query.clear();
		self.failures.clear();
		self.close();
	}

	/// Current input text.
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Candidates in their configured order.
	pub fn options(&self) -> &[String] {
		&self.options
	}

	/// Rows currently on display, if the list is open.
	pub fn results(&self) -> &ResultSet {
		&self.results
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	/// Id of the highlighted row.
	pub fn highlighted(&self) -> Option<&str> {
		self.selection.highlighted()
	}

	/// True when the current plan shows something.
	pub fn is_open(&self) -> bool {
		match self.decision {
			OverflowDecision::Summarize(_) => true,
			OverflowDecision::ShowList(_) => !self.results.is_empty(),
			OverflowDecision::Hide => false,
		}
	}

	/// Candidates skipped by a failing match function during the last filter.
	pub fn last_failures(&self) -> &[MatchFailure] {
		&self.failures
	}

	/// Drains the net highlight/lowlight changes since the last drain.
	pub fn drain_selection_events(&mut self) -> impl Iterator<Item = SelectionEvent> + '_ {
		self.selection.drain_events()
	}

	fn close(&mut self) {
		self.decision = OverflowDecision::Hide;
		let destroyed = self.results.clear();
		self.selection.forget(&destroyed);
	}
}

#[cfg(test)]
mod tests;
