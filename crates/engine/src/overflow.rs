//! What to show when the match count exceeds the hit limit.

use std::num::NonZeroUsize;

use strum::{Display, EnumIter, EnumString};

/// Configured reaction to more matches than the hit limit.
#[derive(Debug, Default, Display, EnumString, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum OverflowPolicy {
	/// Hide the popup entirely.
	#[default]
	Suppress,
	/// Show a single non-selectable row carrying the match count.
	Summarize,
	/// Show every match inside a scrollable viewport.
	Scroll,
}

/// How a list should be laid out by the renderer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Viewport {
	/// All rows fit; no scrolling needed.
	#[default]
	Fixed,
	/// Rows exceed the hit limit and must scroll.
	Scroll,
}

/// Result of applying an [`OverflowPolicy`] to a match count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OverflowDecision {
	/// Show nothing.
	#[default]
	Hide,
	/// List every match in the given viewport.
	ShowList(Viewport),
	/// Show the match count instead of the rows.
	Summarize(usize),
}

impl OverflowPolicy {
	/// Decides what to show for `count` matches.
	///
	/// Up to `hitlimit` matches are always listed; the policy only applies above it.
	pub fn decide(self, count: usize, hitlimit: NonZeroUsize) -> OverflowDecision {
		if count == 0 {
			return OverflowDecision::Hide;
		}
		if count <= hitlimit.get() {
			return OverflowDecision::ShowList(Viewport::Fixed);
		}
		match self {
			Self::Suppress => OverflowDecision::Hide,
			Self::Summarize => OverflowDecision::Summarize(count),
			Self::Scroll => OverflowDecision::ShowList(Viewport::Scroll),
		}
	}
}
