//! Row segmentation and colours.
//!
//! A row is drawn as up to three segments: the text before the match, the
//! matched part, and the rest. Highlighted rows paint every segment with the
//! hover colour; otherwise only the matched segment stands out.

use serde::Deserialize;

use crate::ResultItem;

/// Role of a segment within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentRole {
	Prefix,
	Matched,
	Rest,
}

/// A non-empty slice of a row's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
	pub text: &'a str,
	pub role: SegmentRole,
}

/// Colour names handed to the renderer, one per styling state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RowPalette {
	/// Background of the matched segment on an idle row.
	pub selected: String,
	/// Background of every segment on the highlighted row.
	pub hover: String,
	/// Background of idle prefix and rest segments.
	pub normal: String,
}

impl Default for RowPalette {
	fn default() -> Self {
		Self {
			selected: "light blue".into(),
			hover: "teal".into(),
			normal: "white".into(),
		}
	}
}

impl RowPalette {
	/// Colour for a segment of `role` on a row that is or is not highlighted.
	pub fn color(&self, role: SegmentRole, highlighted: bool) -> &str {
		match (highlighted, role) {
			(true, _) => &self.hover,
			(false, SegmentRole::Matched) => &self.selected,
			(false, SegmentRole::Prefix | SegmentRole::Rest) => &self.normal,
		}
	}
}

impl ResultItem {
	/// Splits the row text around its span, skipping empty segments.
	///
	/// A span that does not fit the text yields the whole text as one
	/// [`SegmentRole::Rest`] segment.
	pub fn segments(&self) -> Vec<Segment<'_>> {
		let Some((prefix, matched, rest)) = self.span().split(self.text()) else {
			return vec![Segment {
				text: self.text(),
				role: SegmentRole::Rest,
			}];
		};
		[(prefix, SegmentRole::Prefix), (matched, SegmentRole::Matched), (rest, SegmentRole::Rest)]
			.into_iter()
			.filter(|(text, _)| !text.is_empty())
			.map(|(text, role)| Segment { text, role })
			.collect()
	}
}
