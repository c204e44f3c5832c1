use crate::MatchError;

/// Matched byte range `start..end` within a candidate.
///
/// Offsets are byte offsets into the original candidate text and always sit on
/// char boundaries once validated, so slicing with them cannot panic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
	/// First matched byte.
	pub start: usize,
	/// One past the last matched byte.
	pub end: usize,
}

impl Span {
	/// Span over `start..end`. Not validated; see [`Span::validate`].
	pub const fn new(start: usize, end: usize) -> Self {
		Self { start, end }
	}

	/// Span covering the first `len` bytes.
	pub const fn prefix(len: usize) -> Self {
		Self { start: 0, end: len }
	}

	/// Matched length in bytes.
	pub const fn len(&self) -> usize {
		self.end.saturating_sub(self.start)
	}

	pub const fn is_empty(&self) -> bool {
		self.end <= self.start
	}

	/// Checks `start <= end <= text.len()` and that both ends fall on char boundaries.
	pub fn validate(self, text: &str) -> Result<Self, MatchError> {
		let in_bounds = self.start <= self.end && self.end <= text.len();
		if in_bounds && text.is_char_boundary(self.start) && text.is_char_boundary(self.end) {
			Ok(self)
		} else {
			Err(MatchError::InvalidSpan {
				start: self.start,
				end: self.end,
				len: text.len(),
			})
		}
	}

	/// Splits `text` into `(prefix, matched, suffix)`.
	///
	/// Returns `None` when the span does not fit `text`.
	pub fn split<'a>(&self, text: &'a str) -> Option<(&'a str, &'a str, &'a str)> {
		if self.start > self.end {
			return None;
		}
		Some((text.get(..self.start)?, text.get(self.start..self.end)?, text.get(self.end..)?))
	}
}

#[cfg(test)]
mod tests;
