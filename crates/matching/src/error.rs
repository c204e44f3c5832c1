use thiserror::Error;

/// Failure reported by a match function for a single candidate.
///
/// The filter treats a failing candidate as a non-match and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
	/// The match function gave up on this candidate.
	#[error("match function failed: {0}")]
	Failed(String),

	/// The returned span is out of bounds or splits a character.
	#[error("invalid span {start}..{end} for candidate of length {len}")]
	InvalidSpan {
		/// Reported start offset.
		start: usize,
		/// Reported end offset.
		end: usize,
		/// Byte length of the candidate.
		len: usize,
	},
}
