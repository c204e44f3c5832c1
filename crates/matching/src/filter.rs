//! Stable filtering of an option list against a query.

use tracing::warn;

use crate::{MatchError, Matcher, Span};

/// A candidate kept by the filter together with its matched span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
	pub text: String,
	/// Where the query matched inside `text`.
	pub span: Span,
}

impl Hit {
	pub fn new(text: impl Into<String>, span: Span) -> Self {
		Self { text: text.into(), span }
	}
}

/// A candidate whose match function failed; it is excluded from the hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchFailure {
	pub candidate: String,
	pub error: MatchError,
}

/// Output of [`filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filtered {
	/// Hits in original option order.
	pub hits: Vec<Hit>,
	/// Candidates skipped because their match function failed.
	pub failures: Vec<MatchFailure>,
}

impl Filtered {
	/// Number of hits.
	pub fn len(&self) -> usize {
		self.hits.len()
	}

	pub fn is_empty(&self) -> bool {
		self.hits.is_empty()
	}
}

/// Runs `matcher` over `options` and keeps every hit in option order.
///
/// An empty query yields nothing. Duplicates are kept and no size limit is
/// applied; both are decided further down the pipeline.
pub fn filter<S: AsRef<str>>(options: &[S], query: &str, matcher: &Matcher) -> Filtered {
	let mut out = Filtered::default();
	if query.is_empty() {
		return out;
	}

	for option in options {
		let candidate = option.as_ref();
		match matcher.find(candidate, query) {
			Ok(Some(span)) => out.hits.push(Hit::new(candidate, span)),
			Ok(None) => {}
			Err(error) => {
				warn!(matcher = matcher.name(), candidate, error = %error, "match function failed; candidate skipped");
				out.failures.push(MatchFailure {
					candidate: candidate.to_owned(),
					error,
				});
			}
		}
	}
	out
}
