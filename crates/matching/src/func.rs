//! Match functions.
//!
//! Every function honours the same contract: given a candidate and a non-empty
//! query, either report no match or the [`Span`] of the candidate the query
//! matched. Case-insensitive variants fold one char at a time with
//! [`char::to_lowercase`] and report offsets on the original candidate text.
//! Foldings that change string length are not handled.

use std::fmt;
use std::sync::Arc;

use strum::{Display, EnumIter, EnumString};

use crate::{MatchError, Span};

/// Capability contract for candidate match functions.
pub trait MatchFn: Send + Sync {
	/// Returns the matched span of `candidate` for `query`, if any.
	fn find(&self, candidate: &str, query: &str) -> Result<Option<Span>, MatchError>;
}

/// Built-in match functions, addressable by name from configuration.
#[derive(Debug, Default, Display, EnumString, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
	/// Candidate starts with the query, compared exactly.
	#[strum(to_string = "startswith", serialize = "starts_with")]
	StartsWith,
	/// Candidate starts with the query, compared case-folded.
	#[default]
	#[strum(to_string = "startswith_ignorecase", serialize = "starts_with_ignore_case")]
	StartsWithIgnoreCase,
	/// Query occurs anywhere in the candidate, compared case-folded.
	#[strum(to_string = "contains")]
	Contains,
}

impl MatchKind {
	/// Infallible form of [`MatchFn::find`] for the built-ins.
	pub fn matches(self, candidate: &str, query: &str) -> Option<Span> {
		match self {
			Self::StartsWith => candidate.starts_with(query).then(|| Span::prefix(query.len())),
			Self::StartsWithIgnoreCase => folded_prefix_len(candidate, query).map(Span::prefix),
			Self::Contains => find_folded(candidate, query),
		}
	}
}

impl MatchFn for MatchKind {
	fn find(&self, candidate: &str, query: &str) -> Result<Option<Span>, MatchError> {
		Ok(self.matches(candidate, query))
	}
}

/// Closure-backed match function that cannot fail.
pub struct FnMatch<F> {
	f: F,
}

impl<F> FnMatch<F> {
	pub fn new(f: F) -> Self {
		Self { f }
	}
}

impl<F> MatchFn for FnMatch<F>
where
	F: Fn(&str, &str) -> Option<Span> + Send + Sync,
{
	fn find(&self, candidate: &str, query: &str) -> Result<Option<Span>, MatchError> {
		Ok((self.f)(candidate, query))
	}
}

/// Closure-backed match function that may report a [`MatchError`].
pub struct TryFnMatch<F> {
	f: F,
}

impl<F> TryFnMatch<F> {
	pub fn new(f: F) -> Self {
		Self { f }
	}
}

impl<F> MatchFn for TryFnMatch<F>
where
	F: Fn(&str, &str) -> Result<Option<Span>, MatchError> + Send + Sync,
{
	fn find(&self, candidate: &str, query: &str) -> Result<Option<Span>, MatchError> {
		(self.f)(candidate, query)
	}
}

/// Shared, cloneable handle to a match function.
///
/// Spans returned through [`Matcher::find`] are validated against the
/// candidate, so a custom function reporting a bad span surfaces as
/// [`MatchError::InvalidSpan`] instead of a slicing panic downstream.
#[derive(Clone)]
pub struct Matcher {
	name: Arc<str>,
	inner: Arc<dyn MatchFn>,
}

impl Matcher {
	/// Handle to a built-in, named after its config name.
	pub fn builtin(kind: MatchKind) -> Self {
		Self {
			name: kind.to_string().into(),
			inner: Arc::new(kind),
		}
	}

	/// Wraps a custom match function under a display name.
	pub fn custom(name: impl Into<Arc<str>>, f: impl MatchFn + 'static) -> Self {
		Self {
			name: name.into(),
			inner: Arc::new(f),
		}
	}

	/// Wraps an infallible closure.
	pub fn from_fn<F>(name: impl Into<Arc<str>>, f: F) -> Self
	where
		F: Fn(&str, &str) -> Option<Span> + Send + Sync + 'static,
	{
		Self::custom(name, FnMatch::new(f))
	}

	/// Display name, used in logs.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Runs the function and validates the returned span against `candidate`.
	pub fn find(&self, candidate: &str, query: &str) -> Result<Option<Span>, MatchError> {
		self.inner.find(candidate, query)?.map(|span| span.validate(candidate)).transpose()
	}
}

impl Default for Matcher {
	fn default() -> Self {
		Self::builtin(MatchKind::default())
	}
}

impl From<MatchKind> for Matcher {
	fn from(kind: MatchKind) -> Self {
		Self::builtin(kind)
	}
}

impl fmt::Debug for Matcher {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Matcher").field(&self.name).finish()
	}
}

fn chars_eq_folded(a: char, b: char) -> bool {
	a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte length of the prefix of `haystack` matching `needle` case-folded.
fn folded_prefix_len(haystack: &str, needle: &str) -> Option<usize> {
	let mut hay = haystack.char_indices();
	for n in needle.chars() {
		let (_, h) = hay.next()?;
		if !chars_eq_folded(h, n) {
			return None;
		}
	}
	Some(hay.next().map_or(haystack.len(), |(idx, _)| idx))
}

/// First case-folded occurrence of `needle`, scanning left to right.
fn find_folded(haystack: &str, needle: &str) -> Option<Span> {
	haystack
		.char_indices()
		.map(|(idx, _)| idx)
		.chain(std::iter::once(haystack.len()))
		.find_map(|start| folded_prefix_len(&haystack[start..], needle).map(|len| Span::new(start, start + len)))
}
