//! Match functions and the stable candidate filter.
//!
//! A match function maps `(candidate, query)` to an optional [`Span`] marking
//! the matched part of the candidate. [`filter`] runs one over an option list
//! and keeps every hit in the original option order.

/// Match error types.
pub mod error;
/// Stable filtering of option lists.
pub mod filter;
/// Built-in and custom match functions.
pub mod func;
/// Byte spans within candidate text.
pub mod span;

pub use error::MatchError;
pub use filter::{Filtered, Hit, MatchFailure, filter};
pub use func::{FnMatch, MatchFn, MatchKind, Matcher, TryFnMatch};
pub use span::Span;
