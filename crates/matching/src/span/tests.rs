use super::Span;
use crate::MatchError;

#[test]
fn split_yields_three_segments() {
	assert_eq!(Span::new(1, 3).split("banana"), Some(("b", "an", "ana")));
	assert_eq!(Span::prefix(0).split("kiwi"), Some(("", "", "kiwi")));
	assert_eq!(Span::new(4, 4).split("kiwi"), Some(("kiwi", "", "")));
}

#[test]
fn split_rejects_spans_that_do_not_fit() {
	assert_eq!(Span::new(2, 9).split("kiwi"), None);
	assert_eq!(Span::new(3, 1).split("kiwi"), None);
	assert_eq!(Span::new(0, 1).split("épée"), None);
}

#[test]
fn validate_checks_bounds_and_char_boundaries() {
	assert_eq!(Span::new(0, 2).validate("épée"), Ok(Span::new(0, 2)));
	assert_eq!(
		Span::new(0, 1).validate("épée"),
		Err(MatchError::InvalidSpan { start: 0, end: 1, len: 6 })
	);
	assert!(Span::new(2, 1).validate("abc").is_err());
	assert!(Span::new(0, 4).validate("abc").is_err());
}

#[test]
fn len_saturates_on_inverted_span() {
	assert_eq!(Span::new(2, 5).len(), 3);
	assert_eq!(Span::new(5, 2).len(), 0);
	assert!(Span::new(5, 2).is_empty());
}
