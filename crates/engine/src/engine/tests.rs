use pretty_assertions::assert_eq;
use sift_matching::{MatchError, MatchKind, Matcher, Span, TryFnMatch};

use super::{Engine, RenderPlan};
use crate::{EngineConfig, OverflowPolicy, SelectionEvent, Viewport};

fn engine_with(options: &[&str], kind: MatchKind) -> Engine {
	let config = EngineConfig::builder().matcher(kind).build().expect("valid config");
	Engine::new(config, options.iter().copied())
}

fn numbered(n: usize) -> Vec<String> {
	(0..n).map(|i| format!("item{i:02}")).collect()
}

fn overflow_engine(policy: OverflowPolicy, n: usize) -> Engine {
	let config = EngineConfig::builder()
		.hitlimit(10)
		.overflow(policy)
		.matcher(MatchKind::StartsWith)
		.build()
		.expect("valid config");
	Engine::new(config, numbered(n))
}

fn row_spans(plan: &RenderPlan) -> Vec<(&str, Span)> {
	plan.rows().iter().map(|row| (row.item.text(), row.item.span())).collect()
}

#[test]
fn prefix_query_lists_matches_in_option_order() {
	let mut engine = engine_with(&["Apple", "Apricot", "Banana"], MatchKind::StartsWithIgnoreCase);
	let plan = engine.on_query_changed("ap");
	assert_eq!(row_spans(&plan), [("Apple", Span::new(0, 2)), ("Apricot", Span::new(0, 2))]);
	assert!(matches!(plan, RenderPlan::ShowList { viewport: Viewport::Fixed, .. }));
	assert!(engine.is_open());
}

#[test]
fn empty_query_hides_and_clears() {
	let mut engine = engine_with(&["Apple", "Banana"], MatchKind::StartsWithIgnoreCase);
	engine.on_query_changed("a");
	assert_eq!(engine.on_query_changed(""), RenderPlan::Hidden);
	assert!(engine.results().is_empty());
	assert!(!engine.is_open());
}

#[test]
fn narrowing_query_reuses_rows_and_clears_selection() {
	let mut engine = engine_with(&["Apple", "Apricot", "Banana"], MatchKind::StartsWithIgnoreCase);
	engine.on_query_changed("ap");
	assert_eq!(engine.move_next(), Some("Apple"));
	let apple = engine.results().get("Apple").map(|item| item.instance());
	engine.drain_selection_events().for_each(drop);

	let plan = engine.on_query_changed("app");
	assert_eq!(row_spans(&plan), [("Apple", Span::new(0, 3))]);
	assert_eq!(engine.results().get("Apple").map(|item| item.instance()), apple);
	assert_eq!(engine.highlighted(), None);
	assert!(plan.rows().iter().all(|row| !row.highlighted));
	assert_eq!(
		engine.drain_selection_events().collect::<Vec<_>>(),
		[SelectionEvent::Lowlight("Apple".into())]
	);
}

#[test]
fn contains_reports_first_occurrence() {
	let mut engine = engine_with(&["banana"], MatchKind::Contains);
	let plan = engine.on_query_changed("an");
	assert_eq!(row_spans(&plan), [("banana", Span::new(1, 3))]);
}

#[test]
fn summarize_over_limit() {
	let mut engine = overflow_engine(OverflowPolicy::Summarize, 11);
	assert_eq!(engine.on_query_changed("item"), RenderPlan::ShowSummary { count: 11 });
	assert!(engine.results().is_empty());
	assert!(engine.is_open());
	assert_eq!(engine.move_next(), None);

	engine.set_options(numbered(10));
	let plan = engine.on_query_changed("item");
	assert_eq!(plan.rows().len(), 10);
	assert!(matches!(plan, RenderPlan::ShowList { viewport: Viewport::Fixed, .. }));
}

#[test]
fn suppress_over_limit_hides() {
	let mut engine = overflow_engine(OverflowPolicy::Suppress, 11);
	assert_eq!(engine.on_query_changed("item"), RenderPlan::Hidden);
	assert!(engine.results().is_empty());
}

#[test]
fn scroll_over_limit_lists_everything() {
	let mut engine = overflow_engine(OverflowPolicy::Scroll, 11);
	let plan = engine.on_query_changed("item");
	assert!(matches!(plan, RenderPlan::ShowList { viewport: Viewport::Scroll, .. }));
	assert_eq!(plan.rows().len(), 11);
	assert_eq!(engine.move_previous(), Some("item10"));
}

#[test]
fn summary_then_list_rebuilds_from_scratch() {
	let mut engine = overflow_engine(OverflowPolicy::Summarize, 11);
	engine.on_query_changed("item0");
	let first = engine.results().get("item00").map(|item| item.instance());
	assert!(first.is_some());

	engine.on_query_changed("item");
	engine.on_query_changed("item0");
	assert_ne!(engine.results().get("item00").map(|item| item.instance()), first);
}

#[test]
fn commit_closes_and_sets_query() {
	let mut engine = engine_with(&["Apple", "Apricot"], MatchKind::StartsWithIgnoreCase);
	engine.on_query_changed("ap");
	engine.move_previous();
	assert_eq!(engine.commit_selection().as_deref(), Some("Apricot"));
	assert_eq!(engine.query(), "Apricot");
	assert!(engine.results().is_empty());
	assert_eq!(engine.highlighted(), None);
	assert_eq!(engine.render_plan(), RenderPlan::Hidden);
}

#[test]
fn commit_without_highlight_is_noop() {
	let mut engine = engine_with(&["Apple", "Apricot"], MatchKind::StartsWithIgnoreCase);
	engine.on_query_changed("ap");
	assert_eq!(engine.commit_selection(), None);
	assert_eq!(engine.query(), "ap");
	assert_eq!(engine.results().len(), 2);
}

#[test]
fn hover_then_keyboard_navigation() {
	let mut engine = engine_with(&["cherry", "citron", "clementine"], MatchKind::StartsWith);
	engine.on_query_changed("c");
	assert!(engine.highlight("citron"));
	assert!(!engine.highlight("durian"));
	assert_eq!(engine.move_next(), Some("clementine"));
	assert_eq!(engine.move_next(), Some("cherry"));

	let plan = engine.render_plan();
	let highlighted: Vec<_> = plan.rows().iter().filter(|row| row.highlighted).map(|row| row.item.id()).collect();
	assert_eq!(highlighted, ["cherry"]);

	engine.move_none();
	assert_eq!(engine.highlighted(), None);
}

#[test]
fn set_options_resets_results() {
	let mut engine = engine_with(&["Apple"], MatchKind::StartsWithIgnoreCase);
	engine.on_query_changed("a");
	engine.move_next();
	engine.set_options(["Avocado", "Apple"]);
	assert!(engine.results().is_empty());
	assert_eq!(engine.highlighted(), None);
	assert_eq!(engine.options(), ["Avocado", "Apple"]);

	let plan = engine.on_query_changed("a");
	let texts: Vec<_> = plan.rows().iter().map(|row| row.item.text()).collect();
	assert_eq!(texts, ["Avocado", "Apple"]);
}

#[test]
fn failing_candidates_are_reported_not_fatal() {
	let matcher = Matcher::custom(
		"no-durian",
		TryFnMatch::new(|candidate: &str, query: &str| {
			if candidate.starts_with('d') {
				return Err(MatchError::Failed("smells".into()));
			}
			Ok(MatchKind::Contains.matches(candidate, query))
		}),
	);
	let config = EngineConfig::builder().matcher(matcher).build().expect("valid config");
	let mut engine = Engine::new(config, ["date", "durian", "grape"]);

	let plan = engine.on_query_changed("a");
	let texts: Vec<_> = plan.rows().iter().map(|row| row.item.text()).collect();
	assert_eq!(texts, ["grape"]);
	let failed: Vec<_> = engine.last_failures().iter().map(|f| f.candidate.as_str()).collect();
	assert_eq!(failed, ["date", "durian"]);

	engine.on_query_changed("");
	assert!(engine.last_failures().is_empty());
}

#[test]
fn duplicate_options_collapse_to_one_row() {
	let mut engine = engine_with(&["lime", "lemon", "lime"], MatchKind::StartsWith);
	let plan = engine.on_query_changed("l");
	let texts: Vec<_> = plan.rows().iter().map(|row| row.item.text()).collect();
	assert_eq!(texts, ["lime", "lemon"]);
}

#[test]
fn reset_and_set_value_close_the_popup() {
	let mut engine = engine_with(&["melon"], MatchKind::StartsWith);
	engine.on_query_changed("m");
	engine.set_value("melon");
	assert_eq!(engine.query(), "melon");
	assert!(!engine.is_open());

	engine.on_query_changed("m");
	engine.reset();
	assert_eq!(engine.query(), "");
	assert!(engine.results().is_empty());
}

#[test]
fn undrained_session_keeps_event_queue_bounded() {
	let mut engine = engine_with(&["Apple", "Apricot", "Avocado", "Banana"], MatchKind::StartsWithIgnoreCase);
	for round in 0..1000 {
		engine.on_query_changed(if round % 2 == 0 { "a" } else { "ap" });
		engine.move_next();
		engine.move_next();
	}
	// The last round typed "ap" and moved Apple -> Apricot from an empty queue.
	assert_eq!(
		engine.drain_selection_events().collect::<Vec<_>>(),
		[SelectionEvent::Highlight("Apricot".into())]
	);
}

#[test]
fn closing_discards_pending_events() {
	let mut engine = engine_with(&["Apple", "Apricot"], MatchKind::StartsWithIgnoreCase);
	engine.on_query_changed("ap");
	engine.move_next();
	engine.set_value("Apple");
	assert_eq!(engine.drain_selection_events().count(), 0);
}
