//! Match-and-navigate engine for autocomplete popups.
//!
//! The [`Engine`] owns the option list, the current query, the reconciled
//! [`ResultSet`] and the [`SelectionController`]. The text-input shell calls
//! [`Engine::on_query_changed`] on every keystroke and renders the returned
//! [`RenderPlan`]; keyboard and mouse handlers drive the selection through the
//! engine and read back [`SelectionEvent`]s to restyle rows.

/// Engine configuration and TOML loading.
pub mod config;
/// Composition root tying filtering, reconciliation and selection together.
pub mod engine;
/// Configuration errors.
pub mod error;
/// Behaviour when the match count exceeds the hit limit.
pub mod overflow;
/// Row segmentation and styling roles for renderers.
pub mod palette;
/// Identity-preserving set of result rows.
pub mod result_set;
/// Highlight state machine.
pub mod selection;

pub use config::{EngineConfig, EngineConfigBuilder};
pub use engine::{Engine, RenderPlan, Row};
pub use error::{ConfigError, Result};
pub use overflow::{OverflowDecision, OverflowPolicy, Viewport};
pub use palette::{RowPalette, Segment, SegmentRole};
pub use result_set::{Diff, InstanceId, RebuildReport, ResultItem, ResultSet};
pub use selection::{SelectionController, SelectionEvent};
pub use sift_matching::{Hit, MatchError, MatchFailure, MatchFn, MatchKind, Matcher, Span};
