//! Error types for engine configuration.

use thiserror::Error;

/// Errors raised while building an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The hit limit must be a positive integer.
	#[error("invalid hitlimit {0} (expected a positive integer)")]
	InvalidHitlimit(i64),

	/// The overflow policy name is not recognised.
	#[error("unknown overflow policy: {0} (expected 'suppress', 'summarize' or 'scroll')")]
	UnknownOverflowPolicy(String),

	/// The match function name does not refer to a built-in.
	#[error("unknown match function: {0}")]
	UnknownMatcher(String),

	/// The TOML source could not be parsed.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
