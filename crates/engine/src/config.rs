//! Engine configuration.
//!
//! Configuration is validated once, up front: an [`EngineConfig`] that exists
//! is always usable. Values come either from [`EngineConfigBuilder`] or from a
//! TOML document:
//!
//! ```toml
//! hitlimit = 20
//! overflow = "summarize"
//! matcher = "contains"
//!
//! [palette]
//! hover = "navy"
//! ```
//!
//! Custom match functions cannot be named in TOML; set them with
//! [`EngineConfigBuilder::matcher`].

use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::Deserialize;
use sift_matching::{MatchKind, Matcher};

use crate::error::{ConfigError, Result};
use crate::{OverflowPolicy, RowPalette};

const DEFAULT_HITLIMIT: NonZeroUsize = match NonZeroUsize::new(50) {
	Some(n) => n,
	None => NonZeroUsize::MIN,
};

/// Immutable per-engine settings.
#[derive(Debug, Clone)]
pub struct EngineConfig {
	hitlimit: NonZeroUsize,
	overflow: OverflowPolicy,
	matcher: Matcher,
	palette: RowPalette,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			hitlimit: DEFAULT_HITLIMIT,
			overflow: OverflowPolicy::default(),
			matcher: Matcher::default(),
			palette: RowPalette::default(),
		}
	}
}

impl EngineConfig {
	/// Starts from the defaults.
	pub fn builder() -> EngineConfigBuilder {
		EngineConfigBuilder::default()
	}

	/// Parses and validates a TOML configuration document.
	///
	/// # Errors
	///
	/// Fails on malformed TOML, unknown keys, a non-positive `hitlimit`, or an
	/// unknown `overflow` or `matcher` name.
	pub fn from_toml(src: &str) -> Result<Self> {
		let raw: RawConfig = toml::from_str(src)?;
		EngineConfigBuilder { raw, matcher: None }.build()
	}

	/// Maximum number of rows shown before the overflow policy applies.
	pub fn hitlimit(&self) -> NonZeroUsize {
		self.hitlimit
	}

	/// Policy applied above the hit limit.
	pub fn overflow(&self) -> OverflowPolicy {
		self.overflow
	}

	pub fn matcher(&self) -> &Matcher {
		&self.matcher
	}

	/// Row colours.
	pub fn palette(&self) -> &RowPalette {
		&self.palette
	}
}

/// Unvalidated settings as they appear in TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
	hitlimit: Option<i64>,
	overflow: Option<String>,
	matcher: Option<String>,
	palette: Option<RowPalette>,
}

/// Collects settings and validates them in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
	raw: RawConfig,
	matcher: Option<Matcher>,
}

impl EngineConfigBuilder {
	/// Maximum rows listed before the overflow policy applies.
	///
	/// Zero is rejected by [`build`](Self::build).
	pub fn hitlimit(mut self, hitlimit: usize) -> Self {
		self.raw.hitlimit = Some(i64::try_from(hitlimit).unwrap_or(i64::MAX));
		self
	}

	pub fn overflow(mut self, policy: OverflowPolicy) -> Self {
		self.raw.overflow = Some(policy.to_string());
		self
	}

	/// Sets the overflow policy by name; checked in [`build`](Self::build).
	pub fn overflow_name(mut self, name: impl Into<String>) -> Self {
		self.raw.overflow = Some(name.into());
		self
	}

	/// Uses a built-in or custom match function.
	pub fn matcher(mut self, matcher: impl Into<Matcher>) -> Self {
		self.matcher = Some(matcher.into());
		self.raw.matcher = None;
		self
	}

	/// Names a built-in match function; checked in [`build`](Self::build).
	pub fn matcher_name(mut self, name: impl Into<String>) -> Self {
		self.raw.matcher = Some(name.into());
		self.matcher = None;
		self
	}

	pub fn palette(mut self, palette: RowPalette) -> Self {
		self.raw.palette = Some(palette);
		self
	}

	/// Validates the collected settings.
	///
	/// # Errors
	///
	/// Returns the first invalid setting as a [`ConfigError`].
	pub fn build(self) -> Result<EngineConfig> {
		let hitlimit = match self.raw.hitlimit {
			None => DEFAULT_HITLIMIT,
			Some(n) => usize::try_from(n)
				.ok()
				.and_then(NonZeroUsize::new)
				.ok_or(ConfigError::InvalidHitlimit(n))?,
		};

		let overflow = match self.raw.overflow {
			None => OverflowPolicy::default(),
			Some(name) => OverflowPolicy::from_str(&name).map_err(|_| ConfigError::UnknownOverflowPolicy(name))?,
		};

		let matcher = match (self.matcher, self.raw.matcher) {
			(Some(matcher), _) => matcher,
			(None, Some(name)) => MatchKind::from_str(&name)
				.map(Matcher::builtin)
				.map_err(|_| ConfigError::UnknownMatcher(name))?,
			(None, None) => Matcher::default(),
		};

		Ok(EngineConfig {
			hitlimit,
			overflow,
			matcher,
			palette: self.raw.palette.unwrap_or_default(),
		})
	}
}
