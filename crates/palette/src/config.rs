//! Palette configuration.
//!
//! Every key is optional; missing keys take their defaults.
//!
//! ```toml
//! max-visible-items = 10
//! trigger-characters = [" ", "\t"]
//! submenu-indicator = "»"
//! leader = "/"
//! empty-policy = "keep"        # or "close-at-root"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::trigger::{self, TriggerMatch};

/// What the host does when a query leaves nothing to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyPolicy {
	/// Keep the session open so the query can be edited back into a match.
	#[default]
	Keep,
	/// Close the session when a query change leaves the root level with no
	/// matches.
	///
	/// Only query changes are checked. A session opened on an empty registry
	/// stays open until its query is edited.
	CloseAtRoot,
}

/// Recognized palette options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PaletteConfig {
	/// Maximum number of rows in a [`RenderModel`](crate::RenderModel).
	pub max_visible_items: usize,
	/// Characters that may precede the leader and that end a query.
	pub trigger_characters: Vec<char>,
	/// Suffix shown after submenu names. Display only.
	pub submenu_indicator: String,
	/// Character that opens the palette.
	pub leader: char,
	pub empty_policy: EmptyPolicy,
}

impl PaletteConfig {
	pub const DEFAULT_MAX_VISIBLE: usize = 10;

	/// Parses and validates a TOML document.
	pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(src)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses, and validates a TOML file.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let src = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml(&src)?;
		tracing::debug!(path = %path.display(), "loaded palette config");
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.max_visible_items == 0 {
			return Err(ConfigError::Invalid("max-visible-items must be at least 1".into()));
		}
		if self.trigger_characters.contains(&self.leader) {
			return Err(ConfigError::Invalid(format!(
				"leader {:?} is also a trigger character",
				self.leader
			)));
		}
		Ok(())
	}

	/// Checks whether the text before the cursor opens the palette.
	pub fn detect_trigger(&self, line_before_cursor: &str) -> Option<TriggerMatch> {
		trigger::detect(line_before_cursor, self.leader, &self.trigger_characters)
	}
}

impl Default for PaletteConfig {
	fn default() -> Self {
		Self {
			max_visible_items: Self::DEFAULT_MAX_VISIBLE,
			trigger_characters: vec![' ', '\t'],
			submenu_indicator: "»".to_string(),
			leader: '/',
			empty_policy: EmptyPolicy::Keep,
		}
	}
}
