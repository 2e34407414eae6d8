//! Error types for palette sessions and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by palette operations.
///
/// None of these are fatal: every operation leaves the session consistent.
#[derive(Debug, Error)]
pub enum PaletteError {
	/// Tried to leave a submenu while already at the root level.
	#[error("already at the root level")]
	EmptyStack,

	/// The session is closed or the handle no longer refers to an open session.
	#[error("palette session is closed")]
	StaleSession,

	/// Index outside the filtered command list.
	#[error("index {index} out of range for {len} matches")]
	InvalidIndex { index: usize, len: usize },

	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Errors that can occur when loading palette configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unexpected key.
	#[error("config parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The configuration parsed but is not usable.
	#[error("invalid config: {0}")]
	Invalid(String),
}

/// Result type for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
