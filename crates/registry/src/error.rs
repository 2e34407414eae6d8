use thiserror::Error;

/// Errors raised while building registries from definitions.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// A command definition is structurally invalid.
	#[error("invalid command {name:?}: {reason}")]
	InvalidEntry {
		/// Breadcrumb of the offending command, joined with `/`.
		name: String,
		reason: &'static str,
	},

	/// The TOML source could not be deserialized.
	#[error("registry parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
