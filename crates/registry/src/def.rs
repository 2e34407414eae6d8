//! TOML registry definitions.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::entry::{Command, Registry};
use crate::error::{RegistryError, Result};

/// A single command as written in TOML.
///
/// Exactly one of `action` and `children` must be present.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandDef {
	pub name: String,
	#[serde(default)]
	pub action: Option<String>,
	#[serde(default)]
	pub children: Option<Vec<CommandDef>>,
}

/// One registry level: `[[command]]` tables in order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryDef {
	#[serde(default, rename = "command")]
	pub commands: Vec<CommandDef>,
}

/// Registries keyed by context: `[[context.<name>.command]]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextsDef {
	#[serde(default, rename = "context")]
	pub contexts: BTreeMap<String, RegistryDef>,
}

impl CommandDef {
	fn build(&self, parent: &str) -> Result<Command> {
		let path = if parent.is_empty() {
			self.name.clone()
		} else {
			format!("{parent}/{}", self.name)
		};
		if self.name.trim().is_empty() {
			return Err(RegistryError::InvalidEntry {
				name: path,
				reason: "command name is empty",
			});
		}

		match (&self.action, &self.children) {
			(Some(action), None) => Ok(Command::action(self.name.as_str(), action.as_str())),
			(None, Some(children)) => {
				let children = children
					.iter()
					.map(|child| child.build(&path))
					.collect::<Result<Registry>>()?;
				Ok(Command::submenu(self.name.as_str(), children))
			}
			(Some(_), Some(_)) => Err(RegistryError::InvalidEntry {
				name: path,
				reason: "both `action` and `children` are set",
			}),
			(None, None) => Err(RegistryError::InvalidEntry {
				name: path,
				reason: "one of `action` or `children` is required",
			}),
		}
	}
}

impl RegistryDef {
	pub fn from_toml(src: &str) -> Result<Self> {
		Ok(toml::from_str(src)?)
	}

	/// Validates every definition and builds the registry tree.
	pub fn build(&self) -> Result<Registry> {
		self.commands.iter().map(|def| def.build("")).collect()
	}
}

impl ContextsDef {
	pub fn from_toml(src: &str) -> Result<Self> {
		Ok(toml::from_str(src)?)
	}

	/// Builds every context, in name order.
	pub fn build(&self) -> Result<Vec<(String, Registry)>> {
		self.contexts
			.iter()
			.map(|(name, def)| Ok((name.clone(), def.build()?)))
			.collect()
	}
}
