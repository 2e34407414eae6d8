//! Command entries and immutable registry snapshots.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Opaque reference to an executable action.
///
/// The palette never interprets it. Hosts resolve it once a leaf command is
/// committed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionRef(Arc<str>);

impl ActionRef {
	pub fn new(id: impl Into<Arc<str>>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ActionRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ActionRef {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

impl From<String> for ActionRef {
	fn from(id: String) -> Self {
		Self::new(id)
	}
}

/// What a command does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEntry {
	/// Leaf command, resolved and executed by the host.
	Action(ActionRef),
	/// Nested command list, navigable but not itself invokable.
	Submenu(Registry),
}

impl CommandEntry {
	#[inline]
	pub fn is_submenu(&self) -> bool {
		matches!(self, Self::Submenu(_))
	}

	#[inline]
	pub fn action(&self) -> Option<&ActionRef> {
		match self {
			Self::Action(reference) => Some(reference),
			Self::Submenu(_) => None,
		}
	}

	#[inline]
	pub fn children(&self) -> Option<&Registry> {
		match self {
			Self::Action(_) => None,
			Self::Submenu(children) => Some(children),
		}
	}
}

/// A named registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
	pub name: Arc<str>,
	pub entry: CommandEntry,
}

impl Command {
	/// Creates a leaf command.
	pub fn action(name: impl Into<Arc<str>>, reference: impl Into<ActionRef>) -> Self {
		Self {
			name: name.into(),
			entry: CommandEntry::Action(reference.into()),
		}
	}

	/// Creates a submenu holding `children`.
	pub fn submenu(name: impl Into<Arc<str>>, children: impl Into<Registry>) -> Self {
		Self {
			name: name.into(),
			entry: CommandEntry::Submenu(children.into()),
		}
	}

	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[inline]
	pub fn is_submenu(&self) -> bool {
		self.entry.is_submenu()
	}
}

/// Matching operates on command names.
impl AsRef<str> for Command {
	fn as_ref(&self) -> &str {
		&self.name
	}
}

/// Immutable, ordered command list.
///
/// Cloning is a reference count bump. Insertion order is the display order
/// when no query is active.
#[derive(Clone, PartialEq, Eq)]
pub struct Registry(Arc<[Command]>);

impl Registry {
	pub fn new(commands: Vec<Command>) -> Self {
		Self(Arc::from(commands))
	}

	pub fn empty() -> Self {
		Self::new(Vec::new())
	}

	/// Returns the first command named `name` at this level.
	pub fn find(&self, name: &str) -> Option<&Command> {
		self.0.iter().find(|cmd| &*cmd.name == name)
	}

	/// Number of levels in this tree. A flat registry has depth 1, an empty one 0.
	pub fn depth(&self) -> usize {
		self.0
			.iter()
			.map(|cmd| cmd.entry.children().map_or(0, Registry::depth))
			.max()
			.map_or(0, |deepest| deepest + 1)
	}

	/// Returns `true` if both registries share the same storage.
	#[inline]
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::empty()
	}
}

impl Deref for Registry {
	type Target = [Command];

	fn deref(&self) -> &[Command] {
		&self.0
	}
}

impl fmt::Debug for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.0.iter()).finish()
	}
}

impl From<Vec<Command>> for Registry {
	fn from(commands: Vec<Command>) -> Self {
		Self::new(commands)
	}
}

impl<const N: usize> From<[Command; N]> for Registry {
	fn from(commands: [Command; N]) -> Self {
		Self(Arc::from(commands))
	}
}

impl FromIterator<Command> for Registry {
	fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<'a> IntoIterator for &'a Registry {
	type Item = &'a Command;
	type IntoIter = std::slice::Iter<'a, Command>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
