//! Palette session state machine.

use std::sync::Arc;

use crumb_matcher::IncrementalMatcher;
use crumb_registry::{ActionRef, Command, CommandEntry, Registry};

use crate::error::{PaletteError, Result};
use crate::nav::{NavStack, NavigationFrame};

/// Result of [`Session::activate_selected`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
	/// A leaf command was chosen. The session is closed afterwards.
	Commit {
		reference: ActionRef,
		/// Breadcrumb plus the chosen command's name.
		path: Vec<Arc<str>>,
	},
	/// A submenu was entered.
	Navigated,
	/// Nothing to activate.
	NoOp,
}

/// Coarse lifecycle state of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
	Closed,
	Root,
	/// Inside a submenu at the given depth (at least 1).
	Nested(usize),
}

/// One open command palette, from [`Session::open`] until it is cancelled or
/// a command is committed.
///
/// Every operation on a closed session is a no-op. A closed session cannot be
/// reopened; open a new one instead.
#[derive(Default)]
pub struct Session {
	open: Option<Open>,
}

struct Open {
	root: Registry,
	active: Registry,
	query: String,
	/// Indices into `active`, ranked.
	filtered: Vec<usize>,
	selected: usize,
	stack: NavStack,
	matcher: IncrementalMatcher,
}

impl Open {
	fn new(root: Registry) -> Self {
		let mut open = Self {
			matcher: IncrementalMatcher::new(&root[..]),
			active: root.clone(),
			root,
			query: String::new(),
			filtered: Vec::new(),
			selected: 0,
			stack: NavStack::new(),
		};
		open.refilter();
		open
	}

	/// Switches the active level and re-ranks it against `query`.
	fn set_level(&mut self, commands: Registry, query: String) {
		self.matcher = IncrementalMatcher::new(&commands[..]);
		self.active = commands;
		self.query = query;
		self.refilter();
	}

	fn refilter(&mut self) {
		self.filtered = self
			.matcher
			.match_needle(&self.query)
			.iter()
			.map(|m| m.index)
			.collect();
		self.selected = 0;
	}

	fn select(&mut self, index: usize) -> bool {
		let Some(last) = self.filtered.len().checked_sub(1) else {
			return false;
		};
		let index = index.min(last);
		if index == self.selected {
			return false;
		}
		self.selected = index;
		true
	}
}

impl Session {
	/// Opens a session at the root of `registry` with an empty query.
	pub fn open(registry: Registry) -> Self {
		let open = Open::new(registry);
		tracing::debug!(commands = open.active.len(), "palette session opened");
		Self { open: Some(open) }
	}

	/// Returns a session that is already closed.
	pub fn closed() -> Self {
		Self::default()
	}

	#[inline]
	pub fn is_open(&self) -> bool {
		self.open.is_some()
	}

	pub fn status(&self) -> Status {
		match &self.open {
			None => Status::Closed,
			Some(open) if open.stack.is_root() => Status::Root,
			Some(open) => Status::Nested(open.stack.depth()),
		}
	}

	/// Current query; empty when closed.
	pub fn query(&self) -> &str {
		self.open.as_ref().map_or("", |open| open.query.as_str())
	}

	/// Selected position in the filtered list; 0 when closed or empty.
	pub fn selected(&self) -> usize {
		self.open.as_ref().map_or(0, |open| open.selected)
	}

	pub fn depth(&self) -> usize {
		self.open.as_ref().map_or(0, |open| open.stack.depth())
	}

	/// Names of the entered submenus, outermost first.
	pub fn path(&self) -> Vec<Arc<str>> {
		self.open
			.as_ref()
			.map(|open| open.stack.path().cloned().collect())
			.unwrap_or_default()
	}

	/// The registry snapshot the session was opened with.
	pub fn root(&self) -> Option<&Registry> {
		self.open.as_ref().map(|open| &open.root)
	}

	/// The full, unfiltered command list of the current level.
	pub fn active(&self) -> Option<&Registry> {
		self.open.as_ref().map(|open| &open.active)
	}

	/// The current level's commands that match the query, ranked.
	pub fn filtered(&self) -> impl Iterator<Item = &Command> + '_ {
		self.open
			.iter()
			.flat_map(|open| open.filtered.iter().map(move |&index| &open.active[index]))
	}

	pub fn filtered_len(&self) -> usize {
		self.open.as_ref().map_or(0, |open| open.filtered.len())
	}

	/// The highlighted command, if the filtered list is non-empty.
	pub fn selected_command(&self) -> Option<&Command> {
		let open = self.open.as_ref()?;
		let &index = open.filtered.get(open.selected)?;
		Some(&open.active[index])
	}

	/// Returns the filtered command at `index`.
	pub fn command_at(&self, index: usize) -> Result<&Command> {
		let open = self.open.as_ref().ok_or(PaletteError::StaleSession)?;
		let &active_index = open.filtered.get(index).ok_or(PaletteError::InvalidIndex {
			index,
			len: open.filtered.len(),
		})?;
		Ok(&open.active[active_index])
	}

	/// Replaces the query, re-ranks, and moves the selection to the top.
	///
	/// Returns `false` if the query is unchanged or the session is closed. An
	/// empty result does not close the session.
	pub fn set_query(&mut self, query: &str) -> bool {
		let Some(open) = self.open.as_mut() else {
			return false;
		};
		if open.query == query {
			return false;
		}

		open.query.clear();
		open.query.push_str(query);
		open.refilter();
		tracing::trace!(
			query,
			matches = open.filtered.len(),
			depth = open.stack.depth(),
			"palette query changed"
		);
		true
	}

	/// Moves the selection by `delta`, clamped to the filtered list.
	///
	/// Returns `true` if the selection moved.
	pub fn move_selection(&mut self, delta: isize) -> bool {
		let Some(open) = self.open.as_mut() else {
			return false;
		};
		let target = open.selected.saturating_add_signed(delta);
		open.select(target)
	}

	pub fn select_first(&mut self) -> bool {
		self.open.as_mut().is_some_and(|open| open.select(0))
	}

	pub fn select_last(&mut self) -> bool {
		self.open.as_mut().is_some_and(|open| open.select(usize::MAX))
	}

	/// Activates the highlighted command.
	///
	/// A leaf closes the session and yields [`Activation::Commit`]. A submenu
	/// becomes the active level with an empty query.
	pub fn activate_selected(&mut self) -> Activation {
		let Some(open) = self.open.as_mut() else {
			return Activation::NoOp;
		};
		let Some(&index) = open.filtered.get(open.selected) else {
			return Activation::NoOp;
		};

		let Command { name, entry } = open.active[index].clone();
		match entry {
			CommandEntry::Action(reference) => {
				let path: Vec<Arc<str>> = open.stack.path().cloned().chain(std::iter::once(name)).collect();
				tracing::debug!(%reference, depth = path.len() - 1, "palette command committed");
				self.open = None;
				Activation::Commit { reference, path }
			}
			CommandEntry::Submenu(children) => {
				let frame = NavigationFrame {
					name,
					children: children.clone(),
					parent: open.active.clone(),
					query: std::mem::take(&mut open.query),
					selected: open.selected,
				};
				open.stack.enter(frame);
				open.set_level(children, String::new());
				tracing::debug!(depth = open.stack.depth(), commands = open.active.len(), "palette entered submenu");
				Activation::Navigated
			}
		}
	}

	/// Returns to the parent level, restoring its command list, query, and selection.
	///
	/// Fails with [`PaletteError::EmptyStack`] at the root and
	/// [`PaletteError::StaleSession`] when closed; the session is unchanged in
	/// both cases.
	pub fn leave(&mut self) -> Result<()> {
		let open = self.open.as_mut().ok_or(PaletteError::StaleSession)?;
		let frame = open.stack.leave()?;
		open.set_level(frame.parent, frame.query);
		open.select(frame.selected);
		tracing::debug!(depth = open.stack.depth(), "palette left submenu");
		Ok(())
	}

	/// Closes the session and discards all of its state. Idempotent.
	pub fn cancel(&mut self) {
		if self.open.take().is_some() {
			tracing::debug!("palette session cancelled");
		}
	}
}

#[cfg(test)]
mod tests;
