//! Submenu navigation stack.

use std::sync::Arc;

use crumb_registry::Registry;

use crate::error::{PaletteError, Result};

/// Parent state saved when entering a submenu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationFrame {
	/// Name of the submenu that was entered.
	pub name: Arc<str>,
	/// The submenu's own children, which become the active list.
	pub children: Registry,
	/// The parent's full command list.
	pub parent: Registry,
	/// The parent's query at the time of entry.
	pub query: String,
	/// The parent's selection at the time of entry.
	pub selected: usize,
}

/// LIFO stack of [`NavigationFrame`]s. Its depth is the breadcrumb length.
#[derive(Debug, Clone, Default)]
pub struct NavStack {
	frames: Vec<NavigationFrame>,
}

impl NavStack {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn enter(&mut self, frame: NavigationFrame) {
		self.frames.push(frame);
	}

	/// Pops the innermost frame.
	///
	/// Fails with [`PaletteError::EmptyStack`] at the root.
	pub fn leave(&mut self) -> Result<NavigationFrame> {
		self.frames.pop().ok_or(PaletteError::EmptyStack)
	}

	#[inline]
	pub fn depth(&self) -> usize {
		self.frames.len()
	}

	#[inline]
	pub fn is_root(&self) -> bool {
		self.frames.is_empty()
	}

	pub fn top(&self) -> Option<&NavigationFrame> {
		self.frames.last()
	}

	/// Names of the entered submenus, outermost first.
	pub fn path(&self) -> impl Iterator<Item = &Arc<str>> {
		self.frames.iter().map(|frame| &frame.name)
	}
}
