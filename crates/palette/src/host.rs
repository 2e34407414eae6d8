//! Handle-based session table for hosts with several palettes.
//!
//! The host translates its raw input into [`Event`]s and feeds them to
//! [`Palette::dispatch`]; the core never sees key codes. Handles are
//! generation-checked, so an event queued for a session that has since closed
//! is dropped instead of reaching whatever session reused the slot.

use std::sync::Arc;

use crumb_registry::{ActionRef, Registry};
use slab::Slab;

use crate::config::{EmptyPolicy, PaletteConfig};
use crate::error::{PaletteError, Result};
use crate::render::{RenderModel, project};
use crate::session::{Activation, Session};

/// Identifies one open session in a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionHandle {
	index: usize,
	generation: u64,
}

/// Host input, already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
	QueryChanged(String),
	Move(isize),
	Activate,
	/// Leave the current submenu.
	Back,
	Cancel,
}

/// What an [`Event`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	/// Nothing changed, including events for stale handles.
	Unchanged,
	/// Query or selection changed; re-render.
	Updated,
	/// Entered or left a submenu.
	Navigated,
	/// A leaf command was chosen and the session closed.
	Committed { reference: ActionRef, path: Vec<Arc<str>> },
	/// The session closed without a commit.
	Closed,
}

struct Slot {
	generation: u64,
	session: Session,
}

/// Owns the open sessions of one host.
pub struct Palette {
	config: PaletteConfig,
	sessions: Slab<Slot>,
	next_generation: u64,
}

impl Palette {
	pub fn new(config: PaletteConfig) -> Self {
		Self {
			config,
			sessions: Slab::new(),
			next_generation: 0,
		}
	}

	#[inline]
	pub fn config(&self) -> &PaletteConfig {
		&self.config
	}

	/// Number of open sessions.
	pub fn len(&self) -> usize {
		self.sessions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sessions.is_empty()
	}

	/// Opens a session on `registry` and returns its handle.
	///
	/// The empty-result policy is not applied here; see [`EmptyPolicy::CloseAtRoot`].
	pub fn open(&mut self, registry: Registry) -> SessionHandle {
		let generation = self.next_generation;
		self.next_generation += 1;
		let index = self.sessions.insert(Slot {
			generation,
			session: Session::open(registry),
		});
		SessionHandle { index, generation }
	}

	/// Returns the session behind `handle` if it is still open.
	pub fn session(&self, handle: SessionHandle) -> Option<&Session> {
		self.sessions
			.get(handle.index)
			.filter(|slot| slot.generation == handle.generation)
			.map(|slot| &slot.session)
	}

	fn session_mut(&mut self, handle: SessionHandle) -> Option<&mut Session> {
		self.sessions
			.get_mut(handle.index)
			.filter(|slot| slot.generation == handle.generation)
			.map(|slot| &mut slot.session)
	}

	pub fn is_open(&self, handle: SessionHandle) -> bool {
		self.session(handle).is_some()
	}

	/// Applies a query change and the configured [`EmptyPolicy`].
	pub fn set_query(&mut self, handle: SessionHandle, query: &str) -> Outcome {
		let close_on_empty = self.config.empty_policy == EmptyPolicy::CloseAtRoot;
		let Some(session) = self.session_mut(handle) else {
			return Outcome::Unchanged;
		};
		if !session.set_query(query) {
			return Outcome::Unchanged;
		}
		if close_on_empty && session.depth() == 0 && session.filtered_len() == 0 {
			tracing::debug!(query, "no matches at root, closing palette");
			self.cancel(handle);
			return Outcome::Closed;
		}
		Outcome::Updated
	}

	pub fn move_selection(&mut self, handle: SessionHandle, delta: isize) -> Outcome {
		match self.session_mut(handle).map(|session| session.move_selection(delta)) {
			Some(true) => Outcome::Updated,
			_ => Outcome::Unchanged,
		}
	}

	/// Activates the highlighted command. A commit releases the handle.
	pub fn activate_selected(&mut self, handle: SessionHandle) -> Activation {
		let Some(session) = self.session_mut(handle) else {
			return Activation::NoOp;
		};
		let activation = session.activate_selected();
		if matches!(activation, Activation::Commit { .. }) {
			self.sessions.remove(handle.index);
		}
		activation
	}

	/// Leaves the current submenu of `handle`.
	pub fn leave(&mut self, handle: SessionHandle) -> Result<()> {
		self.session_mut(handle).ok_or(PaletteError::StaleSession)?.leave()
	}

	/// Closes `handle`. Stale handles are ignored.
	pub fn cancel(&mut self, handle: SessionHandle) {
		if let Some(session) = self.session_mut(handle) {
			session.cancel();
			self.sessions.remove(handle.index);
		}
	}

	/// Render model for `handle`; empty for stale handles.
	pub fn project(&self, handle: SessionHandle) -> RenderModel {
		self.session(handle)
			.map(|session| project(session, &self.config))
			.unwrap_or_default()
	}

	/// Routes one host event to the session behind `handle`.
	///
	/// `Back` at the root level is [`Outcome::Unchanged`].
	pub fn dispatch(&mut self, handle: SessionHandle, event: Event) -> Outcome {
		if !self.is_open(handle) {
			tracing::trace!(?event, "dropping event for closed palette");
			return Outcome::Unchanged;
		}

		match event {
			Event::QueryChanged(query) => self.set_query(handle, &query),
			Event::Move(delta) => self.move_selection(handle, delta),
			Event::Activate => match self.activate_selected(handle) {
				Activation::Commit { reference, path } => Outcome::Committed { reference, path },
				Activation::Navigated => Outcome::Navigated,
				Activation::NoOp => Outcome::Unchanged,
			},
			Event::Back => match self.leave(handle) {
				Ok(()) => Outcome::Navigated,
				Err(_) => Outcome::Unchanged,
			},
			Event::Cancel => {
				self.cancel(handle);
				Outcome::Closed
			}
		}
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::new(PaletteConfig::default())
	}
}
