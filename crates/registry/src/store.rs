//! Per-context registry store.

use std::sync::Arc;

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap as HashMap;

use crate::def::ContextsDef;
use crate::entry::Registry;
use crate::error::Result;

type ContextMap = HashMap<Arc<str>, Registry>;

/// Maps host contexts to their command registries.
///
/// Updates swap in a new map; readers only ever see complete snapshots, and a
/// [`Registry`] handed out by [`Self::snapshot`] is never affected by later
/// registration.
pub struct CommandRegistry {
	snap: ArcSwap<ContextMap>,
}

impl CommandRegistry {
	pub fn new() -> Self {
		Self {
			snap: ArcSwap::from_pointee(ContextMap::default()),
		}
	}

	/// Replaces the whole command list for `context`.
	pub fn register(&self, context: &str, entries: impl Into<Registry>) {
		let entries = entries.into();
		let count = entries.len();
		self.update(|map| {
			map.insert(Arc::from(context), entries.clone());
		});
		tracing::debug!(context, commands = count, "registered palette commands");
	}

	/// Removes every command for `context`. Returns `false` if nothing was registered.
	pub fn clear(&self, context: &str) -> bool {
		if !self.snap.load().contains_key(context) {
			return false;
		}
		self.update(|map| {
			map.remove(context);
		});
		tracing::debug!(context, "cleared palette commands");
		true
	}

	/// Returns the registry for `context`, or an empty one if none is registered.
	pub fn snapshot(&self, context: &str) -> Registry {
		self.snap.load().get(context).cloned().unwrap_or_default()
	}

	/// Registered context names, sorted.
	pub fn contexts(&self) -> Vec<Arc<str>> {
		let mut names: Vec<_> = self.snap.load().keys().cloned().collect();
		names.sort_unstable();
		names
	}

	/// Registers every context described by a TOML document.
	///
	/// Returns the number of contexts registered. Nothing is registered if
	/// any definition is invalid.
	pub fn load_toml(&self, src: &str) -> Result<usize> {
		let contexts = ContextsDef::from_toml(src)?.build()?;
		let count = contexts.len();
		self.update(|map| {
			for (name, registry) in &contexts {
				map.insert(Arc::from(name.as_str()), registry.clone());
			}
		});
		tracing::debug!(contexts = count, "loaded palette commands");
		Ok(count)
	}

	fn update(&self, mut f: impl FnMut(&mut ContextMap)) {
		loop {
			let cur = self.snap.load_full();
			let mut next = (*cur).clone();
			f(&mut next);

			let prev = self.snap.compare_and_swap(&cur, Arc::new(next));
			if Arc::ptr_eq(&prev, &cur) {
				return;
			}
		}
	}
}

impl Default for CommandRegistry {
	fn default() -> Self {
		Self::new()
	}
}
