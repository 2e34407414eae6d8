//! Render model projection.
//!
//! [`project`] is a pure function of the session and config. It can be called
//! on every frame.

use std::sync::Arc;

use crate::config::PaletteConfig;
use crate::session::Session;

/// One visible palette row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderItem {
	pub name: Arc<str>,
	pub is_submenu: bool,
	pub is_selected: bool,
}

impl RenderItem {
	/// Display text: the name, followed by `indicator` for submenus.
	pub fn label(&self, indicator: &str) -> String {
		if self.is_submenu && !indicator.is_empty() {
			format!("{} {indicator}", self.name)
		} else {
			self.name.to_string()
		}
	}
}

/// Display-ready snapshot of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderModel {
	/// Entered submenu names, outermost first.
	pub breadcrumb: Vec<Arc<str>>,
	pub query: String,
	/// Window of the ranked matches, at most `max_visible_items` long.
	pub visible_items: Vec<RenderItem>,
	/// More matches exist than fit in the window.
	pub truncated: bool,
	/// Index of the first visible item within all matches.
	pub offset: usize,
	/// Number of matches in total.
	pub total: usize,
}

impl RenderModel {
	/// Returns `true` when there is nothing to show.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.visible_items.is_empty()
	}

	pub fn selected(&self) -> Option<&RenderItem> {
		self.visible_items.iter().find(|item| item.is_selected)
	}
}

/// Projects `session` into a [`RenderModel`].
///
/// The window starts at the top and scrolls only as far as needed to keep the
/// selected item visible. A closed session projects to an empty model.
pub fn project(session: &Session, config: &PaletteConfig) -> RenderModel {
	if !session.is_open() {
		return RenderModel::default();
	}

	let max = config.max_visible_items.max(1);
	let total = session.filtered_len();
	let selected = session.selected();
	let offset = (selected + 1).saturating_sub(max);

	let visible_items = session
		.filtered()
		.enumerate()
		.skip(offset)
		.take(max)
		.map(|(index, cmd)| RenderItem {
			name: cmd.name.clone(),
			is_submenu: cmd.is_submenu(),
			is_selected: index == selected,
		})
		.collect();

	RenderModel {
		breadcrumb: session.path(),
		query: session.query().to_string(),
		visible_items,
		truncated: total > max,
		offset,
		total,
	}
}
