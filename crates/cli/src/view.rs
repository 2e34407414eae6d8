//! Plain-text rendering of a [`RenderModel`].

use std::fmt::Write;

use crumb_palette::RenderModel;

pub fn render_text(model: &RenderModel, indicator: &str) -> String {
	let mut out = String::new();
	let crumbs: Vec<&str> = model.breadcrumb.iter().map(|name| &**name).collect();
	let _ = writeln!(out, "[{}] > {}", crumbs.join(" / "), model.query);

	if model.is_empty() {
		out.push_str("  (no matching commands)\n");
		return out;
	}
	for item in &model.visible_items {
		let marker = if item.is_selected { '>' } else { ' ' };
		let _ = writeln!(out, "{marker} {}", item.label(indicator));
	}
	if model.truncated {
		let shown = model.offset + model.visible_items.len();
		let _ = writeln!(out, "  ({shown}/{})", model.total);
	}
	out
}

#[cfg(test)]
mod tests {
	use crumb_palette::{Command, PaletteConfig, Registry, Session, project};
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn renders_breadcrumb_rows_and_overflow() {
		let mut session = Session::open(Registry::from([Command::submenu(
			"insert",
			[
				Command::action("date", "d"),
				Command::submenu("heading", [Command::action("h1", "h1")]),
				Command::action("time", "t"),
			],
		)]));
		session.activate_selected();
		session.move_selection(1);

		let config = PaletteConfig {
			max_visible_items: 2,
			..PaletteConfig::default()
		};
		let text = render_text(&project(&session, &config), "»");
		assert_eq!(text, "[insert] > \n  date\n> heading »\n  (2/3)\n");
	}

	#[test]
	fn renders_empty_results() {
		let mut session = Session::open(Registry::from([Command::action("bold", "b")]));
		session.set_query("zz");
		let text = render_text(&project(&session, &PaletteConfig::default()), "»");
		assert_eq!(text, "[] > zz\n  (no matching commands)\n");
	}
}
