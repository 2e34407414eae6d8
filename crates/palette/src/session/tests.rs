use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn names(session: &Session) -> Vec<&str> {
	session.filtered().map(Command::name).collect()
}

fn editor_registry() -> Registry {
	Registry::from([
		Command::action("todo", "A"),
		Command::action("table", "B"),
		Command::action("bold", "C"),
		Command::submenu(
			"insert",
			[
				Command::action("date", "D"),
				Command::action("time", "T"),
				Command::submenu("heading", [Command::action("h1", "H1"), Command::action("h2", "H2")]),
			],
		),
	])
}

#[test]
fn open_starts_at_root_with_everything_listed() {
	let session = Session::open(editor_registry());
	assert_eq!(session.status(), Status::Root);
	assert_eq!(session.query(), "");
	assert_eq!(session.selected(), 0);
	assert_eq!(names(&session), ["todo", "table", "bold", "insert"]);
	assert!(session.path().is_empty());
}

#[test]
fn query_filters_to_substring_matches() {
	let mut session = Session::open(Registry::from([
		Command::action("todo", "A"),
		Command::action("table", "B"),
		Command::action("bold", "C"),
	]));

	assert!(session.set_query("to"));
	let filtered: Vec<Command> = session.filtered().cloned().collect();
	assert_eq!(filtered, vec![Command::action("todo", "A")]);
}

#[test]
fn same_query_is_a_no_op() {
	let mut session = Session::open(editor_registry());
	session.set_query("t");
	session.move_selection(1);
	assert!(!session.set_query("t"));
	assert_eq!(session.selected(), 1);
}

#[test]
fn new_query_resets_selection() {
	let mut session = Session::open(editor_registry());
	session.move_selection(2);
	session.set_query("o");
	assert_eq!(session.selected(), 0);
	assert_eq!(names(&session), ["todo", "bold"]);
}

#[test]
fn activating_submenu_navigates() {
	let mut session = Session::open(Registry::from([Command::submenu(
		"insert",
		[Command::action("date", "D"), Command::action("time", "T")],
	)]));

	assert_eq!(session.activate_selected(), Activation::Navigated);
	assert_eq!(session.path(), vec![Arc::<str>::from("insert")]);
	assert_eq!(
		session.active().cloned(),
		Some(Registry::from([Command::action("date", "D"), Command::action("time", "T")]))
	);
	assert_eq!(session.query(), "");
	assert_eq!(session.status(), Status::Nested(1));
}

#[test]
fn empty_results_keep_session_open() {
	let mut session = Session::open(editor_registry());
	session.set_query("xyz");
	assert_eq!(session.filtered_len(), 0);
	assert!(session.is_open());

	assert!(!session.move_selection(1));
	assert_eq!(session.selected(), 0);
	assert!(session.selected_command().is_none());
	assert_eq!(session.activate_selected(), Activation::NoOp);
	assert!(session.is_open());

	session.set_query("ta");
	assert_eq!(names(&session), ["table"]);
}

#[test]
fn cancel_is_terminal_and_idempotent() {
	let mut session = Session::open(editor_registry());
	session.cancel();
	session.cancel();

	assert!(!session.set_query("to"));
	assert!(!session.move_selection(1));
	assert_eq!(session.activate_selected(), Activation::NoOp);
	assert!(matches!(session.leave(), Err(PaletteError::StaleSession)));
	assert_eq!(session.status(), Status::Closed);
	assert_eq!(session.query(), "");
	assert_eq!(session.filtered().count(), 0);
	assert!(session.root().is_none());
}

#[test]
fn commit_closes_with_full_path() {
	let mut session = Session::open(editor_registry());
	session.set_query("ins");
	session.activate_selected();
	session.set_query("head");
	session.activate_selected();
	session.move_selection(1);

	let activation = session.activate_selected();
	assert_eq!(
		activation,
		Activation::Commit {
			reference: ActionRef::from("H2"),
			path: vec!["insert".into(), "heading".into(), "h2".into()],
		}
	);
	assert!(!session.is_open());
}

#[test]
fn leave_restores_parent_query_and_selection() {
	let mut session = Session::open(editor_registry());
	session.set_query("t");
	assert_eq!(names(&session), ["todo", "table", "insert"]);
	session.move_selection(2);
	assert_eq!(session.activate_selected(), Activation::Navigated);
	session.set_query("da");

	session.leave().expect("one level deep");
	assert_eq!(session.query(), "t");
	assert_eq!(session.selected(), 2);
	assert_eq!(session.selected_command().map(Command::name), Some("insert"));
	assert_eq!(session.status(), Status::Root);
}

#[test]
fn leave_at_root_reports_empty_stack() {
	let mut session = Session::open(editor_registry());
	session.set_query("b");
	assert!(matches!(session.leave(), Err(PaletteError::EmptyStack)));
	assert_eq!(session.query(), "b");
	assert!(session.is_open());
}

#[test]
fn selection_clamps_at_both_ends() {
	let mut session = Session::open(editor_registry());
	assert!(!session.move_selection(-1));
	assert!(session.move_selection(10));
	assert_eq!(session.selected(), 3);
	assert!(!session.move_selection(1));
	assert!(session.select_first());
	assert_eq!(session.selected(), 0);
	assert!(session.select_last());
	assert_eq!(session.selected(), 3);
}

#[test]
fn command_at_checks_bounds() {
	let mut session = Session::open(editor_registry());
	session.set_query("bo");
	assert_eq!(session.command_at(0).map(Command::name).ok(), Some("bold"));
	assert!(matches!(session.command_at(1), Err(PaletteError::InvalidIndex { index: 1, len: 1 })));
	session.cancel();
	assert!(matches!(session.command_at(0), Err(PaletteError::StaleSession)));
}

#[test]
fn snapshot_outlives_registry_updates() {
	let store = crumb_registry::CommandRegistry::new();
	store.register("md", editor_registry());
	let session = Session::open(store.snapshot("md"));
	store.register("md", [Command::action("other", "O")]);
	assert_eq!(session.filtered_len(), 4);
}

fn flat_strategy() -> impl Strategy<Value = Vec<(String, bool)>> {
	prop::collection::vec(("[abc]{1,4}", any::<bool>()), 0..10)
}

fn build(entries: &[(String, bool)]) -> Registry {
	entries
		.iter()
		.map(|(name, submenu)| {
			if *submenu {
				Command::submenu(name.as_str(), [Command::action("child", "child"), Command::action("other", "other")])
			} else {
				Command::action(name.as_str(), name.as_str())
			}
		})
		.collect()
}

#[derive(Debug, Clone)]
enum Op {
	Query(String),
	Move(isize),
	Activate,
	Leave,
}

fn op_strategy() -> impl Strategy<Value = Op> {
	prop_oneof![
		"[abc]{0,2}".prop_map(Op::Query),
		(-3isize..=3).prop_map(Op::Move),
		Just(Op::Activate),
		Just(Op::Leave),
	]
}

proptest! {
	#[test]
	fn push_pop_round_trip(entries in flat_strategy(), query in "[abc]{0,2}", moves in 0isize..6) {
		let mut session = Session::open(build(&entries));
		session.set_query(&query);
		session.move_selection(moves);

		if session.selected_command().is_some_and(Command::is_submenu) {
			let active = session.active().cloned().expect("open");
			let query = session.query().to_string();
			let selected = session.selected();
			let filtered: Vec<Command> = session.filtered().cloned().collect();

			prop_assert_eq!(session.activate_selected(), Activation::Navigated);
			prop_assert_eq!(session.depth(), 1);
			session.leave().expect("one level deep");

			prop_assert!(session.active().is_some_and(|now| now.ptr_eq(&active)));
			prop_assert_eq!(session.query(), query.as_str());
			prop_assert_eq!(session.selected(), selected);
			prop_assert_eq!(session.filtered().cloned().collect::<Vec<_>>(), filtered);
		}
	}

	#[test]
	fn push_pop_round_trip_when_nested(entries in flat_strategy(), query in "[abc]{0,2}", moves in 0isize..6) {
		let mut session = Session::open(Registry::from([Command::submenu("outer", build(&entries))]));
		prop_assert_eq!(session.activate_selected(), Activation::Navigated);
		session.set_query(&query);
		session.move_selection(moves);

		if session.selected_command().is_some_and(Command::is_submenu) {
			let active = session.active().cloned().expect("open");
			let query = session.query().to_string();
			let selected = session.selected();
			let filtered: Vec<Command> = session.filtered().cloned().collect();

			prop_assert_eq!(session.activate_selected(), Activation::Navigated);
			prop_assert_eq!(session.depth(), 2);
			session.leave().expect("two levels deep");

			prop_assert_eq!(session.depth(), 1);
			prop_assert!(session.active().is_some_and(|now| now.ptr_eq(&active)));
			prop_assert_eq!(session.query(), query.as_str());
			prop_assert_eq!(session.selected(), selected);
			prop_assert_eq!(session.filtered().cloned().collect::<Vec<_>>(), filtered);
			prop_assert_eq!(session.path(), vec![Arc::<str>::from("outer")]);
		}
	}

	#[test]
	fn selection_stays_in_bounds(entries in flat_strategy(), ops in prop::collection::vec(op_strategy(), 0..30)) {
		let mut session = Session::open(build(&entries));
		for op in ops {
			match op {
				Op::Query(q) => { session.set_query(&q); }
				Op::Move(delta) => { session.move_selection(delta); }
				Op::Activate => { session.activate_selected(); }
				Op::Leave => { let _ = session.leave(); }
			}
			prop_assert!(session.selected() < session.filtered_len().max(1));
			prop_assert_eq!(session.path().len(), session.depth());
			if !session.is_open() {
				prop_assert_eq!(session.filtered_len(), 0);
			}
		}
	}

	#[test]
	fn commit_path_matches_depth(depth in 0usize..6, query in "[x]{0,1}") {
		let mut level = Registry::from([Command::action("xleaf", "target")]);
		for n in (0..depth).rev() {
			level = Registry::from([Command::action("decoy", "decoy"), Command::submenu(format!("menu{n}"), level)]);
		}

		let mut session = Session::open(level);
		for n in 0..depth {
			session.set_query(&format!("menu{n}"));
			prop_assert_eq!(session.activate_selected(), Activation::Navigated);
		}
		session.set_query(&query);

		match session.activate_selected() {
			Activation::Commit { reference, path } => {
				prop_assert_eq!(reference, ActionRef::from("target"));
				prop_assert_eq!(path.len(), depth + 1);
				prop_assert_eq!(path.last().map(|name| &**name), Some("xleaf"));
			}
			other => prop_assert!(false, "expected commit, got {:?}", other),
		}
	}
}
