//! `crumb`: replay palette events against a TOML command registry.
//!
//! ```text
//! crumb --registry commands.toml --context markdown type:ins enter down enter
//! ```
//!
//! The render model is printed after every event. Replay stops when a command
//! is committed or the session closes.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crumb_palette::{CommandRegistry, Outcome, Palette, PaletteConfig};
use tracing::info;

mod script;
mod view;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "crumb")]
#[command(about = "Replay command palette events against a registry")]
#[command(version)]
struct Args {
	/// Registry definition (TOML)
	#[arg(short, long, value_name = "PATH")]
	registry: PathBuf,

	/// Palette configuration (TOML)
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Registry context to open
	#[arg(long, default_value = "default")]
	context: String,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,

	/// Events to replay: type:<text>, up, down, move:<n>, enter, back, esc
	events: Vec<String>,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if args.verbose {
			tracing::Level::TRACE
		} else {
			tracing::Level::INFO
		})
		.with_writer(std::io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let config = match &args.config {
		Some(path) => PaletteConfig::load(path)?,
		None => PaletteConfig::default(),
	};

	let src = std::fs::read_to_string(&args.registry)
		.with_context(|| format!("reading registry {}", args.registry.display()))?;
	let store = CommandRegistry::new();
	store
		.load_toml(&src)
		.with_context(|| format!("loading registry {}", args.registry.display()))?;

	let registry = store.snapshot(&args.context);
	if registry.is_empty() {
		anyhow::bail!("no commands registered for context {:?}", args.context);
	}
	let events = script::parse_script(args.events.as_slice())?;
	info!(context = %args.context, commands = registry.len(), events = events.len(), "replaying");

	let indicator = config.submenu_indicator.clone();
	let mut palette = Palette::new(config);
	let handle = palette.open(registry);
	print!("{}", view::render_text(&palette.project(handle), &indicator));

	for event in events {
		println!("-- {event:?}");
		match palette.dispatch(handle, event) {
			Outcome::Committed { reference, path } => {
				let path: Vec<&str> = path.iter().map(|name| &**name).collect();
				println!("commit {reference} ({})", path.join(" / "));
				return Ok(());
			}
			Outcome::Closed => {
				println!("closed");
				return Ok(());
			}
			Outcome::Unchanged | Outcome::Updated | Outcome::Navigated => {
				print!("{}", view::render_text(&palette.project(handle), &indicator));
			}
		}
	}

	Ok(())
}
