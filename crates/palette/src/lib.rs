//! Command palette state machine.
//!
//! A [`Session`] is opened with a [`Registry`] snapshot and driven by the host
//! with query updates, selection moves, activation, and cancellation. Each
//! change re-ranks the active level through [`crumb_matcher`], and
//! [`project`] turns the current state into a [`RenderModel`] for whatever
//! draws the palette. Entering a submenu pushes a [`NavigationFrame`] that is
//! popped verbatim on the way back out.
//!
//! Nothing here renders, reads keys, or edits text. Hosts that juggle several
//! palettes at once (one per window, say) can hold them in a [`Palette`] table
//! and talk to it through [`SessionHandle`]s and [`Event`]s.
//!
//! # Lifecycle
//!
//! ```text
//! Closed --open--> Open@root --activate(submenu)--> Open@depth-N
//!                     ^                                  |
//!                     +-----------leave------------------+
//! any open state --cancel | activate(action)--> Closed
//! ```

mod config;
mod error;
mod host;
mod nav;
mod render;
mod session;
mod trigger;

pub use config::{EmptyPolicy, PaletteConfig};
pub use crumb_registry::{ActionRef, Command, CommandEntry, CommandRegistry, Registry};
pub use error::{ConfigError, PaletteError, Result};
pub use host::{Event, Outcome, Palette, SessionHandle};
pub use nav::{NavStack, NavigationFrame};
pub use render::{RenderItem, RenderModel, project};
pub use session::{Activation, Session, Status};
pub use trigger::{TriggerMatch, detect};
