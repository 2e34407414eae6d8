//! Command registries for the crumb palette.
//!
//! A registry is an ordered list of named [`Command`]s, each of which is
//! either a leaf [`CommandEntry::Action`] or a nested [`CommandEntry::Submenu`].
//! Registries are immutable once built; [`Registry`] clones share storage, so
//! a session can hold its snapshot for as long as it likes.
//!
//! [`CommandRegistry`] stores one registry per host context (a buffer, a
//! filetype, a window) and publishes updates copy-on-write. Registration is
//! always a full replacement of the context's list.
//!
//! Registries can also be described in TOML:
//!
//! ```toml
//! [[context.markdown.command]]
//! name = "todo"
//! action = "insert-todo"
//!
//! [[context.markdown.command]]
//! name = "insert"
//!
//! [[context.markdown.command.children]]
//! name = "date"
//! action = "insert-date"
//! ```

mod def;
mod entry;
mod error;
mod store;

pub use def::{CommandDef, ContextsDef, RegistryDef};
pub use entry::{ActionRef, Command, CommandEntry, Registry};
pub use error::{RegistryError, Result};
pub use store::CommandRegistry;
