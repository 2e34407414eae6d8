//! Event script parsing.
//!
//! Each command-line word is one event:
//!
//! | word | event |
//! |---|---|
//! | `type:<text>` | query becomes `<text>` |
//! | `down`, `up` | move by one |
//! | `move:<n>` | move by `n` (may be negative) |
//! | `enter` | activate |
//! | `back` | leave submenu |
//! | `esc` | cancel |

use crumb_palette::Event;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
	#[error("unknown event {0:?}")]
	UnknownEvent(String),

	#[error("invalid move delta {0:?}")]
	InvalidDelta(String),
}

pub fn parse_event(word: &str) -> Result<Event, ScriptError> {
	if let Some(text) = word.strip_prefix("type:") {
		return Ok(Event::QueryChanged(text.to_string()));
	}
	if let Some(delta) = word.strip_prefix("move:") {
		return delta
			.parse()
			.map(Event::Move)
			.map_err(|_| ScriptError::InvalidDelta(delta.to_string()));
	}

	match word {
		"down" => Ok(Event::Move(1)),
		"up" => Ok(Event::Move(-1)),
		"enter" => Ok(Event::Activate),
		"back" => Ok(Event::Back),
		"esc" => Ok(Event::Cancel),
		other => Err(ScriptError::UnknownEvent(other.to_string())),
	}
}

pub fn parse_script<S: AsRef<str>>(words: &[S]) -> Result<Vec<Event>, ScriptError> {
	words.iter().map(|word| parse_event(word.as_ref())).collect()
}
