//! Leader-character trigger detection.
//!
//! Hosts call [`detect`] with the text between the start of the line and the
//! cursor. The palette opens when the leader sits at the start of the line or
//! right after a trigger character, and nothing after it is a trigger
//! character. The text after the leader is the query.

/// A satisfied trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerMatch {
	/// Byte offset of the leader within the line.
	pub start: usize,
	/// Text between the leader and the cursor.
	pub query: String,
}

pub fn detect(line_before_cursor: &str, leader: char, trigger_characters: &[char]) -> Option<TriggerMatch> {
	let start = line_before_cursor.rfind(leader)?;
	let query = &line_before_cursor[start + leader.len_utf8()..];
	if query.contains(trigger_characters) {
		return None;
	}

	let boundary = line_before_cursor[..start]
		.chars()
		.next_back()
		.is_none_or(|prev| trigger_characters.contains(&prev));
	boundary.then(|| TriggerMatch {
		start,
		query: query.to_string(),
	})
}
