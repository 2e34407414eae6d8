//! Case-insensitive substring matching for command palettes.
//!
//! A haystack matches when it contains the needle as a contiguous substring,
//! ignoring case. Matches are ranked by where the needle first occurs, so
//! prefix matches (position 0) come before mid-string matches. Ties keep
//! the haystacks' original order.
//!
//! ```
//! let names = ["table", "todo", "photo"];
//! let ranked: Vec<_> = crumb_matcher::rank(&names, "to").iter().map(|m| names[m.index]).collect();
//! assert_eq!(ranked, ["todo", "photo"]);
//! ```

use std::cmp::Ordering;

mod incremental;

pub use incremental::IncrementalMatcher;

/// A matched haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
	/// Index of the haystack in the input slice.
	pub index: usize,
	/// Character offset of the first occurrence of the needle in the case-folded haystack.
	pub position: usize,
}

/// Orders by position, then by input order.
impl Ord for Match {
	fn cmp(&self, other: &Self) -> Ordering {
		self.position.cmp(&other.position).then(self.index.cmp(&other.index))
	}
}

impl PartialOrd for Match {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Case-folds `text` for comparison.
///
/// Each character is lowered on its own. `str::to_lowercase` picks final
/// sigma from context, which would fold a name and a needle differently.
#[inline]
pub fn fold(text: &str) -> String {
	text.chars().flat_map(char::to_lowercase).collect()
}

/// Returns the character offset of the first occurrence of `needle` in `haystack`.
///
/// Both arguments must already be case-folded.
#[inline]
pub fn first_match(haystack: &str, needle: &str) -> Option<usize> {
	haystack
		.find(needle)
		.map(|byte| haystack[..byte].chars().count())
}

/// Matches `needle` against every haystack and returns the ranked matches.
///
/// An empty needle matches everything at position 0, in input order.
pub fn rank<S: AsRef<str>>(haystacks: &[S], needle: &str) -> Vec<Match> {
	if needle.is_empty() {
		return identity(haystacks.len());
	}

	let needle = fold(needle);
	let mut matches: Vec<Match> = haystacks
		.iter()
		.enumerate()
		.filter_map(|(index, haystack)| {
			first_match(&fold(haystack.as_ref()), &needle).map(|position| Match { index, position })
		})
		.collect();
	matches.sort_unstable();
	matches
}

/// Filters `items` by `query` and returns them in ranked order.
///
/// With an empty query the items come back unchanged.
pub fn filter_and_rank<T: AsRef<str> + Clone>(items: &[T], query: &str) -> Vec<T> {
	if query.is_empty() {
		return items.to_vec();
	}
	rank(items, query)
		.into_iter()
		.map(|m| items[m.index].clone())
		.collect()
}

pub(crate) fn identity(len: usize) -> Vec<Match> {
	(0..len).map(|index| Match { index, position: 0 }).collect()
}
