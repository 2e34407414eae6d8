use crate::{Match, first_match, fold, identity};

/// Matcher that reuses its previous result while the needle only grows.
///
/// Any haystack containing `needle + suffix` also contains `needle`, so when
/// the new needle extends the previous one only the previous matches are
/// re-tested. Results are always identical to [`crate::rank`].
pub struct IncrementalMatcher {
	haystacks: Vec<String>,
	needle: Option<String>,
	matches: Vec<Match>,
}

impl IncrementalMatcher {
	pub fn new<S: AsRef<str>>(haystacks: &[S]) -> Self {
		Self {
			haystacks: haystacks.iter().map(|h| fold(h.as_ref())).collect(),
			needle: None,
			matches: Vec::new(),
		}
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.haystacks.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.haystacks.is_empty()
	}

	/// Matches `needle` and returns the ranked matches.
	pub fn match_needle(&mut self, needle: &str) -> &[Match] {
		let needle = fold(needle);
		if self.needle.as_deref() == Some(needle.as_str()) {
			return &self.matches;
		}

		if needle.is_empty() {
			self.matches = identity(self.haystacks.len());
		} else {
			let narrowing = self
				.needle
				.as_deref()
				.is_some_and(|prev| !prev.is_empty() && needle.starts_with(prev));
			let haystacks = &self.haystacks;
			let probe = |index: usize| {
				first_match(&haystacks[index], &needle).map(|position| Match { index, position })
			};

			let mut matches: Vec<Match> = if narrowing {
				self.matches.iter().filter_map(|m| probe(m.index)).collect()
			} else {
				(0..haystacks.len()).filter_map(probe).collect()
			};
			matches.sort_unstable();
			self.matches = matches;
		}

		self.needle = Some(needle);
		&self.matches
	}

	/// Returns the matches for the last needle, if any has been matched.
	pub fn last(&self) -> Option<&[Match]> {
		self.needle.as_ref().map(|_| self.matches.as_slice())
	}
}
