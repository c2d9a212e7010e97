//! Deduplicated, always-sorted class tokens.

use std::collections::BTreeSet;

/// Set of CSS class tokens.
///
/// Tokens are stored sorted by code point, so rendering is independent of the
/// order they were added in. Whitespace inside a token splits it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
	tokens: BTreeSet<String>,
}

impl ClassList {
	/// Creates an empty class list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds every whitespace-separated token in `class`.
	pub fn insert(&mut self, class: &str) {
		self.tokens
			.extend(class.split_whitespace().map(str::to_string));
	}

	/// Removes a single token. Returns whether it was present.
	pub fn remove(&mut self, token: &str) -> bool {
		self.tokens.remove(token)
	}

	/// Removes every token.
	pub fn clear(&mut self) {
		self.tokens.clear();
	}

	/// Returns whether `token` is present.
	pub fn contains(&self, token: &str) -> bool {
		self.tokens.contains(token)
	}

	/// Returns `true` when no tokens are present.
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Number of distinct tokens.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// Iterates tokens in render order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.tokens.iter().map(String::as_str)
	}

	/// Adds every token of `other`.
	pub fn union(&mut self, other: ClassList) {
		self.tokens.extend(other.tokens);
	}

	/// Renders the full `class="..."` attribute, or `None` when empty.
	pub fn render(&self) -> Option<String> {
		if self.tokens.is_empty() {
			return None;
		}
		Some(format!(
			"class=\"{}\"",
			self.iter().collect::<Vec<_>>().join(" ")
		))
	}
}

impl<S: AsRef<str>> Extend<S> for ClassList {
	fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
		for class in iter {
			self.insert(class.as_ref());
		}
	}
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		let mut list = Self::new();
		list.extend(iter);
		list
	}
}
