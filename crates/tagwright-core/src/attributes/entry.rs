//! Attribute names and entries.

use std::borrow::{Borrow, Cow};
use std::fmt;

use crate::error::{AttributeError, Result};

/// A validated HTML attribute name.
///
/// Names are non-empty and contain none of the characters HTML forbids in
/// attribute names (whitespace, controls, `"`, `'`, `<`, `>`, `/`, `=`).
/// Ordering is plain byte order, which is the order attributes render in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributeName(Cow<'static, str>);

impl AttributeName {
	/// Creates a name from runtime input.
	///
	/// # Errors
	///
	/// Returns [`AttributeError::EmptyName`] for an empty string and
	/// [`AttributeError::InvalidName`] when a forbidden character is present.
	pub fn new(name: impl Into<Cow<'static, str>>) -> Result<Self> {
		let name = name.into();
		validate(&name)?;
		Ok(Self(name))
	}

	/// Creates a name from a string literal.
	///
	/// # Panics
	///
	/// Panics if the literal is not a valid attribute name. Literals are part
	/// of the program text, so an invalid one is a bug at the call site.
	///
	/// # Example
	///
	/// ```
	/// use tagwright_core::AttributeName;
	///
	/// let name = AttributeName::from_static("data-id");
	/// assert_eq!(name.as_str(), "data-id");
	/// ```
	pub fn from_static(name: &'static str) -> Self {
		match validate(name) {
			Ok(()) => Self(Cow::Borrowed(name)),
			Err(err) => panic!("{err}"),
		}
	}

	/// Prepends `prefix` to a lowercased copy of `self`.
	///
	/// Used by the derived categories (`aria-*`, `data-*`). The prefix is
	/// trusted to be a valid name fragment.
	pub(crate) fn prefixed_lowercase(&self, prefix: &str) -> Self {
		Self(Cow::Owned(format!("{prefix}{}", self.0.to_lowercase())))
	}

	/// Returns the name as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

fn validate(name: &str) -> Result<()> {
	if name.is_empty() {
		return Err(AttributeError::EmptyName);
	}
	if let Some(character) = name.chars().find(|c| {
		c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
	}) {
		return Err(AttributeError::InvalidName {
			name: name.to_string(),
			character,
		});
	}
	Ok(())
}

impl fmt::Display for AttributeName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for AttributeName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for AttributeName {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl TryFrom<String> for AttributeName {
	type Error = AttributeError;

	fn try_from(value: String) -> Result<Self> {
		Self::new(value)
	}
}

/// Conversion into an [`AttributeName`] for builder-style APIs.
///
/// Implemented for validated names, the closed vocabularies
/// ([`BooleanAttribute`](crate::BooleanAttribute), [`Event`](crate::Event))
/// and string literals. Literals go through [`AttributeName::from_static`].
pub trait IntoAttributeName {
	/// Performs the conversion.
	fn into_attribute_name(self) -> AttributeName;
}

impl IntoAttributeName for AttributeName {
	fn into_attribute_name(self) -> AttributeName {
		self
	}
}

impl IntoAttributeName for &AttributeName {
	fn into_attribute_name(self) -> AttributeName {
		self.clone()
	}
}

impl IntoAttributeName for &'static str {
	fn into_attribute_name(self) -> AttributeName {
		AttributeName::from_static(self)
	}
}

/// The atomic attribute unit.
///
/// A `None` value is a boolean attribute and renders as the bare name. A
/// disabled entry renders nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeEntry {
	name: AttributeName,
	value: Option<String>,
	enabled: bool,
}

impl AttributeEntry {
	/// Creates an enabled entry with a value.
	pub fn valued(name: AttributeName, value: impl Into<String>) -> Self {
		Self {
			name,
			value: Some(value.into()),
			enabled: true,
		}
	}

	/// Creates an enabled boolean entry.
	pub fn boolean(name: AttributeName) -> Self {
		Self {
			name,
			value: None,
			enabled: true,
		}
	}

	/// Sets the enabled flag.
	pub fn enabled(mut self, enabled: bool) -> Self {
		self.enabled = enabled;
		self
	}

	/// Returns the entry name.
	pub fn name(&self) -> &AttributeName {
		&self.name
	}

	/// Returns the value, `None` for boolean attributes.
	pub fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}

	/// Returns whether the entry will be rendered.
	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	/// Renders the entry as `name` or `name="value"`.
	///
	/// Returns `None` for disabled entries. The value is written verbatim.
	pub fn render(&self) -> Option<String> {
		if !self.enabled {
			return None;
		}
		Some(match &self.value {
			Some(value) => format!("{}=\"{}\"", self.name, value),
			None => self.name.to_string(),
		})
	}
}
