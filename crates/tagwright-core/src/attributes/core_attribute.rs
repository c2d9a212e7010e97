//! Element-identity attributes with a fixed position.

use std::borrow::Cow;
use std::fmt;

/// An attribute intrinsic to an element type.
///
/// Core attributes are not sorted: the element decides where each one goes
/// in its opening tag, and that position never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CoreAttribute {
	/// `type`
	Type(Cow<'static, str>),
	/// `href`
	Href(Cow<'static, str>),
	/// `rel`
	Rel(Cow<'static, str>),
	/// `src`
	Src(Cow<'static, str>),
	/// `alt`
	Alt(Cow<'static, str>),
	/// `name`
	Name(Cow<'static, str>),
	/// `content`
	Content(Cow<'static, str>),
	/// `charset`
	Charset(Cow<'static, str>),
	/// `lang`
	Lang(Cow<'static, str>),
}

impl CoreAttribute {
	/// Attribute name.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Type(_) => "type",
			Self::Href(_) => "href",
			Self::Rel(_) => "rel",
			Self::Src(_) => "src",
			Self::Alt(_) => "alt",
			Self::Name(_) => "name",
			Self::Content(_) => "content",
			Self::Charset(_) => "charset",
			Self::Lang(_) => "lang",
		}
	}

	/// Attribute value.
	pub fn value(&self) -> &str {
		match self {
			Self::Type(value)
			| Self::Href(value)
			| Self::Rel(value)
			| Self::Src(value)
			| Self::Alt(value)
			| Self::Name(value)
			| Self::Content(value)
			| Self::Charset(value)
			| Self::Lang(value) => value,
		}
	}

	/// Renders `name="value"`.
	pub fn render(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for CoreAttribute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}=\"{}\"", self.name(), self.value())
	}
}
