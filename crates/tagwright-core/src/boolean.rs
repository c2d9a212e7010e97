//! HTML boolean attributes.
//!
//! Boolean attributes are active by presence alone:
//! - `<button disabled>` is disabled
//! - `<button disabled="false">` is STILL disabled
//! - `<button>` is NOT disabled (attribute absent)
//!
//! They therefore never carry a value; turning one off removes it.

use std::fmt;

use crate::attributes::{AttributeName, IntoAttributeName};

macro_rules! boolean_attributes {
	($($variant:ident => $name:literal,)*) => {
		/// Boolean attributes from the HTML5 specification.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		pub enum BooleanAttribute {
			$(
				#[doc = concat!("`", $name, "`")]
				$variant,
			)*
		}

		impl BooleanAttribute {
			/// Every boolean attribute, sorted by name.
			pub const ALL: &'static [BooleanAttribute] = &[$(BooleanAttribute::$variant,)*];

			/// The attribute name.
			pub fn as_str(&self) -> &'static str {
				match self {
					$(Self::$variant => $name,)*
				}
			}
		}
	};
}

boolean_attributes! {
	AllowFullscreen => "allowfullscreen",
	Async => "async",
	Autofocus => "autofocus",
	Autoplay => "autoplay",
	Checked => "checked",
	Controls => "controls",
	Default => "default",
	Defer => "defer",
	Disabled => "disabled",
	FormNoValidate => "formnovalidate",
	Hidden => "hidden",
	Inert => "inert",
	IsMap => "ismap",
	ItemScope => "itemscope",
	Loop => "loop",
	Multiple => "multiple",
	Muted => "muted",
	NoModule => "nomodule",
	NoValidate => "novalidate",
	Open => "open",
	PlaysInline => "playsinline",
	ReadOnly => "readonly",
	Required => "required",
	Reversed => "reversed",
	Selected => "selected",
}

impl BooleanAttribute {
	/// Looks up a boolean attribute by its (lowercase) name.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL
			.binary_search_by(|attribute| attribute.as_str().cmp(name))
			.ok()
			.map(|index| Self::ALL[index])
	}
}

impl fmt::Display for BooleanAttribute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl IntoAttributeName for BooleanAttribute {
	fn into_attribute_name(self) -> AttributeName {
		AttributeName::from_static(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_all_is_sorted() {
		assert!(
			BooleanAttribute::ALL
				.windows(2)
				.all(|pair| pair[0].as_str() < pair[1].as_str())
		);
	}

	#[rstest]
	#[case("disabled", Some(BooleanAttribute::Disabled))]
	#[case("readonly", Some(BooleanAttribute::ReadOnly))]
	#[case("required", Some(BooleanAttribute::Required))]
	#[case("placeholder", None)]
	fn test_from_name(#[case] name: &str, #[case] expected: Option<BooleanAttribute>) {
		assert_eq!(BooleanAttribute::from_name(name), expected);
	}

	#[rstest]
	fn test_into_attribute_name() {
		let name = BooleanAttribute::ReadOnly.into_attribute_name();
		assert_eq!(name.as_str(), "readonly");
	}
}
