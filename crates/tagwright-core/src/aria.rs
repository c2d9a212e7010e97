//! ARIA state and property names.

use std::fmt;

use crate::attributes::AttributeName;

macro_rules! aria_attributes {
	($($variant:ident => $name:literal,)*) => {
		/// ARIA states and properties, rendered as `aria-<name>`.
		#[non_exhaustive]
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		pub enum AriaAttribute {
			$(
				#[doc = concat!("`aria-", $name, "`")]
				$variant,
			)*
		}

		impl AriaAttribute {
			/// Lowercase name without the `aria-` prefix.
			pub fn as_str(&self) -> &'static str {
				match self {
					$(Self::$variant => $name,)*
				}
			}
		}
	};
}

aria_attributes! {
	ActiveDescendant => "activedescendant",
	Atomic => "atomic",
	AutoComplete => "autocomplete",
	Busy => "busy",
	Checked => "checked",
	ColCount => "colcount",
	ColIndex => "colindex",
	ColSpan => "colspan",
	Controls => "controls",
	Current => "current",
	DescribedBy => "describedby",
	Description => "description",
	Details => "details",
	Disabled => "disabled",
	ErrorMessage => "errormessage",
	Expanded => "expanded",
	FlowTo => "flowto",
	HasPopup => "haspopup",
	Hidden => "hidden",
	Invalid => "invalid",
	KeyShortcuts => "keyshortcuts",
	Label => "label",
	LabelledBy => "labelledby",
	Level => "level",
	Live => "live",
	Modal => "modal",
	MultiLine => "multiline",
	MultiSelectable => "multiselectable",
	Orientation => "orientation",
	Owns => "owns",
	Placeholder => "placeholder",
	PosInSet => "posinset",
	Pressed => "pressed",
	ReadOnly => "readonly",
	Relevant => "relevant",
	Required => "required",
	RoleDescription => "roledescription",
	RowCount => "rowcount",
	RowIndex => "rowindex",
	RowSpan => "rowspan",
	Selected => "selected",
	SetSize => "setsize",
	Sort => "sort",
	ValueMax => "valuemax",
	ValueMin => "valuemin",
	ValueNow => "valuenow",
	ValueText => "valuetext",
}

impl AriaAttribute {
	/// Full attribute name, e.g. `aria-setsize`.
	pub fn attribute_name(&self) -> AttributeName {
		AttributeName::from_static(self.as_str()).prefixed_lowercase("aria-")
	}
}

impl fmt::Display for AriaAttribute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "aria-{}", self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(AriaAttribute::SetSize, "aria-setsize")]
	#[case(AriaAttribute::Atomic, "aria-atomic")]
	#[case(AriaAttribute::LabelledBy, "aria-labelledby")]
	fn test_attribute_name(#[case] aria: AriaAttribute, #[case] expected: &str) {
		assert_eq!(aria.attribute_name().as_str(), expected);
		assert_eq!(aria.to_string(), expected);
	}
}
