//! Inline style declarations.
//!
//! A [`Property`] is a closed vocabulary of CSS properties with canonical
//! kebab-case names. Declarations are kept in an [`InlineStyle`], keyed by the
//! canonical name, and compile to a single `style` attribute value:
//!
//! ```
//! use tagwright_core::style::{InlineStyle, Property, StyleDeclaration};
//!
//! let mut style = InlineStyle::new();
//! style.insert(StyleDeclaration::new(Property::ZIndex, "1"));
//! style.insert(StyleDeclaration::new(Property::AccentColor, "red"));
//! assert_eq!(style.render().as_deref(), Some("accent-color: red; z-index: 1"));
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

macro_rules! css_properties {
	($($variant:ident => $name:literal,)*) => {
		/// CSS property identifiers.
		#[non_exhaustive]
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		pub enum Property {
			$(
				#[doc = concat!("`", $name, "`")]
				$variant,
			)*
		}

		impl Property {
			/// Every property, in declaration order.
			pub const ALL: &'static [Property] = &[$(Property::$variant,)*];

			/// Canonical kebab-case CSS name.
			pub fn as_str(&self) -> &'static str {
				match self {
					$(Self::$variant => $name,)*
				}
			}
		}
	};
}

css_properties! {
	AccentColor => "accent-color",
	AlignContent => "align-content",
	AlignItems => "align-items",
	AlignSelf => "align-self",
	Animation => "animation",
	AspectRatio => "aspect-ratio",
	Background => "background",
	BackgroundColor => "background-color",
	BackgroundImage => "background-image",
	BackgroundPosition => "background-position",
	BackgroundRepeat => "background-repeat",
	BackgroundSize => "background-size",
	Border => "border",
	BorderColor => "border-color",
	BorderRadius => "border-radius",
	BorderStyle => "border-style",
	BorderWidth => "border-width",
	Bottom => "bottom",
	BoxShadow => "box-shadow",
	BoxSizing => "box-sizing",
	Color => "color",
	ColumnGap => "column-gap",
	Cursor => "cursor",
	Display => "display",
	Filter => "filter",
	Flex => "flex",
	FlexBasis => "flex-basis",
	FlexDirection => "flex-direction",
	FlexGrow => "flex-grow",
	FlexShrink => "flex-shrink",
	FlexWrap => "flex-wrap",
	Float => "float",
	FontFamily => "font-family",
	FontSize => "font-size",
	FontStyle => "font-style",
	FontWeight => "font-weight",
	Gap => "gap",
	GridTemplateColumns => "grid-template-columns",
	GridTemplateRows => "grid-template-rows",
	Height => "height",
	JustifyContent => "justify-content",
	Left => "left",
	LetterSpacing => "letter-spacing",
	LineHeight => "line-height",
	ListStyle => "list-style",
	Margin => "margin",
	MarginBottom => "margin-bottom",
	MarginLeft => "margin-left",
	MarginRight => "margin-right",
	MarginTop => "margin-top",
	MaxHeight => "max-height",
	MaxWidth => "max-width",
	MinHeight => "min-height",
	MinWidth => "min-width",
	ObjectFit => "object-fit",
	Opacity => "opacity",
	Outline => "outline",
	Overflow => "overflow",
	OverflowX => "overflow-x",
	OverflowY => "overflow-y",
	Padding => "padding",
	PaddingBottom => "padding-bottom",
	PaddingLeft => "padding-left",
	PaddingRight => "padding-right",
	PaddingTop => "padding-top",
	PointerEvents => "pointer-events",
	Position => "position",
	Right => "right",
	RowGap => "row-gap",
	TextAlign => "text-align",
	TextDecoration => "text-decoration",
	TextOverflow => "text-overflow",
	TextTransform => "text-transform",
	Top => "top",
	Transform => "transform",
	Transition => "transition",
	UserSelect => "user-select",
	VerticalAlign => "vertical-align",
	Visibility => "visibility",
	WhiteSpace => "white-space",
	Width => "width",
	WordBreak => "word-break",
	ZIndex => "z-index",
}

impl fmt::Display for Property {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The property half of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleProperty {
	/// A property from the closed vocabulary.
	Known(Property),
	/// Any other property name, written as given (e.g. `--bs-primary`).
	Custom(Cow<'static, str>),
}

impl StyleProperty {
	/// Canonical name used for rendering and sorting.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Known(property) => property.as_str(),
			Self::Custom(name) => name,
		}
	}
}

impl From<Property> for StyleProperty {
	fn from(property: Property) -> Self {
		Self::Known(property)
	}
}

/// One `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDeclaration {
	property: StyleProperty,
	value: String,
}

impl StyleDeclaration {
	/// Creates a declaration for a known property.
	pub fn new(property: Property, value: impl Into<String>) -> Self {
		Self {
			property: StyleProperty::Known(property),
			value: value.into(),
		}
	}

	/// Creates a declaration for a property outside [`Property`].
	pub fn custom(property: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
		Self {
			property: StyleProperty::Custom(property.into()),
			value: value.into(),
		}
	}

	/// Returns the property.
	pub fn property(&self) -> &StyleProperty {
		&self.property
	}

	/// Returns the value.
	pub fn value(&self) -> &str {
		&self.value
	}
}

impl fmt::Display for StyleDeclaration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.property.as_str(), self.value)
	}
}

/// Accumulated declarations for one element.
///
/// Keyed by canonical property name: adding a property that is already present
/// replaces its value, and iteration is always sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
	declarations: BTreeMap<String, StyleDeclaration>,
}

impl InlineStyle {
	/// Creates an empty style.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a declaration.
	pub fn insert(&mut self, declaration: StyleDeclaration) {
		let key = declaration.property.as_str().to_string();
		if let Some(previous) = self.declarations.insert(key, declaration) {
			tracing::debug!(
				property = previous.property.as_str(),
				previous = %previous.value,
				"style declaration replaced"
			);
		}
	}

	/// Drops every declaration.
	pub fn clear(&mut self) {
		self.declarations.clear();
	}

	/// Looks up the declaration for a canonical property name.
	pub fn get(&self, property: &str) -> Option<&StyleDeclaration> {
		self.declarations.get(property)
	}

	/// Returns `true` when there are no declarations.
	pub fn is_empty(&self) -> bool {
		self.declarations.is_empty()
	}

	/// Number of declarations.
	pub fn len(&self) -> usize {
		self.declarations.len()
	}

	/// Iterates declarations sorted by property name.
	pub fn iter(&self) -> impl Iterator<Item = &StyleDeclaration> {
		self.declarations.values()
	}

	/// Adds every declaration of `other`, replacing same-named ones.
	pub fn merge(&mut self, other: InlineStyle) {
		for declaration in other.declarations.into_values() {
			self.insert(declaration);
		}
	}

	/// Compiles to the `style` attribute value, or `None` when empty.
	pub fn render(&self) -> Option<String> {
		if self.declarations.is_empty() {
			return None;
		}
		Some(
			self.iter()
				.map(ToString::to_string)
				.collect::<Vec<_>>()
				.join("; "),
		)
	}
}

impl Extend<StyleDeclaration> for InlineStyle {
	fn extend<I: IntoIterator<Item = StyleDeclaration>>(&mut self, iter: I) {
		for declaration in iter {
			self.insert(declaration);
		}
	}
}

impl FromIterator<StyleDeclaration> for InlineStyle {
	fn from_iter<I: IntoIterator<Item = StyleDeclaration>>(iter: I) -> Self {
		let mut style = Self::new();
		style.extend(iter);
		style
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Property::ZIndex, "z-index")]
	#[case(Property::AccentColor, "accent-color")]
	#[case(Property::Cursor, "cursor")]
	#[case(Property::GridTemplateColumns, "grid-template-columns")]
	fn test_kebab_names(#[case] property: Property, #[case] expected: &str) {
		assert_eq!(property.as_str(), expected);
	}

	#[rstest]
	fn test_property_names_are_canonical() {
		for property in Property::ALL {
			let name = property.as_str();
			assert!(
				name.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
				"{name} is not kebab-case"
			);
		}
	}

	#[rstest]
	fn test_declaration_display() {
		let declaration = StyleDeclaration::new(Property::ZIndex, "1");
		assert_eq!(declaration.to_string(), "z-index: 1");
	}

	#[rstest]
	fn test_sorted_by_property_name() {
		let style: InlineStyle = [
			StyleDeclaration::new(Property::ZIndex, "1"),
			StyleDeclaration::new(Property::AccentColor, "red"),
			StyleDeclaration::new(Property::Cursor, "pointer"),
		]
		.into_iter()
		.collect();

		assert_eq!(
			style.render().as_deref(),
			Some("accent-color: red; cursor: pointer; z-index: 1")
		);
	}

	#[rstest]
	fn test_same_property_overwrites() {
		let mut style = InlineStyle::new();
		style.insert(StyleDeclaration::new(Property::Color, "red"));
		style.insert(StyleDeclaration::new(Property::Color, "blue"));

		assert_eq!(style.len(), 1);
		assert_eq!(style.render().as_deref(), Some("color: blue"));
	}

	#[rstest]
	fn test_custom_property_sorts_with_known() {
		let style: InlineStyle = [
			StyleDeclaration::new(Property::Color, "var(--brand)"),
			StyleDeclaration::custom("--brand", "#0d6efd"),
		]
		.into_iter()
		.collect();

		assert_eq!(
			style.render().as_deref(),
			Some("--brand: #0d6efd; color: var(--brand)")
		);
	}

	#[rstest]
	fn test_custom_matching_known_name_overwrites() {
		let mut style = InlineStyle::new();
		style.insert(StyleDeclaration::new(Property::ZIndex, "1"));
		style.insert(StyleDeclaration::custom("z-index", "2"));
		assert_eq!(style.render().as_deref(), Some("z-index: 2"));
	}

	#[rstest]
	fn test_empty_renders_nothing() {
		assert_eq!(InlineStyle::new().render(), None);
	}
}
