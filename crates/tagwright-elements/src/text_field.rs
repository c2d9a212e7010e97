//! Single-line `<input>` text field.

use tagwright_core::{
	AttributeCollection, AttributeModifiers, BooleanAttribute, CoreAttribute, HasAttributes,
};

use crate::context::RenderContext;
use crate::render::{OpeningTag, Render};
use crate::variant::ControlSize;

/// Value of the field's `type` attribute.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextType {
	/// `text`
	#[default]
	Text,
	/// `email`
	Email,
	/// `number`
	Number,
	/// `password`
	Password,
	/// `search`
	Search,
	/// `tel`
	Tel,
	/// `url`
	Url,
}

impl TextType {
	/// Attribute value.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Email => "email",
			Self::Number => "number",
			Self::Password => "password",
			Self::Search => "search",
			Self::Tel => "tel",
			Self::Url => "url",
		}
	}
}

/// A text input.
///
/// Void element. Unlike [`Button`](crate::Button), the `type` attribute is
/// placed after the sorted attributes, right before `class`.
///
/// ## Example
///
/// ```
/// use tagwright_elements::{Render, RenderContext, TextField};
///
/// let html = TextField::new(Some("Your name"))
///     .required()
///     .render(&RenderContext::default());
/// assert_eq!(
///     html,
///     "<input placeholder=\"Your name\" required type=\"text\" class=\"form-control\" />"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
	text_type: TextType,
	size: ControlSize,
	attributes: AttributeCollection,
}

impl TextField {
	/// Creates a field with an optional placeholder.
	pub fn new(placeholder: Option<impl Into<String>>) -> Self {
		let field = Self::default();
		match placeholder {
			Some(placeholder) => field.custom_attribute("placeholder", placeholder),
			None => field,
		}
	}

	/// Sets the `type` attribute.
	pub fn text_type(mut self, text_type: TextType) -> Self {
		self.text_type = text_type;
		self
	}

	/// Sets the size (`form-control-sm` / `form-control-lg`).
	pub fn size(mut self, size: ControlSize) -> Self {
		self.size = size;
		self
	}

	/// Sets the `name` submitted with the form.
	pub fn name(self, name: impl Into<String>) -> Self {
		self.custom_attribute("name", name)
	}

	/// Sets the initial value.
	pub fn value(self, value: impl Into<String>) -> Self {
		self.custom_attribute("value", value)
	}

	/// Disables the field.
	pub fn disabled(self) -> Self {
		self.boolean_attribute(BooleanAttribute::Disabled)
	}

	/// Makes the field read-only.
	pub fn read_only(self) -> Self {
		self.boolean_attribute(BooleanAttribute::ReadOnly)
	}

	/// Marks the field as required.
	pub fn required(self) -> Self {
		self.boolean_attribute(BooleanAttribute::Required)
	}

	/// Returns the placeholder, if any.
	pub fn placeholder(&self) -> Option<&str> {
		self.attributes
			.get("placeholder")
			.and_then(|entry| entry.value())
	}
}

impl HasAttributes for TextField {
	fn attributes(&self) -> &AttributeCollection {
		&self.attributes
	}

	fn attributes_mut(&mut self) -> &mut AttributeCollection {
		&mut self.attributes
	}
}

impl Render for TextField {
	fn render(&self, _ctx: &RenderContext) -> String {
		let mut attributes = self.attributes.clone();
		attributes.add_class("form-control");
		if let Some(suffix) = self.size.suffix() {
			attributes.add_class(&format!("form-control-{suffix}"));
		}

		OpeningTag::new("input")
			.trailing(CoreAttribute::Type(self.text_type.as_str().into()))
			.void()
			.render(&attributes)
	}
}
