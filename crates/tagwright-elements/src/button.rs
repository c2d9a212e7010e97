//! `<button>` element.

use tagwright_core::{
	AttributeCollection, AttributeModifiers, BooleanAttribute, CoreAttribute, HasAttributes,
};

use crate::context::RenderContext;
use crate::render::{OpeningTag, Render};
use crate::variant::{ControlSize, Variant};

/// Value of the button's `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
	/// `type="button"`: no default behavior
	#[default]
	Plain,
	/// `type="submit"`
	Submit,
	/// `type="reset"`
	Reset,
}

impl ButtonType {
	/// Attribute value.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Plain => "button",
			Self::Submit => "submit",
			Self::Reset => "reset",
		}
	}
}

/// A clickable button.
///
/// Renders as `<button type="..." ... class="btn ...">`: `type` always comes
/// first, then the sorted custom attributes, then the classes.
///
/// ## Example
///
/// ```
/// use tagwright_elements::{Button, Render, RenderContext, Variant};
///
/// let html = Button::new("Save")
///     .variant(Variant::Primary)
///     .disabled()
///     .render(&RenderContext::default());
/// assert_eq!(html, "<button type=\"button\" disabled class=\"btn btn-primary\">Save</button>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
	label: String,
	button_type: ButtonType,
	variant: Option<Variant>,
	size: ControlSize,
	attributes: AttributeCollection,
}

impl Button {
	/// Creates a button with a text label.
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			..Self::default()
		}
	}

	/// Sets the `type` attribute.
	pub fn button_type(mut self, button_type: ButtonType) -> Self {
		self.button_type = button_type;
		self
	}

	/// Sets the color variant (`btn-<variant>`).
	pub fn variant(mut self, variant: Variant) -> Self {
		self.variant = Some(variant);
		self
	}

	/// Sets the size (`btn-sm` / `btn-lg`).
	pub fn size(mut self, size: ControlSize) -> Self {
		self.size = size;
		self
	}

	/// Disables the button.
	pub fn disabled(self) -> Self {
		self.boolean_attribute(BooleanAttribute::Disabled)
	}
}

impl HasAttributes for Button {
	fn attributes(&self) -> &AttributeCollection {
		&self.attributes
	}

	fn attributes_mut(&mut self) -> &mut AttributeCollection {
		&mut self.attributes
	}
}

impl Render for Button {
	fn render(&self, _ctx: &RenderContext) -> String {
		let mut attributes = self.attributes.clone();
		attributes.add_class("btn");
		if let Some(variant) = self.variant {
			attributes.add_class(&format!("btn-{}", variant.as_str()));
		}
		if let Some(suffix) = self.size.suffix() {
			attributes.add_class(&format!("btn-{suffix}"));
		}

		OpeningTag::new("button")
			.leading(CoreAttribute::Type(self.button_type.as_str().into()))
			.render_element(&attributes, &html_escape::encode_text(&self.label))
	}
}
