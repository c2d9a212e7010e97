//! A generic element with no core attributes.

use std::borrow::Cow;

use tagwright_core::{AttributeCollection, HasAttributes};

use crate::context::RenderContext;
use crate::error::{ElementError, Result};
use crate::render::{OpeningTag, Render};

/// Any HTML element, identified only by its tag name.
///
/// ## Example
///
/// ```
/// use tagwright_core::AttributeModifiers;
/// use tagwright_elements::{Render, RenderContext, Tag};
///
/// let html = Tag::new("nav")
///     .class("navbar")
///     .custom_attribute("id", "top")
///     .render(&RenderContext::default());
/// assert_eq!(html, "<nav id=\"top\" class=\"navbar\"></nav>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
	name: Cow<'static, str>,
	text: String,
	attributes: AttributeCollection,
}

impl Tag {
	/// Creates an element from a tag name literal.
	///
	/// # Panics
	///
	/// Panics if `name` is not a valid tag name.
	pub fn new(name: &'static str) -> Self {
		match Self::try_new(name) {
			Ok(tag) => tag,
			Err(err) => panic!("{err}"),
		}
	}

	/// Creates an element from a runtime tag name.
	///
	/// # Errors
	///
	/// Returns [`ElementError::InvalidTagName`] unless `name` starts with an
	/// ASCII letter and continues with ASCII alphanumerics or `-`.
	pub fn try_new(name: impl Into<Cow<'static, str>>) -> Result<Self> {
		let name = name.into();
		let mut chars = name.chars();
		let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
			&& chars.all(|c| c.is_ascii_alphanumeric() || c == '-');
		if !valid {
			return Err(ElementError::InvalidTagName(name.into_owned()));
		}
		Ok(Self {
			name,
			text: String::new(),
			attributes: AttributeCollection::new(),
		})
	}

	/// Sets the text content, HTML-escaped on render.
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.text = text.into();
		self
	}

	/// Returns the tag name.
	pub fn name(&self) -> &str {
		&self.name
	}
}

impl HasAttributes for Tag {
	fn attributes(&self) -> &AttributeCollection {
		&self.attributes
	}

	fn attributes_mut(&mut self) -> &mut AttributeCollection {
		&mut self.attributes
	}
}

impl Render for Tag {
	fn render(&self, _ctx: &RenderContext) -> String {
		OpeningTag::new(&self.name)
			.render_element(&self.attributes, &html_escape::encode_text(&self.text))
	}
}
