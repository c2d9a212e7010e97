//! Opening-tag rendering.
//!
//! An [`OpeningTag`] is the fixed template of an element type: its tag name,
//! the core attributes it places before and after the sorted block, and
//! whether it is a void element. The attribute collection fills in the rest:
//!
//! ```text
//! <tag LEADING_CORE SORTED_CUSTOM TRAILING_CORE class="...">
//! ```

use tagwright_core::{AttributeCollection, CoreAttribute};

use crate::context::RenderContext;

/// Anything that renders to HTML text.
pub trait Render {
	/// Renders the element.
	fn render(&self, ctx: &RenderContext) -> String;
}

/// Element-type template for an opening tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningTag<'a> {
	name: &'a str,
	leading: Vec<CoreAttribute>,
	trailing: Vec<CoreAttribute>,
	is_void: bool,
}

impl<'a> OpeningTag<'a> {
	/// Creates a template with no core attributes.
	pub fn new(name: &'a str) -> Self {
		Self {
			name,
			leading: Vec::new(),
			trailing: Vec::new(),
			is_void: false,
		}
	}

	/// Adds a core attribute rendered before the sorted attributes.
	pub fn leading(mut self, attribute: CoreAttribute) -> Self {
		self.leading.push(attribute);
		self
	}

	/// Adds a core attribute rendered after the sorted attributes, before `class`.
	pub fn trailing(mut self, attribute: CoreAttribute) -> Self {
		self.trailing.push(attribute);
		self
	}

	/// Marks the element as void (self-closing, no content).
	pub fn void(mut self) -> Self {
		self.is_void = true;
		self
	}

	/// Returns whether the element is void.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Renders the opening tag alone.
	///
	/// A collection entry named like one of the core attributes replaces it
	/// in place, or removes it when disabled.
	pub fn render(&self, attributes: &AttributeCollection) -> String {
		let text = attributes.render(&self.leading, &self.trailing);

		tracing::trace!(tag = self.name, attribute_bytes = text.len(), "rendering opening tag");

		let mut output = String::with_capacity(self.name.len() + text.len() + 4);
		output.push('<');
		output.push_str(self.name);
		if !text.is_empty() {
			output.push(' ');
			output.push_str(&text);
		}
		if self.is_void {
			output.push_str(" />");
		} else {
			output.push('>');
		}
		output
	}

	/// Renders the whole element; `content` is ignored for void elements.
	pub fn render_element(&self, attributes: &AttributeCollection, content: &str) -> String {
		let mut output = self.render(attributes);
		if !self.is_void {
			output.push_str(content);
			output.push_str("</");
			output.push_str(self.name);
			output.push('>');
		}
		output
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use tagwright_core::AttributeName;

	#[rstest]
	fn test_empty_element() {
		let tag = OpeningTag::new("div");
		assert_eq!(tag.render_element(&AttributeCollection::new(), ""), "<div></div>");
	}

	#[rstest]
	fn test_empty_void_element() {
		let tag = OpeningTag::new("br").void();
		assert_eq!(tag.render_element(&AttributeCollection::new(), "ignored"), "<br />");
	}

	#[rstest]
	fn test_template_positions() {
		let mut attributes = AttributeCollection::new();
		attributes.add_class("x");
		attributes.set_boolean(AttributeName::from_static("a"), true);
		attributes.set_boolean(AttributeName::from_static("z"), true);

		let tag = OpeningTag::new("input")
			.leading(CoreAttribute::Name("q".into()))
			.trailing(CoreAttribute::Type("search".into()))
			.void();

		assert_eq!(
			tag.render(&attributes),
			"<input name=\"q\" a z type=\"search\" class=\"x\" />"
		);
	}

	#[rstest]
	fn test_content_between_tags() {
		let tag = OpeningTag::new("p");
		assert_eq!(
			tag.render_element(&AttributeCollection::new(), "hello"),
			"<p>hello</p>"
		);
	}
}
