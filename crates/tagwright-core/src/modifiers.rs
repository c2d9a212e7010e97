//! Fluent attribute API shared by every element.
//!
//! Any type that exposes its [`AttributeCollection`] through [`HasAttributes`]
//! gets the chaining methods of [`AttributeModifiers`] for free. Each method
//! consumes the element and returns it, so an element under construction is
//! never aliased.
//!
//! ## Example
//!
//! ```
//! use tagwright_core::{AriaAttribute, AttributeCollection, AttributeModifiers, HasAttributes};
//!
//! #[derive(Default)]
//! struct Probe(AttributeCollection);
//!
//! impl HasAttributes for Probe {
//!     fn attributes(&self) -> &AttributeCollection { &self.0 }
//!     fn attributes_mut(&mut self) -> &mut AttributeCollection { &mut self.0 }
//! }
//!
//! let probe = Probe::default()
//!     .class("card")
//!     .aria(AriaAttribute::Label, "Profile")
//!     .boolean_attribute("hidden");
//! assert_eq!(
//!     probe.attributes().render(&[], &[]),
//!     "aria-label=\"Profile\" hidden class=\"card\""
//! );
//! ```

use crate::aria::AriaAttribute;
use crate::attributes::{AttributeCollection, AttributeName, IntoAttributeName};
use crate::boolean::BooleanAttribute;
use crate::error::Result;
use crate::event::Action;
use crate::style::StyleDeclaration;

/// Access to an element's attribute collection.
pub trait HasAttributes {
	/// Returns the collection.
	fn attributes(&self) -> &AttributeCollection;

	/// Returns the collection mutably.
	fn attributes_mut(&mut self) -> &mut AttributeCollection;
}

/// Chaining attribute methods, implemented for every [`HasAttributes`] type.
pub trait AttributeModifiers: HasAttributes + Sized {
	/// Adds class tokens (whitespace-separated).
	///
	/// Multiple calls accumulate; duplicates collapse and the rendered list
	/// is always sorted.
	fn class(mut self, class: &str) -> Self {
		self.attributes_mut().add_class(class);
		self
	}

	/// Adds several class tokens.
	fn classes<I>(mut self, classes: I) -> Self
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		self.attributes_mut().add_classes(classes);
		self
	}

	/// Adds class tokens when `condition` holds.
	fn class_if(mut self, condition: bool, class: &str) -> Self {
		self.attributes_mut().add_class_if(condition, class);
		self
	}

	/// Sets the `id` attribute.
	fn id(self, id: impl Into<String>) -> Self {
		self.custom_attribute("id", id)
	}

	/// Sets the `role` attribute.
	fn role(self, role: impl Into<String>) -> Self {
		self.custom_attribute("role", role)
	}

	/// Sets the `hidden` boolean attribute.
	fn hidden(self, hidden: bool) -> Self {
		self.boolean_attribute_if(BooleanAttribute::Hidden, hidden)
	}

	/// Sets a valued attribute, replacing any earlier value.
	fn custom_attribute<N: IntoAttributeName>(self, name: N, value: impl Into<String>) -> Self {
		self.custom_attribute_if(name, value, true)
	}

	/// Sets a valued attribute that is only rendered when `enabled`.
	fn custom_attribute_if<N: IntoAttributeName>(
		mut self,
		name: N,
		value: impl Into<String>,
		enabled: bool,
	) -> Self {
		self.attributes_mut()
			.set_custom(name.into_attribute_name(), Some(value.into()), enabled);
		self
	}

	/// Sets a valued attribute whose name is only known at runtime.
	///
	/// # Errors
	///
	/// Returns an error when `name` is not a valid attribute name.
	fn try_custom_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
		let name = AttributeName::new(name.into())?;
		self.attributes_mut().set_custom(name, Some(value.into()), true);
		Ok(self)
	}

	/// Sets a boolean attribute, rendered as the bare name.
	fn boolean_attribute<N: IntoAttributeName>(self, name: N) -> Self {
		self.boolean_attribute_if(name, true)
	}

	/// Sets a boolean attribute that is only rendered when `enabled`.
	fn boolean_attribute_if<N: IntoAttributeName>(mut self, name: N, enabled: bool) -> Self {
		self.attributes_mut()
			.set_boolean(name.into_attribute_name(), enabled);
		self
	}

	/// Sets `aria-<name>`.
	fn aria(mut self, aria: AriaAttribute, value: impl Into<String>) -> Self {
		self.attributes_mut().set_aria(aria, value);
		self
	}

	/// Sets `data-<key>` (key lowercased).
	fn data<N: IntoAttributeName>(mut self, key: N, value: impl Into<String>) -> Self {
		self.attributes_mut()
			.set_data(&key.into_attribute_name(), value);
		self
	}

	/// Binds `actions` to the event attribute `event`.
	///
	/// Actions run in the order given. Adding the same event again replaces
	/// the earlier binding.
	fn add_event<N, I>(mut self, event: N, actions: I) -> Self
	where
		N: IntoAttributeName,
		I: IntoIterator,
		I::Item: Action,
	{
		self.attributes_mut()
			.add_event(event.into_attribute_name(), actions);
		self
	}

	/// Adds inline style declarations. Multiple calls accumulate.
	fn style<I>(mut self, declarations: I) -> Self
	where
		I: IntoIterator<Item = StyleDeclaration>,
	{
		self.attributes_mut().set_styles(declarations);
		self
	}

	/// Removes an attribute entry entirely.
	fn remove_attribute(mut self, name: &str) -> Self {
		self.attributes_mut().remove(name);
		self
	}

	/// Folds attributes produced elsewhere (a theme, a wrapper) into this element.
	fn merge_attributes(mut self, other: AttributeCollection) -> Self {
		self.attributes_mut().merge(other);
		self
	}
}

impl<T: HasAttributes> AttributeModifiers for T {}
