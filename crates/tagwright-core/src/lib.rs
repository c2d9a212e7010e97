//! # tagwright-core
//!
//! Attribute collection and canonical rendering for HTML elements.
//!
//! An element's attributes arrive from many places: classes, key/value
//! attributes, boolean flags, inline styles, ARIA and data attributes and
//! inline event handlers. This crate gathers them in an
//! [`AttributeCollection`] and renders them in one deterministic order, no
//! matter in which order they were added.
//!
//! ## Rendering order
//!
//! 1. Core attributes, in the order the element declares them
//! 2. All other enabled attributes, sorted by name
//! 3. `class`, always last
//!
//! ## Example
//!
//! ```
//! use tagwright_core::prelude::*;
//!
//! let mut attributes = AttributeCollection::new();
//! attributes.add_classes(["foo", "bar"]);
//! attributes.set_aria(AriaAttribute::SetSize, "3");
//! attributes.set_styles([
//!     StyleDeclaration::new(Property::ZIndex, "1"),
//!     StyleDeclaration::new(Property::AccentColor, "red"),
//! ]);
//!
//! assert_eq!(
//!     attributes.render(&[], &[]),
//!     "aria-setsize=\"3\" style=\"accent-color: red; z-index: 1\" class=\"bar foo\""
//! );
//! ```

pub mod aria;
pub mod attributes;
pub mod boolean;
pub mod error;
pub mod event;
pub mod modifiers;
pub mod style;

pub use aria::AriaAttribute;
pub use attributes::{
	AttributeCollection, AttributeEntry, AttributeName, ClassList, CoreAttribute,
	IntoAttributeName,
};
pub use boolean::BooleanAttribute;
pub use error::{AttributeError, Result};
pub use event::{Action, Event};
pub use modifiers::{AttributeModifiers, HasAttributes};
pub use style::{InlineStyle, Property, StyleDeclaration};

/// Common imports.
pub mod prelude {
	pub use crate::aria::AriaAttribute;
	pub use crate::attributes::{AttributeCollection, AttributeName, CoreAttribute};
	pub use crate::boolean::BooleanAttribute;
	pub use crate::event::{
		Action, CustomAction, Event, HideElement, ShowAlert, ShowElement, ToggleElement,
	};
	pub use crate::modifiers::{AttributeModifiers, HasAttributes};
	pub use crate::style::{Property, StyleDeclaration};
}
