//! # tagwright
//!
//! Deterministic HTML attribute collection and opening-tag rendering.
//!
//! Attributes added in any order, from any source (classes, custom and
//! boolean attributes, inline styles, ARIA, data and event handlers), render
//! in one canonical order so that identical elements always produce
//! byte-identical markup.
//!
//! ## Feature Flags
//!
//! - `core` - Attribute collection and the style and event serializers
//! - `elements` (default) - Opening-tag renderer, `Tag`, `Button`,
//!   `TextField`, `MetaLink` and site configuration
//!
//! ## Quick Example
//!
//! ```
//! use tagwright::prelude::*;
//!
//! let html = Button::new("Send")
//!     .button_type(ButtonType::Submit)
//!     .variant(Variant::Primary)
//!     .add_event(Event::Click, [ShowAlert::new("Sent")])
//!     .render(&RenderContext::default());
//!
//! assert_eq!(
//!     html,
//!     "<button type=\"submit\" onclick=\"alert('Sent')\" class=\"btn btn-primary\">Send</button>"
//! );
//! ```

#[cfg(feature = "core")]
pub mod attributes;
#[cfg(feature = "elements")]
pub mod elements;

// Re-export the attribute engine
#[cfg(feature = "core")]
pub use tagwright_core::{
	AriaAttribute, AttributeCollection, AttributeError, AttributeModifiers, AttributeName,
	BooleanAttribute, CoreAttribute, Event, HasAttributes, Property, StyleDeclaration,
};

// Re-export elements
#[cfg(feature = "elements")]
pub use tagwright_elements::{
	Button, ButtonType, ElementError, HighlighterTheme, MetaLink, Render, RenderContext,
	SiteConfig, Tag, TextField, TextType,
};

/// Common imports.
pub mod prelude {
	#[cfg(all(feature = "core", not(feature = "elements")))]
	pub use tagwright_core::prelude::*;

	#[cfg(feature = "elements")]
	pub use tagwright_elements::prelude::*;
}
