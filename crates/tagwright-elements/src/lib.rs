//! # tagwright-elements
//!
//! Concrete HTML elements rendered through a shared opening-tag template.
//!
//! Every element owns an [`AttributeCollection`](tagwright_core::AttributeCollection)
//! and picks up the fluent modifiers from
//! [`AttributeModifiers`](tagwright_core::AttributeModifiers). Rendering
//! takes a [`RenderContext`] carrying the site settings the element needs.
//!
//! ## Elements
//!
//! - [`Tag`]: any element by name, no core attributes
//! - [`Button`]: `<button type="...">` with `btn` classes
//! - [`TextField`]: void `<input>` with `form-control` classes
//! - [`MetaLink`]: void `<link href="..." rel="...">`
//!
//! ## Example
//!
//! ```
//! use tagwright_elements::prelude::*;
//!
//! let ctx = RenderContext::default();
//! let html = Tag::new("section")
//!     .classes(["b", "a"])
//!     .aria(AriaAttribute::Label, "Intro")
//!     .data("Step", "1")
//!     .render(&ctx);
//!
//! assert_eq!(
//!     html,
//!     "<section aria-label=\"Intro\" data-step=\"1\" class=\"a b\"></section>"
//! );
//! ```

pub mod button;
pub mod context;
pub mod error;
pub mod highlighter;
pub mod meta_link;
pub mod render;
pub mod tag;
pub mod text_field;
pub mod variant;

pub use button::{Button, ButtonType};
pub use context::{RenderContext, SiteConfig};
pub use error::{ElementError, Result};
pub use highlighter::HighlighterTheme;
pub use meta_link::MetaLink;
pub use render::{OpeningTag, Render};
pub use tag::Tag;
pub use text_field::{TextField, TextType};
pub use variant::{ControlSize, Variant};

/// Common imports, including the core prelude.
pub mod prelude {
	pub use crate::button::{Button, ButtonType};
	pub use crate::context::{RenderContext, SiteConfig};
	pub use crate::highlighter::HighlighterTheme;
	pub use crate::meta_link::MetaLink;
	pub use crate::render::Render;
	pub use crate::tag::Tag;
	pub use crate::text_field::{TextField, TextType};
	pub use crate::variant::{ControlSize, Variant};
	pub use tagwright_core::prelude::*;
}
