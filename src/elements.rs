//! Concrete elements and the opening-tag renderer.
//!
//! # Examples
//!
//! ```
//! use tagwright::elements::{Render, RenderContext, TextField};
//!
//! let html = TextField::new(Some("Email")).render(&RenderContext::default());
//! assert_eq!(html, "<input placeholder=\"Email\" type=\"text\" class=\"form-control\" />");
//! ```

pub use tagwright_elements::*;
