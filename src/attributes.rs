//! Attribute collection, style and event serializers.
//!
//! # Examples
//!
//! ```
//! use tagwright::attributes::{AttributeCollection, BooleanAttribute, IntoAttributeName};
//!
//! let mut attributes = AttributeCollection::new();
//! attributes.set_boolean(BooleanAttribute::Required.into_attribute_name(), true);
//! attributes.add_class("field");
//! assert_eq!(attributes.render(&[], &[]), "required class=\"field\"");
//! ```

pub use tagwright_core::*;
