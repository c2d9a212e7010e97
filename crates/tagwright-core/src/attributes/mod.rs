//! Attribute storage and rendering.
//!
//! - [`AttributeName`] / [`AttributeEntry`]: the atomic unit
//! - [`ClassList`]: deduplicated class tokens, rendered sorted
//! - [`CoreAttribute`]: element-identity attributes with a fixed position
//! - [`AttributeCollection`]: everything an element carries, rendered in a
//!   deterministic order

mod class_list;
mod collection;
mod core_attribute;
mod entry;

pub use class_list::ClassList;
pub use collection::AttributeCollection;
pub use core_attribute::CoreAttribute;
pub use entry::{AttributeEntry, AttributeName, IntoAttributeName};
