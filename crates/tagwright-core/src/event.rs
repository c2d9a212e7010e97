//! Inline event bindings.
//!
//! An event is an attribute named after the event whose value is one or more
//! compiled [`Action`]s. Actions keep the order they were supplied in; only
//! the event attributes themselves are sorted with the other attributes.
//!
//! ```
//! use tagwright_core::event::{compile_actions, HideElement, ShowAlert};
//!
//! let actions: Vec<Box<dyn tagwright_core::Action>> = vec![
//!     Box::new(ShowAlert::new("Saved")),
//!     Box::new(HideElement::new("spinner")),
//! ];
//! assert_eq!(
//!     compile_actions(&actions),
//!     "alert('Saved'); document.getElementById('spinner').classList.add('d-none')"
//! );
//! ```

use std::fmt;

use crate::attributes::{AttributeName, IntoAttributeName};

/// Something that compiles to an inline JavaScript statement.
pub trait Action {
	/// Returns the statement text.
	fn compile(&self) -> String;
}

impl<A: Action + ?Sized> Action for Box<A> {
	fn compile(&self) -> String {
		(**self).compile()
	}
}

impl<A: Action + ?Sized> Action for &A {
	fn compile(&self) -> String {
		(**self).compile()
	}
}

/// Compiles `actions` in order and joins them with `"; "`.
pub fn compile_actions<I>(actions: I) -> String
where
	I: IntoIterator,
	I::Item: Action,
{
	actions
		.into_iter()
		.map(|action| action.compile())
		.collect::<Vec<_>>()
		.join("; ")
}

/// Shows a browser alert with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowAlert {
	message: String,
}

impl ShowAlert {
	/// Creates the action.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}

impl Action for ShowAlert {
	fn compile(&self) -> String {
		format!("alert('{}')", js_string(&self.message))
	}
}

// Visibility is toggled through the `d-none` utility class.
fn class_list_call(id: &str, method: &str) -> String {
	format!(
		"document.getElementById('{}').classList.{method}('d-none')",
		js_string(id)
	)
}

/// Reveals the element with the given id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowElement {
	id: String,
}

impl ShowElement {
	/// Creates the action.
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: id.into() }
	}
}

impl Action for ShowElement {
	fn compile(&self) -> String {
		class_list_call(&self.id, "remove")
	}
}

/// Hides the element with the given id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HideElement {
	id: String,
}

impl HideElement {
	/// Creates the action.
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: id.into() }
	}
}

impl Action for HideElement {
	fn compile(&self) -> String {
		class_list_call(&self.id, "add")
	}
}

/// Flips the visibility of the element with the given id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleElement {
	id: String,
}

impl ToggleElement {
	/// Creates the action.
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: id.into() }
	}
}

impl Action for ToggleElement {
	fn compile(&self) -> String {
		class_list_call(&self.id, "toggle")
	}
}

/// Arbitrary code, emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomAction {
	code: String,
}

impl CustomAction {
	/// Creates the action.
	pub fn new(code: impl Into<String>) -> Self {
		Self { code: code.into() }
	}
}

impl Action for CustomAction {
	fn compile(&self) -> String {
		self.code.clone()
	}
}

/// Escapes text for a single-quoted JavaScript string literal.
fn js_string(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'\\' => escaped.push_str("\\\\"),
			'\'' => escaped.push_str("\\'"),
			'\n' => escaped.push_str("\\n"),
			'\r' => escaped.push_str("\\r"),
			_ => escaped.push(c),
		}
	}
	escaped
}

/// Well-known inline event handler attributes.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
	/// `onblur`
	Blur,
	/// `onchange`
	Change,
	/// `onclick`
	Click,
	/// `onfocus`
	Focus,
	/// `oninput`
	Input,
	/// `onkeydown`
	KeyDown,
	/// `onkeyup`
	KeyUp,
	/// `onload`
	Load,
	/// `onmouseout`
	MouseOut,
	/// `onmouseover`
	MouseOver,
	/// `onsubmit`
	Submit,
}

impl Event {
	/// Attribute name of the handler.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Blur => "onblur",
			Self::Change => "onchange",
			Self::Click => "onclick",
			Self::Focus => "onfocus",
			Self::Input => "oninput",
			Self::KeyDown => "onkeydown",
			Self::KeyUp => "onkeyup",
			Self::Load => "onload",
			Self::MouseOut => "onmouseout",
			Self::MouseOver => "onmouseover",
			Self::Submit => "onsubmit",
		}
	}
}

impl fmt::Display for Event {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl IntoAttributeName for Event {
	fn into_attribute_name(self) -> AttributeName {
		AttributeName::from_static(self.as_str())
	}
}
