//! The keyed attribute store of one element.
//!
//! ## Ordering
//!
//! Rendering produces, separated by single spaces:
//!
//! 1. the element's leading core attributes, in the order given;
//! 2. every enabled entry, sorted by name (`style` sorts like any other name);
//! 3. the element's trailing core attributes;
//! 4. `class`, always last.
//!
//! An entry named like a core attribute takes over that core slot: enabled,
//! its value is rendered there; disabled, the attribute is left out. A name
//! never appears twice.
//!
//! Entries are kept in a [`BTreeMap`], so the sorted pass is just iteration
//! and insertion order never leaks into the output.

use std::collections::BTreeMap;

use super::class_list::ClassList;
use super::core_attribute::CoreAttribute;
use super::entry::{AttributeEntry, AttributeName};
use crate::aria::AriaAttribute;
use crate::event::{Action, compile_actions};
use crate::style::{InlineStyle, StyleDeclaration};

const CLASS: &str = "class";
const STYLE: &str = "style";

/// Attributes, classes and inline styles accumulated on an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeCollection {
	entries: BTreeMap<AttributeName, AttributeEntry>,
	classes: ClassList,
	styles: InlineStyle,
}

impl AttributeCollection {
	/// Creates an empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds one class token (or several, whitespace-separated).
	pub fn add_class(&mut self, class: &str) {
		self.classes.insert(class);
	}

	/// Adds several class tokens.
	pub fn add_classes<I>(&mut self, classes: I)
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		self.classes.extend(classes);
	}

	/// Adds `class` only when `condition` holds.
	pub fn add_class_if(&mut self, condition: bool, class: &str) {
		if condition {
			self.add_class(class);
		}
	}

	/// Removes a class token.
	pub fn remove_class(&mut self, class: &str) -> bool {
		self.classes.remove(class)
	}

	/// Inserts or replaces an entry.
	///
	/// An entry named `class` feeds its tokens into the class list instead; a
	/// disabled one clears the list. A disabled `style` entry clears the
	/// accumulated declarations. Everything else is last write wins,
	/// including the enabled flag, so a later enabled write re-enables a
	/// previously disabled name.
	pub fn insert(&mut self, entry: AttributeEntry) {
		if entry.name().as_str() == CLASS {
			match (entry.is_enabled(), entry.value()) {
				(true, Some(value)) => self.classes.insert(value),
				(true, None) => {}
				(false, _) => self.classes.clear(),
			}
			return;
		}
		if entry.name().as_str() == STYLE && !entry.is_enabled() {
			self.styles.clear();
		}
		if let Some(previous) = self.entries.insert(entry.name().clone(), entry) {
			tracing::debug!(
				name = %previous.name(),
				was_enabled = previous.is_enabled(),
				"attribute replaced"
			);
		}
	}

	/// Sets a custom attribute; `value == None` makes it boolean.
	pub fn set_custom(&mut self, name: AttributeName, value: Option<String>, enabled: bool) {
		let entry = match value {
			Some(value) => AttributeEntry::valued(name, value),
			None => AttributeEntry::boolean(name),
		};
		self.insert(entry.enabled(enabled));
	}

	/// Sets a boolean attribute.
	pub fn set_boolean(&mut self, name: AttributeName, enabled: bool) {
		self.set_custom(name, None, enabled);
	}

	/// Sets `aria-<name>`.
	pub fn set_aria(&mut self, aria: AriaAttribute, value: impl Into<String>) {
		self.set_custom(aria.attribute_name(), Some(value.into()), true);
	}

	/// Sets `data-<key>`, lowercasing the key.
	pub fn set_data(&mut self, key: &AttributeName, value: impl Into<String>) {
		self.set_custom(key.prefixed_lowercase("data-"), Some(value.into()), true);
	}

	/// Compiles `actions` into an attribute named `event`.
	///
	/// Supplying no actions leaves the collection untouched.
	pub fn add_event<I>(&mut self, event: AttributeName, actions: I)
	where
		I: IntoIterator,
		I::Item: Action,
	{
		let compiled = compile_actions(actions);
		if compiled.is_empty() {
			return;
		}
		self.set_custom(event, Some(compiled), true);
	}

	/// Adds one style declaration, replacing an earlier one for the same property.
	pub fn set_style(&mut self, declaration: StyleDeclaration) {
		self.styles.insert(declaration);
	}

	/// Adds several style declarations. Repeated calls accumulate.
	pub fn set_styles<I>(&mut self, declarations: I)
	where
		I: IntoIterator<Item = StyleDeclaration>,
	{
		self.styles.extend(declarations);
	}

	/// Deletes the entry named `name`, returning it.
	///
	/// Removing `class` empties the class list and removing `style` drops the
	/// style declarations as well as any raw `style` entry.
	pub fn remove(&mut self, name: &str) -> Option<AttributeEntry> {
		match name {
			CLASS => self.classes.clear(),
			STYLE => self.styles.clear(),
			_ => {}
		}
		self.entries.remove(name)
	}

	/// Folds `other` into `self`.
	///
	/// Classes are unioned; entries and style declarations from `other` win
	/// over same-named ones in `self`.
	pub fn merge(&mut self, other: AttributeCollection) {
		let AttributeCollection {
			entries,
			classes,
			styles,
		} = other;
		for entry in entries.into_values() {
			self.insert(entry);
		}
		self.classes.union(classes);
		self.styles.merge(styles);
	}

	/// Returns the entry named `name`, enabled or not.
	pub fn get(&self, name: &str) -> Option<&AttributeEntry> {
		self.entries.get(name)
	}

	/// Returns whether an enabled entry named `name` exists.
	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some_and(AttributeEntry::is_enabled)
	}

	/// Returns the class list.
	pub fn classes(&self) -> &ClassList {
		&self.classes
	}

	/// Returns the accumulated inline style.
	pub fn styles(&self) -> &InlineStyle {
		&self.styles
	}

	/// Returns `true` when rendering would produce no attribute text.
	pub fn is_empty(&self) -> bool {
		self.classes.is_empty()
			&& self.styles.is_empty()
			&& self.entries.values().all(|entry| !entry.is_enabled())
	}

	/// Renders the enabled entries in name order, `class` excluded.
	///
	/// Inline style declarations, when present, take the place of any raw
	/// `style` entry at `style`'s sorted position.
	pub fn sorted_attributes(&self) -> Vec<String> {
		self.sorted_excluding(&[])
	}

	fn sorted_excluding(&self, reserved: &[&str]) -> Vec<String> {
		let style = self.styles.render();
		let style_name = AttributeName::from_static(STYLE);
		let mut rendered = Vec::with_capacity(self.entries.len() + 1);
		let mut style_pending = style.is_some();

		for (name, entry) in &self.entries {
			if style_pending && name > &style_name {
				rendered.extend(style.as_ref().map(|value| format!("{STYLE}=\"{value}\"")));
				style_pending = false;
			}
			if (style.is_some() && name.as_str() == STYLE) || reserved.contains(&name.as_str()) {
				continue;
			}
			match entry.render() {
				Some(text) => rendered.push(text),
				None => tracing::debug!(name = %name, "skipping disabled attribute"),
			}
		}
		if style_pending {
			rendered.extend(style.map(|value| format!("{STYLE}=\"{value}\"")));
		}
		rendered
	}

	/// Renders the `class` attribute, or `None` without classes.
	pub fn class_attribute(&self) -> Option<String> {
		self.classes.render()
	}

	/// Renders the complete attribute text.
	///
	/// `leading` core attributes come first and `trailing` ones right before
	/// `class`, each in the given order, with the sorted entries in between.
	/// Parts are joined by one space; an empty result means there is nothing
	/// to render.
	///
	/// # Example
	///
	/// ```
	/// use tagwright_core::{AttributeCollection, AttributeName, CoreAttribute};
	///
	/// let mut attributes = AttributeCollection::new();
	/// attributes.add_class("btn");
	/// attributes.set_boolean(AttributeName::from_static("disabled"), true);
	///
	/// let leading = [CoreAttribute::Type("button".into())];
	/// assert_eq!(
	///     attributes.render(&leading, &[]),
	///     "type=\"button\" disabled class=\"btn\""
	/// );
	/// ```
	pub fn render(&self, leading: &[CoreAttribute], trailing: &[CoreAttribute]) -> String {
		let reserved: Vec<&str> = leading
			.iter()
			.chain(trailing)
			.map(CoreAttribute::name)
			.collect();

		leading
			.iter()
			.filter_map(|core| self.core_slot(core))
			.chain(self.sorted_excluding(&reserved))
			.chain(trailing.iter().filter_map(|core| self.core_slot(core)))
			.chain(self.class_attribute())
			.collect::<Vec<_>>()
			.join(" ")
	}

	// A same-named entry overrides the element's value, or removes it when disabled.
	fn core_slot(&self, core: &CoreAttribute) -> Option<String> {
		match self.entries.get(core.name()) {
			Some(entry) => entry.render(),
			None => Some(core.render()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::event::ShowAlert;
	use crate::style::Property;
	use rstest::rstest;

	fn name(name: &'static str) -> AttributeName {
		AttributeName::from_static(name)
	}

	#[rstest]
	fn test_empty_renders_nothing() {
		let attributes = AttributeCollection::new();
		assert!(attributes.is_empty());
		assert_eq!(attributes.render(&[], &[]), "");
	}

	#[rstest]
	fn test_custom_attributes_sorted() {
		let mut attributes = AttributeCollection::new();
		for key in ["qux", "baz", "foo", "bar"] {
			attributes.set_custom(name(key), Some(key.to_string()), true);
		}
		assert_eq!(
			attributes.render(&[], &[]),
			"bar=\"bar\" baz=\"baz\" foo=\"foo\" qux=\"qux\""
		);
	}

	#[rstest]
	fn test_last_write_wins() {
		let mut attributes = AttributeCollection::new();
		attributes.set_custom(name("title"), Some("first".into()), true);
		attributes.set_custom(name("title"), Some("second".into()), true);
		assert_eq!(attributes.render(&[], &[]), "title=\"second\"");
	}

	#[rstest]
	fn test_disabled_leaves_no_residue() {
		let mut attributes = AttributeCollection::new();
		attributes.set_custom(name("a"), Some("1".into()), true);
		attributes.set_boolean(name("b"), false);
		attributes.set_custom(name("c"), Some("3".into()), true);
		assert_eq!(attributes.render(&[], &[]), "a=\"1\" c=\"3\"");
	}

	#[rstest]
	fn test_only_disabled_is_empty() {
		let mut attributes = AttributeCollection::new();
		attributes.set_boolean(name("disabled"), false);
		assert!(attributes.is_empty());
		assert!(!attributes.contains("disabled"));
		assert!(attributes.get("disabled").is_some());
		assert_eq!(attributes.render(&[], &[]), "");
	}

	#[rstest]
	fn test_reenable_after_disable() {
		let mut attributes = AttributeCollection::new();
		attributes.set_boolean(name("required"), false);
		attributes.set_boolean(name("required"), true);
		assert_eq!(attributes.render(&[], &[]), "required");
	}

	#[rstest]
	fn test_class_always_last() {
		let mut attributes = AttributeCollection::new();
		attributes.add_classes(["foo", "bar"]);
		attributes.set_custom(name("zzz"), Some("1".into()), true);
		attributes.set_custom(name("aaa"), Some("2".into()), true);
		assert_eq!(
			attributes.render(&[], &[]),
			"aaa=\"2\" zzz=\"1\" class=\"bar foo\""
		);
	}

	#[rstest]
	fn test_class_entry_feeds_class_list() {
		let mut attributes = AttributeCollection::new();
		attributes.add_class("btn");
		attributes.set_custom(name("class"), Some("lead btn".into()), true);
		assert!(attributes.get("class").is_none());
		assert_eq!(attributes.render(&[], &[]), "class=\"btn lead\"");
	}

	#[rstest]
	fn test_disabled_class_clears_tokens() {
		let mut attributes = AttributeCollection::new();
		attributes.add_classes(["a", "b"]);
		attributes.set_custom(name("class"), Some("c".into()), false);
		assert!(attributes.is_empty());
		assert_eq!(attributes.render(&[], &[]), "");

		attributes.add_class("d");
		assert_eq!(attributes.render(&[], &[]), "class=\"d\"");
	}

	#[rstest]
	fn test_remove_class_clears_tokens() {
		let mut attributes = AttributeCollection::new();
		attributes.add_class("a");
		attributes.set_boolean(name("hidden"), true);
		attributes.remove("class");
		assert_eq!(attributes.render(&[], &[]), "hidden");
	}

	#[rstest]
	fn test_disabled_style_suppresses_declarations() {
		let mut attributes = AttributeCollection::new();
		attributes.set_style(StyleDeclaration::new(Property::Color, "red"));
		attributes.set_custom(name("style"), Some("x".into()), false);
		assert!(attributes.styles().is_empty());
		assert_eq!(attributes.render(&[], &[]), "");
	}

	#[rstest]
	fn test_remove_style_drops_declarations() {
		let mut attributes = AttributeCollection::new();
		attributes.set_custom(name("style"), Some("color: blue".into()), true);
		attributes.set_style(StyleDeclaration::new(Property::Color, "red"));
		attributes.remove("style");
		assert!(attributes.is_empty());
		assert_eq!(attributes.render(&[], &[]), "");
	}

	#[rstest]
	#[case(true, "type=\"submit\" alpha class=\"btn\"")]
	#[case(false, "alpha class=\"btn\"")]
	fn test_entry_takes_over_leading_core_slot(#[case] enabled: bool, #[case] expected: &str) {
		let mut attributes = AttributeCollection::new();
		attributes.add_class("btn");
		attributes.set_boolean(name("alpha"), true);
		attributes.set_custom(name("type"), Some("submit".into()), enabled);
		let leading = [CoreAttribute::Type("button".into())];
		assert_eq!(attributes.render(&leading, &[]), expected);
	}

	#[rstest]
	fn test_entry_takes_over_trailing_core_slot() {
		let mut attributes = AttributeCollection::new();
		attributes.set_boolean(name("required"), true);
		attributes.set_boolean(name("zzz"), true);
		attributes.set_custom(name("type"), Some("email".into()), true);
		let trailing = [CoreAttribute::Type("text".into())];
		assert_eq!(
			attributes.render(&[], &trailing),
			"required zzz type=\"email\""
		);
	}

	#[rstest]
	fn test_add_class_if() {
		let mut attributes = AttributeCollection::new();
		attributes.add_class_if(false, "hidden");
		attributes.add_class_if(true, "shown");
		assert_eq!(attributes.render(&[], &[]), "class=\"shown\"");
	}

	#[rstest]
	fn test_core_attributes_lead() {
		let mut attributes = AttributeCollection::new();
		attributes.set_custom(name("alpha"), Some("a".into()), true);
		let core = [CoreAttribute::Type("button".into()), CoreAttribute::Name("go".into())];
		assert_eq!(
			attributes.render(&core, &[]),
			"type=\"button\" name=\"go\" alpha=\"a\""
		);
	}

	#[rstest]
	fn test_style_sorts_among_entries() {
		let mut attributes = AttributeCollection::new();
		attributes.set_custom(name("title"), Some("t".into()), true);
		attributes.set_custom(name("id"), Some("x".into()), true);
		attributes.set_style(StyleDeclaration::new(Property::Color, "red"));
		assert_eq!(
			attributes.render(&[], &[]),
			"id=\"x\" style=\"color: red\" title=\"t\""
		);
	}

	#[rstest]
	fn test_style_after_all_entries() {
		let mut attributes = AttributeCollection::new();
		attributes.set_custom(name("id"), Some("x".into()), true);
		attributes.set_style(StyleDeclaration::new(Property::Color, "red"));
		assert_eq!(attributes.render(&[], &[]), "id=\"x\" style=\"color: red\"");
	}

	#[rstest]
	fn test_style_calls_accumulate() {
		let mut attributes = AttributeCollection::new();
		attributes.set_styles([StyleDeclaration::new(Property::ZIndex, "1")]);
		attributes.set_styles([
			StyleDeclaration::new(Property::AccentColor, "red"),
			StyleDeclaration::new(Property::Cursor, "pointer"),
		]);
		assert_eq!(
			attributes.render(&[], &[]),
			"style=\"accent-color: red; cursor: pointer; z-index: 1\""
		);
	}

	#[rstest]
	fn test_declarations_replace_raw_style() {
		let mut attributes = AttributeCollection::new();
		attributes.set_custom(name("style"), Some("color: blue".into()), true);
		assert_eq!(attributes.render(&[], &[]), "style=\"color: blue\"");

		attributes.set_style(StyleDeclaration::new(Property::Color, "red"));
		assert_eq!(attributes.render(&[], &[]), "style=\"color: red\"");
	}

	#[rstest]
	fn test_aria_and_data() {
		let mut attributes = AttributeCollection::new();
		attributes.set_aria(AriaAttribute::SetSize, "foo");
		attributes.set_data(&name("Key"), "v");
		assert_eq!(
			attributes.render(&[], &[]),
			"aria-setsize=\"foo\" data-key=\"v\""
		);
	}

	#[rstest]
	fn test_events_sorted_by_name() {
		let mut attributes = AttributeCollection::new();
		for event in ["bar", "baz", "qux", "foo"] {
			attributes.add_event(name(event), [ShowAlert::new(event)]);
		}
		assert_eq!(
			attributes.render(&[], &[]),
			"bar=\"alert('bar')\" baz=\"alert('baz')\" foo=\"alert('foo')\" qux=\"alert('qux')\""
		);
	}

	#[rstest]
	fn test_event_without_actions_is_noop() {
		let mut attributes = AttributeCollection::new();
		attributes.add_event(name("onclick"), Vec::<ShowAlert>::new());
		assert!(attributes.is_empty());
	}

	#[rstest]
	fn test_remove() {
		let mut attributes = AttributeCollection::new();
		attributes.set_boolean(name("hidden"), true);
		assert!(attributes.remove("hidden").is_some());
		assert!(attributes.remove("hidden").is_none());
		assert_eq!(attributes.render(&[], &[]), "");
	}

	#[rstest]
	fn test_merge() {
		let mut base = AttributeCollection::new();
		base.add_class("btn");
		base.set_custom(name("title"), Some("base".into()), true);
		base.set_style(StyleDeclaration::new(Property::Color, "red"));

		let mut theme = AttributeCollection::new();
		theme.add_classes(["btn", "btn-dark"]);
		theme.set_custom(name("title"), Some("theme".into()), true);
		theme.set_style(StyleDeclaration::new(Property::Color, "white"));
		theme.set_style(StyleDeclaration::new(Property::Opacity, "0.9"));

		base.merge(theme);
		assert_eq!(
			base.render(&[], &[]),
			"style=\"color: white; opacity: 0.9\" title=\"theme\" class=\"btn btn-dark\""
		);
	}
}
