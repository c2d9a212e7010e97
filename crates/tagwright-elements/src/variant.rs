//! Shared visual variants for form controls.

/// Color variant for components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
	/// Primary color (default blue)
	Primary,
	/// Secondary color (default gray)
	Secondary,
	/// Success color (default green)
	Success,
	/// Danger color (default red)
	Danger,
	/// Warning color (default yellow)
	Warning,
	/// Info color (default cyan)
	Info,
	/// Light color (default light gray)
	Light,
	/// Dark color (default dark gray)
	Dark,
	/// Rendered like a hyperlink
	Link,
}

impl Variant {
	/// Convert variant to CSS class suffix
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Primary => "primary",
			Self::Secondary => "secondary",
			Self::Success => "success",
			Self::Danger => "danger",
			Self::Warning => "warning",
			Self::Info => "info",
			Self::Light => "light",
			Self::Dark => "dark",
			Self::Link => "link",
		}
	}
}

/// Size of a form control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlSize {
	/// Small
	Small,
	/// Medium (default, adds no class)
	#[default]
	Medium,
	/// Large
	Large,
}

impl ControlSize {
	/// Class suffix, `None` for the default size
	pub fn suffix(&self) -> Option<&'static str> {
		match self {
			Self::Small => Some("sm"),
			Self::Medium => None,
			Self::Large => Some("lg"),
		}
	}
}
