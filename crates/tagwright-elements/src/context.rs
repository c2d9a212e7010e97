//! Site configuration and the render context passed to every element.
//!
//! There is no global publishing state: whatever an element needs from the
//! site is read from the [`RenderContext`] handed to [`Render::render`].
//!
//! [`Render::render`]: crate::Render::render

use serde::Deserialize;

use crate::error::Result;
use crate::highlighter::HighlighterTheme;

/// Site settings, usually loaded from TOML.
///
/// ```
/// use tagwright_elements::{HighlighterTheme, SiteConfig};
///
/// let config = SiteConfig::from_toml_str(r#"
///     base_path = "/docs"
///     highlighter_themes = ["github-dark", "xcode-dark"]
/// "#).unwrap();
///
/// assert_eq!(config.base_path, "/docs");
/// assert_eq!(config.css_dir, "css");
/// assert_eq!(config.highlighter_themes, [HighlighterTheme::GithubDark, HighlighterTheme::XcodeDark]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Path prefix the site is served under (`""` for the domain root).
	pub base_path: String,
	/// Directory holding stylesheets, relative to the site root.
	pub css_dir: String,
	/// Syntax highlighter themes the site ships.
	pub highlighter_themes: Vec<HighlighterTheme>,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			base_path: String::new(),
			css_dir: "css".to_string(),
			highlighter_themes: Vec::new(),
		}
	}
}

impl SiteConfig {
	/// Parses a TOML document.
	///
	/// # Errors
	///
	/// Returns [`ElementError::Config`](crate::ElementError::Config) when the
	/// document is not valid TOML or has fields of the wrong type.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let config: Self = toml::from_str(source)?;
		tracing::debug!(
			base_path = %config.base_path,
			css_dir = %config.css_dir,
			themes = config.highlighter_themes.len(),
			"site config loaded"
		);
		Ok(config)
	}
}

/// Options that influence rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
	base_path: String,
	css_dir: String,
}

impl Default for RenderContext {
	fn default() -> Self {
		Self::from_config(&SiteConfig::default())
	}
}

impl RenderContext {
	/// Creates a context with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a context from site settings.
	pub fn from_config(config: &SiteConfig) -> Self {
		Self {
			base_path: normalize_base(&config.base_path),
			css_dir: config.css_dir.trim_matches('/').to_string(),
		}
	}

	/// Sets the base path.
	pub fn base_path(mut self, base_path: impl AsRef<str>) -> Self {
		self.base_path = normalize_base(base_path.as_ref());
		self
	}

	/// Sets the stylesheet directory.
	pub fn css_dir(mut self, css_dir: impl AsRef<str>) -> Self {
		self.css_dir = css_dir.as_ref().trim_matches('/').to_string();
		self
	}

	/// Site-relative path of a stylesheet, e.g. `/css/site.css`.
	pub fn stylesheet_path(&self, file: &str) -> String {
		if self.css_dir.is_empty() {
			format!("/{}", file.trim_start_matches('/'))
		} else {
			format!("/{}/{}", self.css_dir, file.trim_start_matches('/'))
		}
	}

	/// Prefixes root-relative paths with the base path.
	///
	/// Absolute URLs, protocol-relative URLs and relative paths are returned
	/// unchanged.
	pub fn resolve(&self, href: &str) -> String {
		if href.starts_with('/') && !href.starts_with("//") {
			format!("{}{}", self.base_path, href)
		} else {
			href.to_string()
		}
	}
}

// "" and "/" both mean the domain root; otherwise "/prefix" without a trailing slash.
fn normalize_base(base_path: &str) -> String {
	let trimmed = base_path.trim_matches('/');
	if trimmed.is_empty() {
		String::new()
	} else {
		format!("/{trimmed}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ElementError;
	use rstest::rstest;

	#[rstest]
	fn test_default_config() {
		let config = SiteConfig::from_toml_str("").unwrap();
		assert_eq!(config, SiteConfig::default());
	}

	#[rstest]
	fn test_invalid_config() {
		let result = SiteConfig::from_toml_str("base_path = 42");
		assert!(matches!(result, Err(ElementError::Config(_))));
	}

	#[rstest]
	fn test_unknown_theme_rejected() {
		let result = SiteConfig::from_toml_str("highlighter_themes = [\"neon\"]");
		assert!(matches!(result, Err(ElementError::Config(_))));
	}

	#[rstest]
	#[case("", "/css/site.css")]
	#[case("/", "/css/site.css")]
	#[case("docs", "/docs/css/site.css")]
	#[case("/docs/", "/docs/css/site.css")]
	fn test_resolve_with_base(#[case] base: &str, #[case] expected: &str) {
		let ctx = RenderContext::new().base_path(base);
		assert_eq!(ctx.resolve(&ctx.stylesheet_path("site.css")), expected);
	}

	#[rstest]
	#[case("https://cdn.example.com/a.css")]
	#[case("//cdn.example.com/a.css")]
	#[case("relative/a.css")]
	fn test_resolve_leaves_other_urls(#[case] href: &str) {
		let ctx = RenderContext::new().base_path("/docs");
		assert_eq!(ctx.resolve(href), href);
	}

	#[rstest]
	fn test_css_dir() {
		let ctx = RenderContext::new().css_dir("/assets/styles/");
		assert_eq!(ctx.stylesheet_path("/a.css"), "/assets/styles/a.css");
		assert_eq!(RenderContext::new().css_dir("").stylesheet_path("a.css"), "/a.css");
	}

	#[rstest]
	fn test_from_config() {
		let config = SiteConfig {
			base_path: "/blog/".into(),
			css_dir: "styles".into(),
			highlighter_themes: Vec::new(),
		};
		let ctx = RenderContext::from_config(&config);
		assert_eq!(ctx.resolve(&ctx.stylesheet_path("x.css")), "/blog/styles/x.css");
	}
}
