//! `<link>` elements for the document head.

use std::borrow::Cow;

use tagwright_core::{AttributeCollection, AttributeModifiers, CoreAttribute, HasAttributes};

use crate::context::RenderContext;
use crate::highlighter::HighlighterTheme;
use crate::render::{OpeningTag, Render};

/// A `<link href="..." rel="..." />` element.
///
/// `href` and `rel` are core attributes and always come first, in that
/// order. Root-relative hrefs are prefixed with the context's base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaLink {
	href: Cow<'static, str>,
	rel: Cow<'static, str>,
	attributes: AttributeCollection,
}

impl MetaLink {
	/// Creates a link.
	pub fn new(href: impl Into<Cow<'static, str>>, rel: impl Into<Cow<'static, str>>) -> Self {
		Self {
			href: href.into(),
			rel: rel.into(),
			attributes: AttributeCollection::new(),
		}
	}

	/// Creates a `rel="stylesheet"` link.
	pub fn stylesheet(href: impl Into<Cow<'static, str>>) -> Self {
		Self::new(href, "stylesheet")
	}

	/// One stylesheet link per highlighter theme.
	///
	/// Links are sorted by theme name and duplicates are dropped. Each link
	/// carries `data-highlight-theme` so scripts can switch between them.
	///
	/// ```
	/// use tagwright_elements::{HighlighterTheme, MetaLink, Render, RenderContext};
	///
	/// let ctx = RenderContext::default();
	/// let links = MetaLink::highlighter_theme_meta_links(
	///     &[HighlighterTheme::Twilight, HighlighterTheme::GithubDark],
	///     &ctx,
	/// );
	/// assert_eq!(
	///     links[0].render(&ctx),
	///     "<link href=\"/css/prism-github-dark.css\" rel=\"stylesheet\" data-highlight-theme=\"github-dark\" />"
	/// );
	/// ```
	pub fn highlighter_theme_meta_links(
		themes: &[HighlighterTheme],
		ctx: &RenderContext,
	) -> Vec<MetaLink> {
		let mut themes = themes.to_vec();
		themes.sort_by_key(|theme| theme.as_str());
		themes.dedup();

		themes
			.into_iter()
			.map(|theme| {
				MetaLink::stylesheet(ctx.stylesheet_path(&theme.stylesheet()))
					.data("highlight-theme", theme.as_str())
			})
			.collect()
	}

	/// Returns the unresolved href.
	pub fn href(&self) -> &str {
		&self.href
	}

	/// Returns the relation.
	pub fn rel(&self) -> &str {
		&self.rel
	}
}

impl HasAttributes for MetaLink {
	fn attributes(&self) -> &AttributeCollection {
		&self.attributes
	}

	fn attributes_mut(&mut self) -> &mut AttributeCollection {
		&mut self.attributes
	}
}

impl Render for MetaLink {
	fn render(&self, ctx: &RenderContext) -> String {
		OpeningTag::new("link")
			.leading(CoreAttribute::Href(ctx.resolve(&self.href).into()))
			.leading(CoreAttribute::Rel(self.rel.clone()))
			.void()
			.render(&self.attributes)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn ctx() -> RenderContext {
		RenderContext::default()
	}

	#[rstest]
	fn test_core_attributes_first(ctx: RenderContext) {
		let html = MetaLink::new("/feed.xml", "alternate")
			.custom_attribute("type", "application/rss+xml")
			.custom_attribute("title", "Feed")
			.render(&ctx);
		assert_eq!(
			html,
			"<link href=\"/feed.xml\" rel=\"alternate\" title=\"Feed\" type=\"application/rss+xml\" />"
		);
	}

	#[rstest]
	fn test_base_path_applied() {
		let ctx = RenderContext::new().base_path("/docs");
		let html = MetaLink::stylesheet("/css/site.css").render(&ctx);
		assert_eq!(html, "<link href=\"/docs/css/site.css\" rel=\"stylesheet\" />");
	}

	#[rstest]
	fn test_external_href_untouched() {
		let ctx = RenderContext::new().base_path("/docs");
		let html = MetaLink::stylesheet("https://cdn.example.com/x.css").render(&ctx);
		assert_eq!(
			html,
			"<link href=\"https://cdn.example.com/x.css\" rel=\"stylesheet\" />"
		);
	}

	#[rstest]
	fn test_highlighter_links_deduplicated(ctx: RenderContext) {
		let links = MetaLink::highlighter_theme_meta_links(
			&[
				HighlighterTheme::Nord,
				HighlighterTheme::Dracula,
				HighlighterTheme::Nord,
			],
			&ctx,
		);
		let hrefs: Vec<&str> = links.iter().map(MetaLink::href).collect();
		assert_eq!(hrefs, ["/css/prism-dracula.css", "/css/prism-nord.css"]);
	}

	#[rstest]
	fn test_highlighter_links_empty(ctx: RenderContext) {
		assert!(MetaLink::highlighter_theme_meta_links(&[], &ctx).is_empty());
	}

	#[rstest]
	fn test_custom_href_replaces_core_href(ctx: RenderContext) {
		let html = MetaLink::stylesheet("/a.css")
			.custom_attribute("href", "/b.css")
			.render(&ctx);
		assert_eq!(html, "<link href=\"/b.css\" rel=\"stylesheet\" />");
	}
}
