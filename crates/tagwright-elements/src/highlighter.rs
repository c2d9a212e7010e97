//! Syntax highlighter themes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A Prism highlighter theme shipped as `prism-<name>.css`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlighterTheme {
	/// `atom-one-dark`
	AtomOneDark,
	/// `atom-one-light`
	AtomOneLight,
	/// `dracula`
	Dracula,
	/// `github-dark`
	GithubDark,
	/// `github-light`
	GithubLight,
	/// `nord`
	Nord,
	/// `one-dark-pro`
	OneDarkPro,
	/// `twilight`
	Twilight,
	/// `xcode-dark`
	XcodeDark,
	/// `xcode-light`
	XcodeLight,
}

impl HighlighterTheme {
	/// Kebab-case theme name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::AtomOneDark => "atom-one-dark",
			Self::AtomOneLight => "atom-one-light",
			Self::Dracula => "dracula",
			Self::GithubDark => "github-dark",
			Self::GithubLight => "github-light",
			Self::Nord => "nord",
			Self::OneDarkPro => "one-dark-pro",
			Self::Twilight => "twilight",
			Self::XcodeDark => "xcode-dark",
			Self::XcodeLight => "xcode-light",
		}
	}

	/// Stylesheet file name.
	pub fn stylesheet(&self) -> String {
		format!("prism-{}.css", self.as_str())
	}
}

impl fmt::Display for HighlighterTheme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
