//! Error types for tagwright-elements

use tagwright_core::AttributeError;
use thiserror::Error;

/// Error type for element construction and site configuration
#[derive(Debug, Error)]
pub enum ElementError {
	/// Invalid attribute name
	#[error(transparent)]
	Attribute(#[from] AttributeError),

	/// Invalid tag name
	#[error("Invalid tag name: {0:?}")]
	InvalidTagName(String),

	/// Site configuration could not be parsed
	#[error("Invalid site configuration: {0}")]
	Config(#[from] toml::de::Error),
}

/// Result type for element operations
pub type Result<T> = std::result::Result<T, ElementError>;
