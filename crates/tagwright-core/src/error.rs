//! Error types for tagwright-core

use thiserror::Error;

/// Error type for attribute construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
	/// Attribute name was empty
	#[error("Attribute name must not be empty")]
	EmptyName,

	/// Attribute name contained a character HTML does not allow in names
	#[error("Invalid character {character:?} in attribute name {name:?}")]
	InvalidName {
		/// The rejected name
		name: String,
		/// First offending character
		character: char,
	},
}

/// Result type for attribute operations
pub type Result<T> = std::result::Result<T, AttributeError>;
