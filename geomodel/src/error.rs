use thiserror::Error;

/// Errors raised by the record model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
	/// A requested key is neither delegated nor present in local storage.
	#[error("key not found: '{0}'")]
	KeyNotFound(String),
}
