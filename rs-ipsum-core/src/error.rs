//! Error types for placeholder generation.

use thiserror::Error;

/// Errors raised by generation primitives and theme loading.
///
/// Generation errors are raised immediately at the call and never retried;
/// no partial result is returned alongside them.
#[derive(Debug, Error)]
pub enum IpsumError {
	#[error("invalid range: min ({min}) is greater than max ({max})")]
	InvalidRange { min: i64, max: i64 },

	#[error("cannot pick an element from an empty pool")]
	EmptyPool,

	#[error("sample length {length} is longer than the {available} elements to pick from")]
	InvalidLength { length: usize, available: usize },

	#[error("text can only be generated for at least 5 characters, got {0}")]
	InvalidSize(usize),

	#[error("cannot build a number of {0} digits")]
	TooManyDigits(u32),

	#[error("invalid weight: {0}")]
	InvalidWeight(String),

	#[error("no text of at most {max_chars} characters after {attempts} attempts")]
	Exhausted { max_chars: usize, attempts: usize },

	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),

	#[error("theme cache error: {0}")]
	Codec(#[from] postcard::Error),
}

/// Shorthand result type used across the crate.
pub type Result<T> = std::result::Result<T, IpsumError>;
