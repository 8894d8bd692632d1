//! Themed placeholder text generation library.
//!
//! This crate provides a small "lorem ipsum" style generation system including:
//! - Randomization primitives over an explicit random source
//! - Placeholder substitution in templates (`numerify`, `lexify`, `bothify`)
//! - Theme-driven words, sentences and paragraphs with natural length variance
//! - Length-targeted text assembly
//!
//! Every operation takes the random source as a parameter, so callers decide
//! between `rand::rng()` and a seeded generator.

/// Crate-wide error type.
pub mod error;

/// Randomization primitives and placeholder templates.
///
/// Independent from themes: usable for any pool of values.
pub mod random;

/// Theme-driven text generation (words, sentences, paragraphs, bounded text).
pub mod lorem;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use error::{IpsumError, Result};
pub use lorem::theme::Theme;
pub use lorem::registry::ThemeRegistry;
pub use random::pool::Pool;
pub use random::variance::{randomize_nb_elements, Variance};
