//! Theme-driven placeholder text.
//!
//! A `Theme` bundles a word pool with the connector and punctuation used to
//! assemble it. Generation is split by unit size:
//! - words and sentences (`generator`)
//! - length-targeted text (`text`)
//! - named collections of themes (`registry`)

/// Theme value object (word pool, connector, punctuation, variance).
pub mod theme;

/// Words, sentences and paragraphs.
pub mod generator;

/// Length-targeted text assembly.
pub mod text;

/// Named themes loaded from a folder.
pub mod registry;

/// Default number of words per sentence.
pub const DEFAULT_NB_WORDS: usize = 6;

/// Default number of sentences per paragraph.
pub const DEFAULT_NB_SENTENCES: usize = 3;

/// Default number of units returned by list generators.
pub const DEFAULT_NB: usize = 3;

/// Default character budget of `Theme::text`.
pub const DEFAULT_MAX_CHARS: usize = 200;

/// Uppercases the first character of `s`, leaving the rest untouched.
pub(crate) fn upper_first(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::upper_first;

	#[test]
	fn upper_first_only_touches_first_char() {
		assert_eq!(upper_first("jelly-o"), "Jelly-o");
		assert_eq!(upper_first("Cake"), "Cake");
		assert_eq!(upper_first("écl air"), "Écl air");
		assert_eq!(upper_first(""), "");
	}
}
