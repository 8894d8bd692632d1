use rand::Rng;

use super::theme::Theme;
use super::{upper_first, DEFAULT_NB_SENTENCES, DEFAULT_NB_WORDS};
use crate::error::{IpsumError, Result};

/// Smallest character budget accepted by `Theme::text`.
pub const MIN_CHARS: usize = 5;

/// Separator between paragraphs of a text.
pub const PARAGRAPH_SEPARATOR: &str = "\n";

/// Size class of the units a text is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
	/// Below 25 characters.
	Word,
	/// From 25 to 99 characters.
	Sentence,
	/// 100 characters and more.
	Paragraph,
}

impl Tier {
	/// Selects the tier for a character budget.
	pub fn for_size(max_chars: usize) -> Self {
		match max_chars {
			0..25 => Tier::Word,
			25..100 => Tier::Sentence,
			_ => Tier::Paragraph,
		}
	}
}

impl Theme {
	/// Returns a text of roughly `max_chars` characters.
	///
	/// Depending on `max_chars`, the text is made of words, sentences or
	/// paragraphs (see `Tier`). Units are appended until the budget is
	/// exceeded, then the last one is dropped. The result is therefore usually
	/// shorter than `max_chars`, but never cut inside a unit.
	///
	/// # Errors
	/// - `InvalidSize` if `max_chars < 5`.
	/// - `Exhausted` if no unit fits within the budget after the theme's
	///   `max_attempts` tries.
	pub fn text<R: Rng + ?Sized>(&self, rng: &mut R, max_chars: usize) -> Result<String> {
		if max_chars < MIN_CHARS {
			return Err(IpsumError::InvalidSize(max_chars));
		}

		match Tier::for_size(max_chars) {
			Tier::Word => {
				let mut text = self.accumulate(rng, max_chars, self.connector(), |theme, rng| {
					theme.word(rng).map(str::to_owned)
				})?;
				if let Some(first) = text.first_mut() {
					*first = upper_first(first);
				}
				if let Some(last) = text.last_mut() {
					last.push_str(self.punctuation());
				}
				Ok(text.concat())
			}
			Tier::Sentence => {
				let text = self.accumulate(rng, max_chars, self.connector(), |theme, rng| {
					theme.sentence(rng, DEFAULT_NB_WORDS, true)
				})?;
				Ok(text.concat())
			}
			Tier::Paragraph => {
				let text = self.accumulate(rng, max_chars, PARAGRAPH_SEPARATOR, |theme, rng| {
					theme.paragraph(rng, DEFAULT_NB_SENTENCES, true)
				})?;
				Ok(text.concat())
			}
		}
	}

	/// Appends units until their total length reaches `max_chars`, then drops
	/// the last one.
	///
	/// Every unit but the first is prefixed with `separator`. The whole
	/// accumulation restarts while the result is empty or an empty unit
	/// comes up, up to `max_attempts`.
	fn accumulate<R, F>(&self, rng: &mut R, max_chars: usize, separator: &str, mut unit: F) -> Result<Vec<String>>
	where
		R: Rng + ?Sized,
		F: FnMut(&Self, &mut R) -> Result<String>,
	{
		'attempts: for attempt in 1..=self.max_attempts() {
			let mut parts: Vec<String> = Vec::new();
			let mut size = 0;
			while size < max_chars {
				let generated = unit(self, rng)?;
				if generated.is_empty() {
					// The budget could never be reached
					log::trace!("attempt {attempt}: empty unit");
					continue 'attempts;
				}
				let prefix = if size > 0 { separator } else { "" };
				let part = format!("{prefix}{generated}");
				size += part.chars().count();
				parts.push(part);
			}
			parts.pop();

			if !parts.is_empty() {
				return Ok(parts);
			}
			log::trace!("attempt {attempt}: first unit already exceeds {max_chars} characters");
		}

		Err(IpsumError::Exhausted { max_chars, attempts: self.max_attempts() })
	}
}
