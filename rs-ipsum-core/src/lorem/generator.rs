use rand::Rng;

use super::theme::Theme;
use super::{upper_first, DEFAULT_NB_SENTENCES, DEFAULT_NB_WORDS};
use crate::error::Result;
use crate::random::pool::{random_element, random_sample, Pool};

impl Theme {
	/// Returns a random word of the pool.
	///
	/// Example: `"lollipop"`
	pub fn word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str> {
		random_element(rng, Pool::Uniform(self.words_pool())).map(String::as_str)
	}

	/// Returns `nb` words drawn independently (repetitions allowed).
	pub fn words<R: Rng + ?Sized>(&self, rng: &mut R, nb: usize) -> Result<Vec<&str>> {
		let words = random_sample(rng, Pool::Uniform(self.words_pool()), Some(nb))?;
		Ok(words.into_iter().map(String::as_str).collect())
	}

	/// Returns a sentence of about `nb_words` words.
	///
	/// # Parameters
	/// - `nb_words`: requested number of words. `0` yields an empty string.
	/// - `variable`: when `true`, the count varies within the theme variance
	///   (never below 1). When `false`, exactly `nb_words` words are used.
	///
	/// The first letter is uppercased and the theme punctuation is appended.
	///
	/// Example: `"Tiramisu gummies cake sweet roll."`
	pub fn sentence<R: Rng + ?Sized>(&self, rng: &mut R, nb_words: usize, variable: bool) -> Result<String> {
		if nb_words == 0 {
			return Ok(String::new());
		}

		let nb_words = if variable {
			self.variance().randomize(rng, nb_words, false, false)
		} else {
			nb_words
		};

		let words = self.words(rng, nb_words)?;
		let mut sentence = String::new();
		for (i, word) in words.iter().enumerate() {
			if i == 0 {
				sentence.push_str(&upper_first(word));
			} else {
				sentence.push_str(self.connector());
				sentence.push_str(word);
			}
		}
		sentence.push_str(self.punctuation());
		Ok(sentence)
	}

	/// Returns `nb` sentences of the default size.
	pub fn sentences<R: Rng + ?Sized>(&self, rng: &mut R, nb: usize) -> Result<Vec<String>> {
		(0..nb).map(|_| self.sentence(rng, DEFAULT_NB_WORDS, true)).collect()
	}

	/// Returns a paragraph of about `nb_sentences` sentences.
	///
	/// Same rules as `sentence`, applied to the sentence count. Sentences are
	/// joined with the theme connector.
	pub fn paragraph<R: Rng + ?Sized>(&self, rng: &mut R, nb_sentences: usize, variable: bool) -> Result<String> {
		if nb_sentences == 0 {
			return Ok(String::new());
		}

		let nb_sentences = if variable {
			self.variance().randomize(rng, nb_sentences, false, false)
		} else {
			nb_sentences
		};

		Ok(self.sentences(rng, nb_sentences)?.join(self.connector()))
	}

	/// Returns `nb` paragraphs of the default size.
	pub fn paragraphs<R: Rng + ?Sized>(&self, rng: &mut R, nb: usize) -> Result<Vec<String>> {
		(0..nb).map(|_| self.paragraph(rng, DEFAULT_NB_SENTENCES, true)).collect()
	}
}
